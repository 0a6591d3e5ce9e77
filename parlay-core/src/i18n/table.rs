use super::locale::Locale;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("invalid translation bundle for '{locale}': {source}")]
    Parse {
        locale: &'static str,
        source: serde_json::Error,
    },
}

const BUNDLED: &[(Locale, &str)] = &[
    (Locale::En, include_str!("../../i18n/en.json")),
    (Locale::Zh, include_str!("../../i18n/zh.json")),
    (Locale::Th, include_str!("../../i18n/th.json")),
];

/// Immutable locale -> nested key/value data, loaded once per process.
/// English is the fallback source of truth for missing keys.
#[derive(Debug)]
pub struct TranslationTable {
    bundles: BTreeMap<Locale, Value>,
}

impl TranslationTable {
    /// Build a table from raw JSON bundles.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending locale when a bundle fails to
    /// parse.
    pub fn from_json(entries: &[(Locale, &str)]) -> Result<Self, TranslationError> {
        let mut bundles = BTreeMap::new();
        for (locale, raw) in entries {
            let value = serde_json::from_str(raw).map_err(|source| TranslationError::Parse {
                locale: locale.code(),
                source,
            })?;
            bundles.insert(*locale, value);
        }
        Ok(Self { bundles })
    }

    /// Load the bundles shipped with the app. A broken bundle degrades to an
    /// empty object so startup never fails on bad translation data.
    #[must_use]
    pub fn embedded() -> Self {
        let bundles = BUNDLED
            .iter()
            .map(|(locale, raw)| {
                let value = serde_json::from_str(raw)
                    .unwrap_or(Value::Object(serde_json::Map::new()));
                (*locale, value)
            })
            .collect();
        Self { bundles }
    }

    fn lookup<'a>(&'a self, locale: Locale, key: &str) -> Option<&'a str> {
        let mut current = self.bundles.get(&locale)?;
        for segment in key.split('.') {
            current = current.get(segment)?;
        }
        // A branch node is not a translation; treat it as missing.
        current.as_str()
    }

    /// Resolve a dot-delimited key against `locale`, falling back to the
    /// default locale and finally to the key itself. Total: never panics,
    /// never returns an empty string for a missing key.
    #[must_use]
    pub fn resolve(&self, locale: Locale, key: &str) -> String {
        self.lookup(locale, key)
            .or_else(|| self.lookup(Locale::default(), key))
            .map_or_else(|| key.to_string(), str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TranslationTable {
        TranslationTable::from_json(&[
            (
                Locale::En,
                r#"{"contact":{"addNewFriend":"Add new friend","nested":{"deep":"Deep"}},"onlyEn":"English only"}"#,
            ),
            (
                Locale::Zh,
                r#"{"contact":{"addNewFriend":"添加好友"}}"#,
            ),
        ])
        .unwrap()
    }

    #[test]
    fn resolves_in_requested_locale() {
        assert_eq!(table().resolve(Locale::Zh, "contact.addNewFriend"), "添加好友");
    }

    #[test]
    fn falls_back_to_default_locale() {
        assert_eq!(table().resolve(Locale::Zh, "onlyEn"), "English only");
        assert_eq!(table().resolve(Locale::Zh, "contact.nested.deep"), "Deep");
    }

    #[test]
    fn missing_locale_falls_back_entirely() {
        // Thai was never loaded into this table.
        assert_eq!(table().resolve(Locale::Th, "onlyEn"), "English only");
    }

    #[test]
    fn absent_key_returns_key_verbatim() {
        assert_eq!(table().resolve(Locale::En, "no.such.key"), "no.such.key");
        assert_eq!(table().resolve(Locale::Zh, "no.such.key"), "no.such.key");
    }

    #[test]
    fn branch_node_is_treated_as_missing() {
        // "contact" resolves to an object in both locales; the key comes back.
        assert_eq!(table().resolve(Locale::Zh, "contact"), "contact");
        assert_eq!(table().resolve(Locale::En, "contact"), "contact");
    }

    #[test]
    fn from_json_rejects_broken_bundle() {
        let err = TranslationTable::from_json(&[(Locale::En, "{nope")]).unwrap_err();
        assert!(err.to_string().contains("'en'"));
    }

    #[test]
    fn embedded_bundles_parse_and_cover_all_keys() {
        let table = TranslationTable::embedded();
        // Every leaf key in the default locale resolves to non-empty text in
        // every supported locale (localized or via fallback).
        let mut keys = Vec::new();
        collect_keys("", &serde_json::from_str(BUNDLED[0].1).unwrap(), &mut keys);
        assert!(!keys.is_empty());
        for locale in Locale::ALL {
            for key in &keys {
                let text = table.resolve(locale, key);
                assert!(!text.is_empty(), "{key} empty for {}", locale.code());
                assert_ne!(&text, key, "{key} unresolved for {}", locale.code());
            }
        }
    }

    fn collect_keys(prefix: &str, value: &Value, out: &mut Vec<String>) {
        if let Value::Object(map) = value {
            for (k, v) in map {
                let next = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                if v.is_object() {
                    collect_keys(&next, v, out);
                } else {
                    out.push(next);
                }
            }
        }
    }
}

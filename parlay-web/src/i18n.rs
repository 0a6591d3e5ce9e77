//! Browser bridge over the core locale store and translation table.
//!
//! The table is loaded once per process; the store persists the active
//! locale under a single localStorage key. `init` must run before the first
//! render so the persisted locale never flashes to the default.

use once_cell::sync::Lazy;
use parlay_core::{Locale, LocaleMeta, LocaleSlot, LocaleStore, TranslationTable};

const STORAGE_KEY: &str = "parlay.locale";

static TABLE: Lazy<TranslationTable> = Lazy::new(TranslationTable::embedded);

thread_local! {
    static STORE: LocaleStore = LocaleStore::new(Box::new(StorageSlot));
}

/// Locale persistence backed by localStorage. Off-browser (native tests)
/// the slot is empty and writes are dropped.
struct StorageSlot;

impl LocaleSlot for StorageSlot {
    fn load(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            crate::dom::local_storage()
                .ok()
                .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn save(&self, code: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Ok(storage) = crate::dom::local_storage() {
                let _ = storage.set_item(STORAGE_KEY, code);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = code;
        }
    }
}

/// Adopt the persisted locale. Idempotent; called from `start()` before the
/// first render.
pub fn init() {
    STORE.with(|store| {
        if !store.is_ready() {
            store.init();
        }
    });
    apply_document_lang(current_locale());
}

/// Switch the active locale from a raw code. Unsupported codes are ignored
/// by the store, so the `<html lang>` update below is a no-op for them.
pub fn set_lang(code: &str) {
    STORE.with(|store| store.set_code(code));
    apply_document_lang(current_locale());
}

#[must_use]
pub fn current_locale() -> Locale {
    STORE.with(parlay_core::LocaleStore::get)
}

/// Two-letter code of the active locale.
#[must_use]
pub fn current_lang() -> String {
    current_locale().code().to_string()
}

/// Translate a dot-delimited key in the active locale, falling back to
/// English and finally to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    TABLE.resolve(current_locale(), key)
}

/// Supported locales with native display names, for language selectors.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    parlay_core::locales()
}

fn apply_document_lang(locale: Locale) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", locale.code());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = locale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_after_init_and_locale_switch() {
        init();
        set_lang("en");
        assert_eq!(t("deposit.title"), "Deposit");
        set_lang("zh");
        assert_eq!(t("deposit.title"), "存款");
        set_lang("en");
    }

    #[test]
    fn unsupported_code_leaves_locale_untouched() {
        init();
        set_lang("en");
        set_lang("xx");
        assert_eq!(current_lang(), "en");
    }

    #[test]
    fn missing_key_renders_the_key() {
        init();
        assert_eq!(t("no.such.key"), "no.such.key");
    }
}

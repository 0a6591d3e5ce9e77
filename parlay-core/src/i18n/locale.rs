/// A supported UI locale. Exactly one is active at a time; values outside
/// this set are rejected wherever raw codes enter the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
    Th,
}

impl Locale {
    pub const ALL: [Self; 3] = [Self::En, Self::Zh, Self::Th];

    /// Two-letter code used in persisted state and `<html lang>`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
            Self::Th => "th",
        }
    }

    /// Parse a raw code; unknown codes yield `None` rather than a default,
    /// so callers can distinguish "unsupported" from "absent".
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|locale| locale.code() == code)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
    },
    LocaleMeta {
        code: "zh",
        name: "中文",
    },
    LocaleMeta {
        code: "th",
        name: "ไทย",
    },
];

/// Supported locales with their native display names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

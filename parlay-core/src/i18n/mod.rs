//! Localization: supported locales, translation resolution, locale store.

mod locale;
mod store;
mod table;

pub use locale::{Locale, LocaleMeta, locales};
pub use store::{LocaleSlot, LocaleStore, SubscriptionId};
pub use table::{TranslationError, TranslationTable};

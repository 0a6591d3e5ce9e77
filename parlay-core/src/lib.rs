//! Parlay Client Core
//!
//! Platform-agnostic navigation-context resolution and localization for the
//! Parlay casino web client. This crate decides what chrome a screen gets,
//! where "back" goes, which translation a key resolves to, and how the
//! embedded-game exit confirmation behaves. Browser integration (DOM, timers,
//! localStorage) lives in `parlay-web`.

pub mod exit;
pub mod i18n;
pub mod nav;

// Re-export commonly used types
pub use exit::{
    DOUBLE_CLICK_THRESHOLD_MS, EXIT_WINDOW_MS, ExitEffect, ExitSession, ExitState,
};
pub use i18n::{
    Locale, LocaleMeta, LocaleSlot, LocaleStore, SubscriptionId, TranslationError,
    TranslationTable, locales,
};
pub use nav::{BackTarget, Chrome, ChromeVariant, Query, resolve_back, resolve_chrome};

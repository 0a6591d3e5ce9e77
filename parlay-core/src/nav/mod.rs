//! Navigation-context resolution: header chrome and back-navigation targets.
//!
//! Both resolvers are pure functions of the current path (plus query
//! parameters for back navigation) and the static tables below; they are
//! total, deterministic and safe to call on every render.

mod back;
mod chrome;
mod query;

pub use back::{BackTarget, resolve_back};
pub use chrome::{Chrome, ChromeVariant, resolve_chrome};
pub use query::Query;

/// True when `path` lies strictly below `base`, segment-aligned: matches
/// `/account/contact/42` against `/account/contact` but never
/// `/account/contactX`.
pub(crate) fn is_strictly_under(base: &str, path: &str) -> bool {
    path.len() > base.len() + 1
        && path.starts_with(base)
        && path.as_bytes()[base.len()] == b'/'
}

use super::is_strictly_under;
use super::query::Query;

/// Destination for the header back affordance. Distinct from browser
/// history: the target is derived from where the user *is*, not where they
/// came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackTarget {
    pub href: String,
}

impl BackTarget {
    fn to(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

const ROOT: &str = "/";
const CONTACT_LIST: &str = "/account/contact";
const CONTACT_DETAIL_ROOT: &str = "/account/contact";
const BANK_LIST: &str = "/account/bank";

/// Exact path -> destination. Checked before any dynamic rule, so the
/// new-friend screen never falls into the generic contact-detail rule.
const EXACT_RULES: &[(&str, &str)] = &[
    ("/login", ROOT),
    ("/register", ROOT),
    ("/forgot-password", ROOT),
    ("/about", ROOT),
    ("/terms", ROOT),
    ("/account/settings", ROOT),
    ("/account/contact/new-friend", CONTACT_LIST),
];

/// Sub-pages of these hubs return to the hub itself.
const HUB_ROOTS: &[&str] = &[
    "/deposit",
    "/withdraw",
    "/account/bank",
    "/report",
    "/account/profile",
    "/redeem",
];

/// Resolve where "back" goes from `path` with the current `query`.
///
/// A relative `returnUrl` takes precedence over every path rule; absolute
/// and protocol-relative URLs are rejected to keep the back affordance from
/// becoming an open redirect. Total: every input yields a destination,
/// defaulting to the application root.
#[must_use]
pub fn resolve_back(path: &str, query: &Query) -> BackTarget {
    if let Some(url) = query.get("returnUrl") {
        if url.starts_with('/') && !url.starts_with("//") {
            return BackTarget::to(url);
        }
    }

    if let Some((_, destination)) = EXACT_RULES.iter().find(|(key, _)| *key == path) {
        return BackTarget::to(*destination);
    }

    match path {
        "/transfer" => {
            return match query.get("id") {
                Some(id) if !id.is_empty() => {
                    BackTarget::to(format!("{CONTACT_DETAIL_ROOT}/{id}"))
                }
                _ => BackTarget::to(format!("{CONTACT_LIST}?mode=transfer")),
            };
        }
        "/account/reset-pin" => {
            return if query.get("from") == Some("add-bank") {
                BackTarget::to(BANK_LIST)
            } else {
                BackTarget::to("/account")
            };
        }
        _ => {}
    }

    // Contact detail screens (any depth) return to the list.
    if is_strictly_under(CONTACT_DETAIL_ROOT, path) {
        return BackTarget::to(CONTACT_LIST);
    }

    if let Some(hub) = HUB_ROOTS.iter().find(|hub| is_strictly_under(hub, path)) {
        return BackTarget::to(*hub);
    }

    BackTarget::to(ROOT)
}

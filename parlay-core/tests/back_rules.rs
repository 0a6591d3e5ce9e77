//! Scenario coverage for back-navigation and chrome resolution through the
//! public API.

use parlay_core::{ChromeVariant, Query, resolve_back, resolve_chrome};

fn back(path: &str, query: &str) -> String {
    resolve_back(path, &Query::parse(query)).href
}

#[test]
fn return_url_guard_holds_for_every_path() {
    for path in ["/", "/login", "/transfer", "/account/contact/42", "/nowhere"] {
        assert_eq!(back(path, "returnUrl=/foo"), "/foo");
        assert_ne!(back(path, "returnUrl=https://evil.com"), "https://evil.com");
    }
}

#[test]
fn transfer_scenarios_match_contact_flows() {
    assert_eq!(back("/transfer", "id=42"), "/account/contact/42");
    assert_eq!(back("/transfer", ""), "/account/contact?mode=transfer");
}

#[test]
fn contact_detail_chrome_scenarios() {
    let detail = resolve_chrome("/account/contact/42");
    assert_eq!(detail.variant, ChromeVariant::Subpage);
    assert_eq!(detail.title_key, Some("contact.friendDetail"));

    let alias = resolve_chrome("/account/contact/42/alias");
    assert_eq!(alias.variant, ChromeVariant::Subpage);
    assert_eq!(alias.title_key, Some("contact.changeAlias"));
}

#[test]
fn chrome_and_back_tables_agree_on_the_contact_hub() {
    // Whatever screen inherits the contact-detail title must also return to
    // the contact list; the two tables move in lockstep.
    for path in ["/account/contact/42", "/account/contact/abc/alias"] {
        assert_eq!(
            resolve_chrome(path).title_key.is_some(),
            back(path, "") == "/account/contact"
        );
    }
}

#[test]
fn every_known_chrome_path_has_a_back_destination() {
    // Back resolution is total: nothing falls through to an empty href.
    for path in [
        "/", "/login", "/register", "/forgot-password", "/account",
        "/account/profile", "/account/settings", "/account/reset-pin",
        "/account/bank", "/account/bank/add", "/account/contact",
        "/account/contact/new-friend", "/deposit", "/deposit/online",
        "/deposit/transfer", "/withdraw", "/withdraw/bank", "/transfer",
        "/report", "/report/betting", "/report/transaction", "/redeem",
        "/about", "/terms",
    ] {
        let href = back(path, "");
        assert!(href.starts_with('/'), "{path} resolved to {href:?}");
    }
}

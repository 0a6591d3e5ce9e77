use super::is_strictly_under;

/// Visual variant of the shared header for a given screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeVariant {
    /// Top-level screens show the brand logo.
    Logo,
    /// Everything else shows a back affordance plus a title.
    Subpage,
}

/// Header configuration derived from the current path. A missing title key
/// means the caller supplies its own default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub variant: ChromeVariant,
    pub title_key: Option<&'static str>,
}

/// Screens whose header shows the logo instead of a title.
const LOGO_ROUTES: &[&str] = &["/", "/promotions", "/vip"];

/// Dynamic contact-detail screens inherit from this root; see the alias
/// override in [`resolve_chrome`].
const CONTACT_DETAIL_ROOT: &str = "/account/contact";
const ALIAS_EDIT_SUFFIX: &str = "/alias";
const ALIAS_EDIT_TITLE: &str = "contact.changeAlias";

/// Path pattern -> header title key. Keys must stay in lockstep with the
/// routes registered in the web crate and with the back rules.
const CHROME_TABLE: &[(&str, Option<&'static str>)] = &[
    ("/login", Some("auth.login")),
    ("/register", Some("auth.register")),
    ("/forgot-password", Some("auth.forgotPassword")),
    ("/account", Some("account.title")),
    ("/account/profile", Some("account.profile")),
    ("/account/settings", Some("account.settings")),
    ("/account/reset-pin", Some("account.resetPin")),
    ("/account/bank", Some("bank.myBanks")),
    ("/account/bank/add", Some("bank.addBank")),
    ("/account/contact", Some("contact.friendDetail")),
    ("/account/contact/new-friend", Some("contact.addNewFriend")),
    ("/deposit", Some("deposit.title")),
    ("/deposit/online", Some("deposit.online")),
    ("/deposit/transfer", Some("deposit.bankTransfer")),
    ("/withdraw", Some("withdraw.title")),
    ("/withdraw/bank", Some("withdraw.toBank")),
    ("/transfer", Some("transfer.title")),
    ("/report", Some("report.title")),
    ("/report/betting", Some("report.betting")),
    ("/report/transaction", Some("report.transaction")),
    ("/redeem", Some("redeem.title")),
    ("/about", Some("info.about")),
    ("/terms", Some("info.terms")),
];

/// Resolve the header chrome for `path`.
///
/// Exact table matches always win. Otherwise the longest registered key that
/// is a strict, segment-aligned prefix of `path` provides the title, which
/// models parent-route inheritance for dynamic child segments. Idempotent
/// and total: unknown paths get a variant and no title.
#[must_use]
pub fn resolve_chrome(path: &str) -> Chrome {
    let variant = if LOGO_ROUTES.contains(&path) {
        ChromeVariant::Logo
    } else {
        ChromeVariant::Subpage
    };

    if let Some((_, title_key)) = CHROME_TABLE.iter().find(|(key, _)| *key == path) {
        return Chrome {
            variant,
            title_key: *title_key,
        };
    }

    let inherited = CHROME_TABLE
        .iter()
        .filter(|(key, _)| is_strictly_under(key, path))
        .max_by_key(|(key, _)| key.len());

    if let Some((key, title_key)) = inherited {
        // Alias editing lives under the contact detail screen but carries
        // its own title.
        if *key == CONTACT_DETAIL_ROOT && path.ends_with(ALIAS_EDIT_SUFFIX) {
            return Chrome {
                variant,
                title_key: Some(ALIAS_EDIT_TITLE),
            };
        }
        return Chrome {
            variant,
            title_key: *title_key,
        };
    }

    Chrome {
        variant,
        title_key: None,
    }
}

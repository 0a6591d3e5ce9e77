use yew_router::prelude::*;

/// Navigable paths. Must stay in lockstep with the chrome and back-rule
/// tables in `parlay-core`.
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/promotions")]
    Promotions,
    #[at("/vip")]
    Vip,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/account")]
    Account,
    #[at("/account/profile")]
    Profile,
    #[at("/account/settings")]
    Settings,
    #[at("/account/reset-pin")]
    ResetPin,
    #[at("/account/bank")]
    BankList,
    #[at("/account/bank/add")]
    AddBank,
    #[at("/account/contact")]
    ContactList,
    #[at("/account/contact/new-friend")]
    NewFriend,
    #[at("/account/contact/:id")]
    ContactDetail { id: String },
    #[at("/account/contact/:id/alias")]
    ContactAlias { id: String },
    #[at("/deposit")]
    Deposit,
    #[at("/deposit/online")]
    DepositOnline,
    #[at("/deposit/transfer")]
    DepositTransfer,
    #[at("/withdraw")]
    Withdraw,
    #[at("/withdraw/bank")]
    WithdrawBank,
    #[at("/transfer")]
    Transfer,
    #[at("/report")]
    Report,
    #[at("/report/betting")]
    ReportBetting,
    #[at("/report/transaction")]
    ReportTransaction,
    #[at("/redeem")]
    Redeem,
    #[at("/game/:id")]
    Game { id: String },
    #[at("/about")]
    About,
    #[at("/terms")]
    Terms,
    #[at("/404")]
    #[not_found]
    NotFound,
}

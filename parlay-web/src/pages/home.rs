use crate::i18n::t;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const FEATURED_GAMES: &[(&str, &str)] = &[
    ("baccarat", "home.baccarat"),
    ("roulette", "home.roulette"),
    ("slots", "home.slots"),
];

/// Lobby screen: featured game tiles plus quick links into the money flows.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <section class="lobby" data-testid="lobby">
            <h2>{ t("home.featured") }</h2>
            <ul class="game-grid">
                { for FEATURED_GAMES.iter().map(|(id, title_key)| html! {
                    <li class="game-tile">
                        <Link<Route> to={Route::Game { id: (*id).to_string() }}>
                            { t(title_key) }
                        </Link<Route>>
                    </li>
                }) }
            </ul>
            <h2>{ t("home.quickLinks") }</h2>
            <nav class="quick-links" aria-label={t("home.quickLinks")}>
                <Link<Route> to={Route::Deposit}>{ t("deposit.title") }</Link<Route>>
                <Link<Route> to={Route::Withdraw}>{ t("withdraw.title") }</Link<Route>>
                <Link<Route> to={Route::Transfer}>{ t("transfer.title") }</Link<Route>>
                <Link<Route> to={Route::Report}>{ t("report.title") }</Link<Route>>
                <Link<Route> to={Route::Account}>{ t("account.title") }</Link<Route>>
            </nav>
        </section>
    }
}

use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Not-found page to show when routing fails to match a known view.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ crate::i18n::t("notFound.title") }</h1>
            <p>{ crate::i18n::t("notFound.message") }</p>
            <Link<Route> to={Route::Home}>
                { crate::i18n::t("notFound.back") }
            </Link<Route>>
        </section>
    }
}

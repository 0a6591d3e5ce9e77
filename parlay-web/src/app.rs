use crate::components::header::Header;
use crate::dom;
use crate::pages::{
    game::GamePage, home::HomePage, not_found::NotFound, section::SectionPage,
    settings::SettingsPage,
};
use crate::router::Route;
use parlay_core::{Query, resolve_back, resolve_chrome};
use std::collections::BTreeMap;
use yew::prelude::*;
use yew_router::prelude::*;

/// Main application component providing browser routing
///
/// Sets up the router context for the entire application and renders the
/// main `AppShell` component. This is the top-level component that gets
/// mounted to the DOM.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppShell />
        </BrowserRouter>
    }
}

/// Push an href produced by the back resolver. The href is split into a
/// route and query pairs; unroutable targets land on the not-found screen.
fn navigate_to(navigator: &Navigator, href: &str) {
    let (path, query_raw) = href
        .split_once('?')
        .map_or((href, ""), |(path, query)| (path, query));
    let route = Route::recognize(path).unwrap_or(Route::NotFound);
    if query_raw.is_empty() {
        navigator.push(&route);
        return;
    }
    let query = Query::parse(query_raw);
    let pairs: BTreeMap<&str, &str> = query.iter().collect();
    if let Err(err) = navigator.push_with_query(&route, &pairs) {
        dom::console_error(&format!("back navigation failed: {err}"));
        navigator.push(&route);
    }
}

#[function_component(AppShell)]
pub fn app_shell() -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let current_lang = use_state(crate::i18n::current_lang);

    let path = location
        .as_ref()
        .map_or_else(|| "/".to_string(), |loc| loc.path().to_string());
    let query_raw = location
        .as_ref()
        .map_or_else(String::new, |loc| loc.query_str().to_string());

    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    // The embedded game surface is full-screen and supplies its own back
    // affordance wired to the exit machine.
    let fullscreen = matches!(route, Route::Game { .. });

    let chrome = resolve_chrome(&path);

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |()| {
            let target = resolve_back(&path, &Query::parse(&query_raw));
            if let Some(nav) = navigator.as_ref() {
                navigate_to(nav, &target.href);
            }
        })
    };

    let on_lang_change = {
        let current_lang = current_lang.clone();
        Callback::from(move |lang: String| current_lang.set(lang))
    };

    html! {
        <>
            if !fullscreen {
                <Header
                    chrome={chrome}
                    current_lang={(*current_lang).clone()}
                    on_back={on_back}
                    on_lang_change={on_lang_change}
                />
            }
            <main id="main">
                <Switch<Route> render={switch} />
            </main>
        </>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Game { id } => html! { <GamePage game_id={id} /> },
        Route::Settings => html! { <SettingsPage /> },
        Route::NotFound => html! { <NotFound /> },
        other => {
            let chrome = resolve_chrome(&other.to_path());
            html! { <SectionPage title_key={chrome.title_key} /> }
        }
    }
}

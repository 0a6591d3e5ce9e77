use crate::i18n::{locales, set_lang, t};
use parlay_core::{Chrome, ChromeVariant};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub chrome: Chrome,
    pub current_lang: String,
    pub on_back: Callback<()>,
    pub on_lang_change: Callback<String>,
}

/// Shared header: brand logo on top-level screens, back affordance plus a
/// resolved title everywhere else.
#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                set_lang(&sel.value());
                cb.emit(sel.value());
            }
        })
    };
    let on_back = {
        let cb = p.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let left = match p.chrome.variant {
        ChromeVariant::Logo => html! {
            <a class="logo" href="/" aria-label={t("common.appName")}>
                { t("common.appName") }
            </a>
        },
        ChromeVariant::Subpage => {
            let title = p
                .chrome
                .title_key
                .map_or_else(|| t("common.appName"), t);
            html! {
                <>
                    <button
                        type="button"
                        class="back-btn"
                        aria-label={t("common.back")}
                        onclick={on_back}
                    >
                        {"‹"}
                    </button>
                    <h1 class="header-title">{ title }</h1>
                </>
            }
        }
    };

    html! {
        <header role="banner">
            <div class="header-content">
                <div class="header-left">{ left }</div>
                <nav aria-label={t("nav.language")} class="header-right">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select
                        id="lang-select"
                        onchange={on_change}
                        aria-label={t("nav.language")}
                    >
                        { for locales().iter().map(|meta| html! {
                            <option
                                value={meta.code}
                                selected={meta.code == p.current_lang}
                            >
                                { meta.name }
                            </option>
                        }) }
                    </select>
                </nav>
            </div>
        </header>
    }
}

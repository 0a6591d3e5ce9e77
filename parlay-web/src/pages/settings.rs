use crate::i18n::{current_lang, locales, set_lang, t};
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Account settings: currently just the display-language preference, which
/// persists across sessions through the locale store.
#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let active = use_state(current_lang);

    let on_change = {
        let active = active.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                set_lang(&sel.value());
                active.set(current_lang());
            }
        })
    };

    html! {
        <section class="panel settings" data-testid="settings-screen">
            <h2>{ t("settings.title") }</h2>
            <label for="settings-lang">{ t("settings.language") }</label>
            <select id="settings-lang" onchange={on_change}>
                { for locales().iter().map(|meta| html! {
                    <option value={meta.code} selected={meta.code == *active}>
                        { meta.name }
                    </option>
                }) }
            </select>
        </section>
    }
}

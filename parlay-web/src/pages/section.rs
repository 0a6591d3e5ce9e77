use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SectionPageProps {
    pub title_key: Option<&'static str>,
}

/// Generic titled screen for the data-driven sections (deposits, reports,
/// contacts and friends). Their content is fetched and rendered by the
/// remote-resource layer; the shell only guarantees consistent chrome.
#[function_component(SectionPage)]
pub fn section_page(props: &SectionPageProps) -> Html {
    let title = props.title_key.map_or_else(|| t("common.appName"), t);
    html! {
        <section class="panel" aria-busy="true">
            <h2 class="sr-only">{ title }</h2>
            <p class="panel-loading">{ t("common.loading") }</p>
        </section>
    }
}

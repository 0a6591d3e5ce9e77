use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub visible: bool,
}

/// Confirmation toast shown while the exit machine is armed.
#[function_component(ExitPrompt)]
pub fn exit_prompt(p: &Props) -> Html {
    if !p.visible {
        return Html::default();
    }
    html! {
        <div class="exit-prompt" role="alert" aria-live="assertive">
            { crate::i18n::t("game.exitPrompt") }
        </div>
    }
}

use crate::components::exit_prompt::ExitPrompt;
use crate::dom;
use crate::router::Route;
use parlay_core::{ExitEffect, ExitSession};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GamePageProps {
    pub game_id: String,
}

/// Full-screen embedded-game surface.
///
/// The back affordance feeds the exit machine: a lone press reloads the
/// iframe, a rapid double press arms the confirmation prompt, and a press
/// while armed quits for real. This view owns the machine's single deadline
/// timer; unmounting drops the handle, which clears the timeout, so a fired
/// callback can never reach a destroyed session.
#[function_component(GamePage)]
pub fn game_page(props: &GamePageProps) -> Html {
    let navigator = use_navigator();
    let session = use_mut_ref(ExitSession::new);
    let timer: Rc<RefCell<Option<dom::TimerHandle>>> = use_mut_ref(|| None);
    let prompt_visible = use_state(|| false);
    let reload_nonce = use_state(|| 0_u32);

    {
        // Unconditional timer cleanup on unmount.
        let timer = timer.clone();
        use_effect_with((), move |()| {
            move || {
                timer.borrow_mut().take();
            }
        });
    }

    let on_back = {
        let session = session.clone();
        let timer = timer.clone();
        let prompt_visible = prompt_visible.clone();
        let reload_nonce = reload_nonce.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let effects = session.borrow_mut().press_back(dom::now_ms());
            for effect in effects {
                match effect {
                    ExitEffect::SoftReload => reload_nonce.set(*reload_nonce + 1),
                    ExitEffect::ShowPrompt => prompt_visible.set(true),
                    ExitEffect::HidePrompt => prompt_visible.set(false),
                    ExitEffect::CancelTimer => {
                        timer.borrow_mut().take();
                    }
                    ExitEffect::ArmTimer { duration_ms } => {
                        let session = session.clone();
                        let prompt_visible = prompt_visible.clone();
                        let armed = dom::set_timeout(
                            i32::try_from(duration_ms).unwrap_or(i32::MAX),
                            move || {
                                for fx in session.borrow_mut().window_elapsed() {
                                    if fx == ExitEffect::HidePrompt {
                                        prompt_visible.set(false);
                                    }
                                }
                            },
                        );
                        match armed {
                            // Replacing the handle drops (and clears) any
                            // timer still outstanding.
                            Ok(handle) => {
                                timer.borrow_mut().replace(handle);
                            }
                            Err(err) => dom::console_error(&format!(
                                "failed to arm exit window: {}",
                                dom::js_error_message(&err)
                            )),
                        }
                    }
                    ExitEffect::HardExit => {
                        // Quit result never gates going home.
                        wasm_bindgen_futures::spawn_local(async {
                            if let Err(err) = crate::net::quit_game().await {
                                dom::console_error(&format!(
                                    "quit call failed: {}",
                                    dom::js_error_message(&err)
                                ));
                            }
                        });
                        if let Some(nav) = navigator.as_ref() {
                            nav.push(&Route::Home);
                        }
                    }
                }
            }
        })
    };

    let src = format!(
        "/games/{}/embed?session={}",
        props.game_id, *reload_nonce
    );

    html! {
        <div class="game-surface" data-testid="game-surface">
            <iframe
                title={crate::i18n::t("game.surface")}
                src={src}
                key={*reload_nonce}
                class="game-frame"
            />
            <button
                type="button"
                class="game-back"
                aria-label={crate::i18n::t("common.back")}
                onclick={on_back}
            >
                { crate::i18n::t("common.back") }
            </button>
            <ExitPrompt visible={*prompt_visible} />
        </div>
    }
}

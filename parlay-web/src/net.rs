//! Thin wrappers over the platform API. Nothing in the navigation core waits
//! on these calls.

use wasm_bindgen::JsValue;

const QUIT_ENDPOINT: &str = "/api/game/quit";

/// Tell the platform the player left the embedded game.
///
/// Fire-and-forget from the caller's perspective: navigation home must never
/// be gated on this result.
///
/// # Errors
/// Returns an error when the request cannot be sent or the endpoint answers
/// with a non-success status.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn quit_game() -> Result<(), JsValue> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;

        let init = web_sys::RequestInit::new();
        init.set_method("POST");
        let request = web_sys::Request::new_with_str_and_init(QUIT_ENDPOINT, &init)?;
        let response = JsFuture::from(crate::dom::window().fetch_with_request(&request)).await?;
        let response: web_sys::Response = response.dyn_into()?;
        if response.ok() {
            Ok(())
        } else {
            Err(JsValue::from_str(&format!(
                "quit endpoint returned {}",
                response.status()
            )))
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Ok(())
    }
}

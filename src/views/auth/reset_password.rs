// ============================================================================
// RESET PASSWORD VIEW - Llega desde el link del email con el token en la URL
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::router::{self, Route};
use crate::state::AppState;
use crate::utils::{validate_confirm_password, validate_password};
use crate::viewmodels::SessionViewModel;
use crate::views::shared::{error_slot, form_group, show_form_message, submit_button};

const MESSAGE_SLOT: &str = "reset-message";

pub fn render_reset_password(state: &AppState, reset_token: &str) -> Result<Element, JsValue> {
    let password = Rc::new(RefCell::new(String::new()));
    let confirm = Rc::new(RefCell::new(String::new()));

    let screen = ElementBuilder::new("div")?.class("auth-screen").build();
    let card = ElementBuilder::new("div")?.class("auth-card").build();

    append_child(&card, &ElementBuilder::new("h2")?.text("Reset Password").build())?;

    let form = ElementBuilder::new("form")?.class("auth-form").build();
    append_child(&form, &error_slot(MESSAGE_SLOT)?)?;
    append_child(
        &form,
        &form_group("password", "New Password", "password", "New Password", password.clone())?,
    )?;
    append_child(
        &form,
        &form_group("confirm", "Confirm Password", "password", "Confirm Password", confirm.clone())?,
    )?;
    append_child(&form, &submit_button("Update Password")?)?;

    {
        let password = password.clone();
        let confirm = confirm.clone();
        let session = state.session.clone();
        let reset_token = reset_token.to_string();

        on_submit(&form, move || {
            let password_val = password.borrow().clone();
            let confirm_val = confirm.borrow().clone();

            let validation = validate_password(&password_val)
                .or_else(|| validate_confirm_password(&password_val, &confirm_val));
            if let Some(msg) = validation {
                show_form_message(MESSAGE_SLOT, "danger", &msg);
                return;
            }

            let session = session.clone();
            let reset_token = reset_token.clone();
            spawn_local(async move {
                let vm = SessionViewModel::new();
                match vm.confirm_password_reset(&session, reset_token, password_val).await {
                    Ok(message) => {
                        show_form_message(MESSAGE_SLOT, "success", &message);
                        gloo_timers::callback::Timeout::new(1500, move || {
                            router::navigate(&Route::Login);
                        })
                        .forget();
                    }
                    Err(message) => show_form_message(MESSAGE_SLOT, "danger", &message),
                }
            });
        })?;
    }

    append_child(&card, &form)?;
    append_child(&screen, &card)?;
    Ok(screen)
}

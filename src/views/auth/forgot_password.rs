// ============================================================================
// FORGOT PASSWORD VIEW
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, on_submit, ElementBuilder};
use crate::router::{self, Route};
use crate::state::AppState;
use crate::utils::validate_email;
use crate::viewmodels::SessionViewModel;
use crate::views::shared::{error_slot, form_group, show_form_message, submit_button};

const MESSAGE_SLOT: &str = "forgot-message";

pub fn render_forgot_password(state: &AppState) -> Result<Element, JsValue> {
    let email = Rc::new(RefCell::new(String::new()));

    let screen = ElementBuilder::new("div")?.class("auth-screen").build();
    let card = ElementBuilder::new("div")?.class("auth-card").build();

    append_child(&card, &ElementBuilder::new("h2")?.text("Forgot Password").build())?;
    append_child(
        &card,
        &ElementBuilder::new("p")?
            .class("auth-subtitle")
            .text("Enter your email and we will send you a reset link")
            .build(),
    )?;

    let form = ElementBuilder::new("form")?.class("auth-form").build();
    append_child(&form, &error_slot(MESSAGE_SLOT)?)?;
    append_child(
        &form,
        &form_group("email", "Email Address", "email", "Email Address", email.clone())?,
    )?;
    append_child(&form, &submit_button("Send Reset Link")?)?;

    {
        let email = email.clone();
        let session = state.session.clone();
        on_submit(&form, move || {
            let email_val = email.borrow().clone();
            if let Some(msg) = validate_email(&email_val) {
                show_form_message(MESSAGE_SLOT, "danger", &msg);
                return;
            }
            let session = session.clone();
            spawn_local(async move {
                let vm = SessionViewModel::new();
                match vm.request_password_reset(&session, email_val).await {
                    Ok(message) => show_form_message(MESSAGE_SLOT, "success", &message),
                    Err(message) => show_form_message(MESSAGE_SLOT, "danger", &message),
                }
            });
        })?;
    }

    append_child(&card, &form)?;

    let back = ElementBuilder::new("a")?
        .class("muted")
        .attr("href", "/login")?
        .text("Back to login")
        .build();
    on_click(&back, move |e: web_sys::MouseEvent| {
        e.prevent_default();
        router::navigate(&Route::Login);
    })?;
    append_child(&card, &back)?;

    append_child(&screen, &card)?;
    Ok(screen)
}

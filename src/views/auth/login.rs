// ============================================================================
// LOGIN VIEW
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, on_submit, ElementBuilder};
use crate::router::{self, Route};
use crate::state::AppState;
use crate::utils::{validate_email, validate_password};
use crate::viewmodels::SessionViewModel;
use crate::views::shared::{clear_form_message, error_slot, form_group, show_form_message, submit_button};

const MESSAGE_SLOT: &str = "login-message";

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login() llamado");

    // Estado local del formulario (en closures)
    let email = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));

    let screen = ElementBuilder::new("div")?.class("auth-screen").build();
    let card = ElementBuilder::new("div")?.class("auth-card").build();

    let header = ElementBuilder::new("div")?.class("auth-header").build();
    let title = ElementBuilder::new("h2")?.text("Welcome Back").build();
    let subtitle = ElementBuilder::new("p")?
        .class("auth-subtitle")
        .text("Login to access your dashboard")
        .build();
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;
    append_child(&card, &header)?;

    let form = ElementBuilder::new("form")?.class("auth-form").build();

    // Si la operación previa dejó un error en la sesión, mostrarlo de entrada
    let message_slot = error_slot(MESSAGE_SLOT)?;
    if let Some(error) = state.session.error() {
        message_slot.set_class_name("form-message alert alert-danger");
        crate::dom::set_text_content(&message_slot, &error);
    }
    append_child(&form, &message_slot)?;

    append_child(
        &form,
        &form_group("email", "Email Address", "email", "Email Address", email.clone())?,
    )?;
    append_child(
        &form,
        &form_group("password", "Password", "password", "Password", password.clone())?,
    )?;
    append_child(&form, &submit_button("Sign In")?)?;

    {
        let email = email.clone();
        let password = password.clone();
        let session = state.session.clone();

        on_submit(&form, move || {
            clear_form_message(MESSAGE_SLOT);
            let email_val = email.borrow().clone();
            let password_val = password.borrow().clone();

            if let Some(msg) = validate_email(&email_val).or_else(|| validate_password(&password_val)) {
                show_form_message(MESSAGE_SLOT, "danger", &msg);
                return;
            }

            let session = session.clone();
            spawn_local(async move {
                log::info!("🔐 [LOGIN] Iniciando login para {}", email_val);
                let vm = SessionViewModel::new();
                vm.login(&session, email_val, password_val).await;

                // En éxito ya navegamos al dashboard; si seguimos acá con
                // error, mostrarlo inline
                if let Some(error) = session.error() {
                    show_form_message(MESSAGE_SLOT, "danger", &error);
                }
            });
        })?;
    }

    append_child(&card, &form)?;

    // Links secundarios
    let footer = ElementBuilder::new("div")?.class("auth-footer").build();
    let register_link = ElementBuilder::new("a")?
        .attr("href", "/register")?
        .text("Don't have an account? Register here")
        .build();
    on_click(&register_link, move |e: web_sys::MouseEvent| {
        e.prevent_default();
        router::navigate(&Route::Register);
    })?;
    let forgot_link = ElementBuilder::new("a")?
        .class("muted")
        .attr("href", "/forgot-password")?
        .text("Forgot Password?")
        .build();
    on_click(&forgot_link, move |e: web_sys::MouseEvent| {
        e.prevent_default();
        router::navigate(&Route::ForgotPassword);
    })?;
    append_child(&footer, &register_link)?;
    append_child(&footer, &forgot_link)?;
    append_child(&card, &footer)?;

    append_child(&screen, &card)?;
    Ok(screen)
}

// ============================================================================
// REGISTER VIEW
// ============================================================================
// El registro no autologuea: en éxito mostramos el mensaje y mandamos al
// usuario al login.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::models::Role;
use crate::router::{self, Route};
use crate::state::AppState;
use crate::utils::{
    validate_confirm_password, validate_email, validate_name, validate_password,
    validate_role_email,
};
use crate::viewmodels::SessionViewModel;
use crate::views::shared::{clear_form_message, error_slot, form_group, select_group, show_form_message, submit_button};

const MESSAGE_SLOT: &str = "register-message";

pub fn render_register(state: &AppState) -> Result<Element, JsValue> {
    let name = Rc::new(RefCell::new(String::new()));
    let email = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));
    let confirm = Rc::new(RefCell::new(String::new()));
    let role = Rc::new(RefCell::new("patient".to_string()));

    let screen = ElementBuilder::new("div")?.class("auth-screen").build();
    let card = ElementBuilder::new("div")?.class("auth-card").build();

    let header = ElementBuilder::new("div")?.class("auth-header").build();
    append_child(&header, &ElementBuilder::new("h2")?.text("Create Account").build())?;
    append_child(
        &header,
        &ElementBuilder::new("p")?
            .class("auth-subtitle")
            .text("Each role uses its own email domain")
            .build(),
    )?;
    append_child(&card, &header)?;

    let form = ElementBuilder::new("form")?.class("auth-form").build();
    append_child(&form, &error_slot(MESSAGE_SLOT)?)?;

    let role_options = vec![
        ("patient".to_string(), "Patient".to_string()),
        ("doctor".to_string(), "Doctor".to_string()),
        ("admin".to_string(), "Admin".to_string()),
    ];
    append_child(&form, &select_group("role", "Role", &role_options, role.clone())?)?;
    append_child(&form, &form_group("name", "Full Name", "text", "Full Name", name.clone())?)?;
    append_child(
        &form,
        &form_group("email", "Email Address", "email", "Email (name@patients.com)", email.clone())?,
    )?;
    append_child(
        &form,
        &form_group("password", "Password", "password", "Password", password.clone())?,
    )?;
    append_child(
        &form,
        &form_group("confirm", "Confirm Password", "password", "Confirm Password", confirm.clone())?,
    )?;
    append_child(&form, &submit_button("Register")?)?;

    {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let role = role.clone();
        let session = state.session.clone();

        on_submit(&form, move || {
            clear_form_message(MESSAGE_SLOT);
            let name_val = name.borrow().clone();
            let email_val = email.borrow().clone();
            let password_val = password.borrow().clone();
            let confirm_val = confirm.borrow().clone();

            // El rol viene de un select propio, siempre parsea
            let role_val = match role.borrow().as_str() {
                "doctor" => Role::Doctor,
                "admin" => Role::Admin,
                _ => Role::Patient,
            };

            let validation = validate_name(&name_val)
                .or_else(|| validate_email(&email_val))
                .or_else(|| validate_role_email(role_val, &email_val))
                .or_else(|| validate_password(&password_val))
                .or_else(|| validate_confirm_password(&password_val, &confirm_val));
            if let Some(msg) = validation {
                show_form_message(MESSAGE_SLOT, "danger", &msg);
                return;
            }

            let session = session.clone();
            spawn_local(async move {
                log::info!("📝 [REGISTER] Registrando {} como {}", email_val, role_val);
                let vm = SessionViewModel::new();
                match vm
                    .register(&session, name_val, email_val, password_val, role_val)
                    .await
                {
                    Ok(message) => {
                        show_form_message(MESSAGE_SLOT, "success", &message);
                        // Dejar el mensaje a la vista un instante antes de ir al login
                        gloo_timers::callback::Timeout::new(1500, move || {
                            router::navigate(&Route::Login);
                        })
                        .forget();
                    }
                    Err(message) => {
                        show_form_message(MESSAGE_SLOT, "danger", &message);
                    }
                }
            });
        })?;
    }

    append_child(&card, &form)?;
    append_child(&screen, &card)?;
    Ok(screen)
}

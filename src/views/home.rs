// ============================================================================
// HOME / ABOUT / CONTACT - Páginas públicas estáticas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::router::{self, Route};
use crate::state::AppState;

pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("home-screen").build();

    let hero = ElementBuilder::new("section")?.class("hero").build();
    let title = ElementBuilder::new("h1")?
        .text("Your health, one appointment away")
        .build();
    let subtitle = ElementBuilder::new("p")?
        .class("hero-subtitle")
        .text("Browse doctors, book appointments and keep track of your prescriptions in one place.")
        .build();
    append_child(&hero, &title)?;
    append_child(&hero, &subtitle)?;

    let cta = ElementBuilder::new("button")?
        .class("btn btn-primary btn-cta")
        .text("Find a doctor")
        .build();
    on_click(&cta, move |_| {
        router::navigate(&Route::Doctors);
    })?;
    append_child(&hero, &cta)?;

    if !state.session.is_authenticated() && !state.session.is_loading() {
        let secondary = ElementBuilder::new("button")?
            .class("btn btn-secondary")
            .text("Create an account")
            .build();
        on_click(&secondary, move |_| {
            router::navigate(&Route::Register);
        })?;
        append_child(&hero, &secondary)?;
    }

    append_child(&container, &hero)?;
    Ok(container)
}

pub fn render_about() -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("static-page").build();
    let title = ElementBuilder::new("h2")?.text("About CarePoint").build();
    let body = ElementBuilder::new("p")?
        .text("CarePoint connects patients with doctors for fast, simple appointment scheduling. Doctors manage their schedule, patients and prescriptions from a single dashboard.")
        .build();
    append_child(&container, &title)?;
    append_child(&container, &body)?;
    Ok(container)
}

pub fn render_contact() -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("static-page").build();
    let title = ElementBuilder::new("h2")?.text("Contact").build();
    let body = ElementBuilder::new("p")?
        .text("Questions or feedback? Write to support@carepoint.example and we will get back to you within one business day.")
        .build();
    append_child(&container, &title)?;
    append_child(&container, &body)?;
    Ok(container)
}

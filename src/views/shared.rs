// ============================================================================
// SHARED VIEW HELPERS - Piezas comunes de formularios y estados vacíos
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{
    append_child, get_element_by_id, on_change, on_input, set_text_content, ElementBuilder,
};

/// Placeholder neutro mientras la verificación inicial está en vuelo.
/// Nunca una redirección.
pub fn render_verifying() -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("verifying-screen").build();
    let spinner = ElementBuilder::new("div")?.class("spinner").build();
    let text = ElementBuilder::new("p")?
        .text("Verifying authentication...")
        .build();
    append_child(&container, &spinner)?;
    append_child(&container, &text)?;
    Ok(container)
}

pub fn alert(kind: &str, message: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class(&format!("alert alert-{}", kind))
        .text(message)
        .build())
}

pub fn empty_state(icon: &str, text: &str) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("empty-state").build();
    let icon_el = ElementBuilder::new("div")?
        .class("empty-state-icon")
        .text(icon)
        .build();
    let text_el = ElementBuilder::new("div")?
        .class("empty-state-text")
        .text(text)
        .build();
    append_child(&container, &icon_el)?;
    append_child(&container, &text_el)?;
    Ok(container)
}

pub fn loading_placeholder(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("list-loading")
        .text(&format!("⏳ {}", text))
        .build())
}

/// Título + contenedor de página
pub fn page(title: &str) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("page").build();
    let heading = ElementBuilder::new("h2")?
        .class("page-title")
        .text(title)
        .build();
    append_child(&container, &heading)?;
    Ok(container)
}

/// Div de error inline con id fijo; los handlers lo actualizan con
/// `show_form_message`
pub fn error_slot(id: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .id(id)?
        .class("form-message")
        .build())
}

pub fn show_form_message(slot_id: &str, kind: &str, message: &str) {
    if let Some(slot) = get_element_by_id(slot_id) {
        slot.set_class_name(&format!("form-message alert alert-{}", kind));
        set_text_content(&slot, message);
    }
}

pub fn clear_form_message(slot_id: &str) {
    if let Some(slot) = get_element_by_id(slot_id) {
        slot.set_class_name("form-message");
        set_text_content(&slot, "");
    }
}

/// Input con label, ligado a un Rc<RefCell<String>>
pub fn form_group(
    id: &str,
    label_text: &str,
    input_type: &str,
    placeholder: &str,
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = ElementBuilder::new("input")?
        .attr("type", input_type)?
        .id(id)?
        .attr("name", id)?
        .attr("placeholder", placeholder)?
        .class("form-input")
        .build();

    // Valor inicial (para formularios precargados, p.ej. perfil)
    if let Some(input_el) = input.dyn_ref::<HtmlInputElement>() {
        let initial = value.borrow().clone();
        if !initial.is_empty() {
            input_el.set_value(&initial);
        }
    }

    {
        let value = value.clone();
        on_input(&input, move |e: web_sys::InputEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                *value.borrow_mut() = target.value();
            }
        })?;
    }

    append_child(&group, &label)?;
    append_child(&group, &input)?;
    Ok(group)
}

/// Select con label, ligado a un Rc<RefCell<String>>.
/// `options` son pares (value, texto visible).
pub fn select_group(
    id: &str,
    label_text: &str,
    options: &[(String, String)],
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let select = ElementBuilder::new("select")?
        .id(id)?
        .attr("name", id)?
        .class("form-input")
        .build();

    let selected = value.borrow().clone();
    for (option_value, option_label) in options {
        let mut builder = ElementBuilder::new("option")?
            .attr("value", option_value)?;
        if *option_value == selected {
            builder = builder.attr("selected", "selected")?;
        }
        append_child(&select, &builder.text(option_label).build())?;
    }

    {
        let value = value.clone();
        on_change(&select, move |e: web_sys::Event| {
            if let Some(target) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                *value.borrow_mut() = target.value();
            }
        })?;
    }

    append_child(&group, &label)?;
    append_child(&group, &select)?;
    Ok(group)
}

pub fn submit_button(label: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary btn-block")
        .text(label)
        .build())
}

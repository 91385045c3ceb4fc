// ============================================================================
// DASHBOARD WIDGETS - Cards y listas compartidas entre paneles
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html, ElementBuilder};
use crate::models::{Appointment, AppointmentStatus, Prescription};
use crate::services::ApiError;
use crate::views::shared::{alert, empty_state};

pub fn status_badge(status: AppointmentStatus) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("span")?
        .class(&format!("badge badge-{}", status.as_str()))
        .text(status.as_str())
        .build())
}

/// Card de cita; `extra` permite a cada panel agregar sus acciones
pub fn appointment_card(appointment: &Appointment, extra: Option<Element>) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("appointment-card").build();

    let who = match (&appointment.doctor_name, &appointment.patient_name) {
        (Some(doctor), _) => format!("Dr. {}", doctor),
        (None, Some(patient)) => patient.clone(),
        (None, None) => appointment.doctor_id.clone(),
    };
    append_child(&card, &ElementBuilder::new("h4")?.text(&who).build())?;
    append_child(
        &card,
        &ElementBuilder::new("div")?
            .class("appointment-when")
            .text(&format!("📅 {} · {}", appointment.date, appointment.time_slot))
            .build(),
    )?;
    append_child(&card, &status_badge(appointment.status)?)?;

    if let Some(reason) = &appointment.reason {
        append_child(
            &card,
            &ElementBuilder::new("p")?.class("appointment-reason").text(reason).build(),
        )?;
    }
    if let Some(extra) = extra {
        append_child(&card, &extra)?;
    }
    Ok(card)
}

pub fn prescription_card(prescription: &Prescription) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("prescription-card").build();

    let header = match (&prescription.doctor_name, &prescription.patient_name) {
        (Some(doctor), Some(patient)) => format!("{} → {}", doctor, patient),
        (Some(doctor), None) => format!("Dr. {}", doctor),
        (None, Some(patient)) => patient.clone(),
        (None, None) => prescription.date.clone(),
    };
    append_child(&card, &ElementBuilder::new("h4")?.text(&header).build())?;
    append_child(
        &card,
        &ElementBuilder::new("div")?
            .class("prescription-date")
            .text(&format!("📅 {}", prescription.date))
            .build(),
    )?;

    let meds = ElementBuilder::new("ul")?.class("medication-list").build();
    for med in &prescription.medications {
        let item = ElementBuilder::new("li")?
            .text(&format!(
                "💊 {} — {} · {} · {}",
                med.name, med.dosage, med.frequency, med.duration
            ))
            .build();
        append_child(&meds, &item)?;
    }
    append_child(&card, &meds)?;

    if let Some(notes) = &prescription.notes {
        append_child(
            &card,
            &ElementBuilder::new("p")?.class("prescription-notes").text(notes).build(),
        )?;
    }
    Ok(card)
}

/// Volcar un resultado de lista en un contenedor por id. Si el contenedor ya
/// no existe (el usuario navegó), el resultado tardío se descarta.
pub fn fill_list<T>(
    container_id: &str,
    result: Result<Vec<T>, ApiError>,
    empty_icon: &str,
    empty_text: &str,
    render_item: impl Fn(&T) -> Result<Element, JsValue>,
) {
    let container = match get_element_by_id(container_id) {
        Some(container) => container,
        None => return,
    };
    set_inner_html(&container, "");

    match result {
        Ok(items) if items.is_empty() => {
            if let Ok(empty) = empty_state(empty_icon, empty_text) {
                let _ = container.append_child(&empty);
            }
        }
        Ok(items) => {
            for item in &items {
                if let Ok(card) = render_item(item) {
                    let _ = container.append_child(&card);
                }
            }
        }
        Err(e) => {
            log::error!("❌ [DASHBOARD] Error cargando {}: {}", container_id, e);
            if let Ok(el) = alert("danger", &e.user_message()) {
                let _ = container.append_child(&el);
            }
        }
    }
}

/// Card de acceso rápido en los overviews
pub fn quick_link(
    icon: &str,
    label: &str,
    on_activate: impl FnMut(web_sys::MouseEvent) + 'static,
) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("button")?.class("quick-link").build();
    append_child(
        &card,
        &ElementBuilder::new("div")?.class("quick-link-icon").text(icon).build(),
    )?;
    append_child(
        &card,
        &ElementBuilder::new("div")?.class("quick-link-label").text(label).build(),
    )?;
    crate::dom::on_click(&card, on_activate)?;
    Ok(card)
}

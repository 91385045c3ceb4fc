// ============================================================================
// PATIENT DASHBOARD - Panel de paciente
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, on_click, set_inner_html, ElementBuilder};
use crate::models::{Appointment, CreateAppointmentRequest};
use crate::router::{self, PatientSection, Route};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::utils::validate_appointment_date;
use crate::viewmodels::SessionViewModel;
use crate::views::dashboard::widgets::{appointment_card, fill_list, prescription_card, quick_link};
use crate::views::doctors::render_doctor_list;
use crate::views::shared::{
    alert, error_slot, form_group, loading_placeholder, page, show_form_message, submit_button,
};

const APPOINTMENTS_CONTAINER: &str = "patient-appointments";
const PRESCRIPTIONS_CONTAINER: &str = "patient-prescriptions";
const DETAILS_CONTAINER: &str = "appointment-details";
const BOOK_MESSAGE: &str = "book-message";

pub fn render_patient_dashboard(
    state: &AppState,
    section: &PatientSection,
) -> Result<Element, JsValue> {
    match section {
        PatientSection::Overview => render_overview(state),
        PatientSection::Doctors => render_doctor_list(state),
        PatientSection::AppointmentDetails(id) => render_appointment_details(state, id),
        PatientSection::Prescriptions => render_prescriptions(state),
        PatientSection::BookAppointment => render_book_appointment(state),
    }
}

fn render_overview(state: &AppState) -> Result<Element, JsValue> {
    let user_name = state
        .session
        .current_user()
        .map(|u| u.name)
        .unwrap_or_default();
    let container = page(&format!("Welcome, {}", user_name))?;

    let links = ElementBuilder::new("div")?.class("quick-links").build();
    append_child(
        &links,
        &quick_link("🗓️", "Book Appointment", move |_| {
            router::navigate(&Route::PatientDashboard(PatientSection::BookAppointment));
        })?,
    )?;
    append_child(
        &links,
        &quick_link("🩺", "Find Doctors", move |_| {
            router::navigate(&Route::PatientDashboard(PatientSection::Doctors));
        })?,
    )?;
    append_child(
        &links,
        &quick_link("💊", "My Prescriptions", move |_| {
            router::navigate(&Route::PatientDashboard(PatientSection::Prescriptions));
        })?,
    )?;
    append_child(&container, &links)?;

    append_child(
        &container,
        &ElementBuilder::new("h3")?.text("My Appointments").build(),
    )?;
    let list = ElementBuilder::new("div")?
        .id(APPOINTMENTS_CONTAINER)?
        .class("card-list")
        .build();
    append_child(&list, &loading_placeholder("Loading appointments...")?)?;
    append_child(&container, &list)?;

    load_patient_appointments(state);
    Ok(container)
}

fn load_patient_appointments(state: &AppState) {
    let session = state.session.clone();
    spawn_local(async move {
        let token = match session.token() {
            Some(token) => token,
            None => return,
        };
        let api = ApiClient::new();
        let result = api
            .get_patient_appointments(&token)
            .await
            .map(|r| r.appointments);

        fill_list(
            APPOINTMENTS_CONTAINER,
            result,
            "🗓️",
            "No appointments yet",
            |appointment: &Appointment| {
                let actions = ElementBuilder::new("div")?.class("card-actions").build();
                let details_btn = ElementBuilder::new("button")?
                    .class("btn btn-secondary")
                    .text("Details")
                    .build();
                {
                    let id = appointment.id.clone();
                    on_click(&details_btn, move |_| {
                        router::navigate(&Route::PatientDashboard(
                            PatientSection::AppointmentDetails(id.clone()),
                        ));
                    })?;
                }
                append_child(&actions, &details_btn)?;
                appointment_card(appointment, Some(actions))
            },
        );
    });
}

fn render_appointment_details(state: &AppState, appointment_id: &str) -> Result<Element, JsValue> {
    let container = page("Appointment Details")?;
    let details = ElementBuilder::new("div")?
        .id(DETAILS_CONTAINER)?
        .class("details-panel")
        .build();
    append_child(&details, &loading_placeholder("Loading appointment...")?)?;
    append_child(&container, &details)?;

    let session = state.session.clone();
    let appointment_id = appointment_id.to_string();
    spawn_local(async move {
        let token = match session.token() {
            Some(token) => token,
            None => return,
        };
        let api = ApiClient::new();
        let result = api.get_appointment(&token, &appointment_id).await;

        let panel = match get_element_by_id(DETAILS_CONTAINER) {
            Some(panel) => panel,
            None => return,
        };
        set_inner_html(&panel, "");

        match result {
            Ok(response) if response.success => {
                let appointment = match response.appointment {
                    Some(appointment) => appointment,
                    None => {
                        if let Ok(el) = alert("danger", "Appointment not found") {
                            let _ = panel.append_child(&el);
                        }
                        return;
                    }
                };

                // Cancelable solo si todavía no pasó por el backend
                let cancellable = matches!(
                    appointment.status,
                    crate::models::AppointmentStatus::Pending
                        | crate::models::AppointmentStatus::Confirmed
                );
                let extra = if cancellable {
                    cancel_actions(session.clone(), appointment.id.clone()).ok()
                } else {
                    None
                };

                if let Ok(card) = appointment_card(&appointment, extra) {
                    let _ = panel.append_child(&card);
                }
            }
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Appointment not found".to_string());
                if let Ok(el) = alert("danger", &message) {
                    let _ = panel.append_child(&el);
                }
            }
            Err(e) => {
                if e.is_auth() {
                    SessionViewModel::new().session_expired(&session);
                    return;
                }
                if let Ok(el) = alert("danger", &e.user_message()) {
                    let _ = panel.append_child(&el);
                }
            }
        }
    });

    Ok(container)
}

fn cancel_actions(
    session: crate::state::SessionState,
    appointment_id: String,
) -> Result<Element, JsValue> {
    let actions = ElementBuilder::new("div")?.class("card-actions").build();
    let cancel_btn = ElementBuilder::new("button")?
        .class("btn btn-danger")
        .text("Cancel Appointment")
        .build();
    on_click(&cancel_btn, move |_| {
        cancel_appointment(session.clone(), appointment_id.clone());
    })?;
    append_child(&actions, &cancel_btn)?;
    Ok(actions)
}

fn cancel_appointment(session: crate::state::SessionState, appointment_id: String) {
    spawn_local(async move {
        let token = match session.token() {
            Some(token) => token,
            None => return,
        };
        let api = ApiClient::new();
        match api.cancel_appointment(&token, &appointment_id).await {
            Ok(response) if response.success => {
                log::info!("✅ [APPOINTMENTS] Cita {} cancelada", appointment_id);
                router::navigate(&Route::PatientDashboard(PatientSection::Overview));
            }
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Failed to cancel appointment".to_string());
                if let Some(panel) = get_element_by_id(DETAILS_CONTAINER) {
                    if let Ok(el) = alert("danger", &message) {
                        let _ = panel.append_child(&el);
                    }
                }
            }
            Err(e) => {
                if e.is_auth() {
                    SessionViewModel::new().session_expired(&session);
                    return;
                }
                if let Some(panel) = get_element_by_id(DETAILS_CONTAINER) {
                    if let Ok(el) = alert("danger", &e.user_message()) {
                        let _ = panel.append_child(&el);
                    }
                }
            }
        }
    });
}

fn render_prescriptions(state: &AppState) -> Result<Element, JsValue> {
    let container = page("My Prescriptions")?;
    let list = ElementBuilder::new("div")?
        .id(PRESCRIPTIONS_CONTAINER)?
        .class("card-list")
        .build();
    append_child(&list, &loading_placeholder("Loading prescriptions...")?)?;
    append_child(&container, &list)?;

    let session = state.session.clone();
    spawn_local(async move {
        let token = match session.token() {
            Some(token) => token,
            None => return,
        };
        let api = ApiClient::new();
        let result = api.get_prescriptions(&token).await.map(|r| r.prescriptions);
        fill_list(
            PRESCRIPTIONS_CONTAINER,
            result,
            "💊",
            "No prescriptions yet",
            |prescription| prescription_card(prescription),
        );
    });

    Ok(container)
}

// ----------------------------------------------------------------------
// Reserva de cita
// ----------------------------------------------------------------------

fn render_book_appointment(state: &AppState) -> Result<Element, JsValue> {
    let container = page("Book an Appointment")?;

    let doctor_id = Rc::new(RefCell::new(String::new()));
    let date = Rc::new(RefCell::new(String::new()));
    let slot = Rc::new(RefCell::new(String::new()));
    let reason = Rc::new(RefCell::new(String::new()));

    let form = ElementBuilder::new("form")?.class("booking-form").build();
    append_child(&form, &error_slot(BOOK_MESSAGE)?)?;

    // Select de médicos, poblado async
    let doctor_group = ElementBuilder::new("div")?.class("form-group").build();
    append_child(
        &doctor_group,
        &ElementBuilder::new("label")?.attr("for", "doctor-select")?.text("Doctor").build(),
    )?;
    let doctor_select = ElementBuilder::new("select")?
        .id("doctor-select")?
        .class("form-input")
        .build();
    append_child(
        &doctor_select,
        &ElementBuilder::new("option")?.attr("value", "")?.text("Select a doctor").build(),
    )?;
    {
        let doctor_id = doctor_id.clone();
        let date = date.clone();
        crate::dom::on_change(&doctor_select, move |e: web_sys::Event| {
            use wasm_bindgen::JsCast;
            if let Some(target) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                *doctor_id.borrow_mut() = target.value();
            }
            refresh_slots(doctor_id.borrow().clone(), date.borrow().clone());
        })?;
    }
    append_child(&doctor_group, &doctor_select)?;
    append_child(&form, &doctor_group)?;

    spawn_local(async move {
        let api = ApiClient::new();
        match api.get_doctors(1, 50, None).await {
            Ok(response) if response.success => {
                if let Some(select) = get_element_by_id("doctor-select") {
                    for doctor in response.doctors {
                        if let Ok(option) = crate::dom::create_element("option") {
                            let _ = option.set_attribute("value", &doctor.id);
                            option.set_text_content(Some(&format!(
                                "{} ({})",
                                doctor.name, doctor.specialization
                            )));
                            let _ = select.append_child(&option);
                        }
                    }
                }
            }
            Ok(_) => {}
            Err(e) => log::error!("❌ [BOOKING] Error cargando médicos: {}", e),
        }
    });

    // Fecha
    let date_group = ElementBuilder::new("div")?.class("form-group").build();
    append_child(
        &date_group,
        &ElementBuilder::new("label")?.attr("for", "date-input")?.text("Date").build(),
    )?;
    let date_input = ElementBuilder::new("input")?
        .attr("type", "date")?
        .id("date-input")?
        .class("form-input")
        .build();
    {
        let date = date.clone();
        let doctor_id = doctor_id.clone();
        crate::dom::on_change(&date_input, move |e: web_sys::Event| {
            use wasm_bindgen::JsCast;
            if let Some(target) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                *date.borrow_mut() = target.value();
            }
            refresh_slots(doctor_id.borrow().clone(), date.borrow().clone());
        })?;
    }
    append_child(&date_group, &date_input)?;
    append_child(&form, &date_group)?;

    // Franjas disponibles (dependen de médico + fecha)
    let slot_group = ElementBuilder::new("div")?.class("form-group").build();
    append_child(
        &slot_group,
        &ElementBuilder::new("label")?.attr("for", "slot-select")?.text("Time Slot").build(),
    )?;
    let slot_select = ElementBuilder::new("select")?
        .id("slot-select")?
        .class("form-input")
        .build();
    append_child(
        &slot_select,
        &ElementBuilder::new("option")?
            .attr("value", "")?
            .text("Pick doctor and date first")
            .build(),
    )?;
    {
        let slot = slot.clone();
        crate::dom::on_change(&slot_select, move |e: web_sys::Event| {
            use wasm_bindgen::JsCast;
            if let Some(target) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                *slot.borrow_mut() = target.value();
            }
        })?;
    }
    append_child(&slot_group, &slot_select)?;
    append_child(&form, &slot_group)?;

    append_child(
        &form,
        &form_group("reason", "Reason (optional)", "text", "Reason for the visit", reason.clone())?,
    )?;
    append_child(&form, &submit_button("Book Appointment")?)?;

    {
        let session = state.session.clone();
        crate::dom::on_submit(&form, move || {
            let doctor_val = doctor_id.borrow().clone();
            let date_val = date.borrow().clone();
            let slot_val = slot.borrow().clone();
            let reason_val = reason.borrow().clone();

            if doctor_val.is_empty() {
                show_form_message(BOOK_MESSAGE, "danger", "Please select a doctor");
                return;
            }
            let today = chrono::Local::now().date_naive();
            if let Some(msg) = validate_appointment_date(&date_val, today) {
                show_form_message(BOOK_MESSAGE, "danger", &msg);
                return;
            }
            if slot_val.is_empty() {
                show_form_message(BOOK_MESSAGE, "danger", "Please select a time slot");
                return;
            }

            let session = session.clone();
            spawn_local(async move {
                let token = match session.token() {
                    Some(token) => token,
                    None => return,
                };
                let request = CreateAppointmentRequest {
                    doctor_id: doctor_val,
                    date: date_val,
                    time_slot: slot_val,
                    reason: if reason_val.is_empty() { None } else { Some(reason_val) },
                };
                let api = ApiClient::new();
                match api.create_appointment(&token, &request).await {
                    Ok(response) if response.success => {
                        log::info!("✅ [BOOKING] Cita creada");
                        router::navigate(&Route::PatientDashboard(PatientSection::Overview));
                    }
                    Ok(response) => {
                        let message = response
                            .message
                            .unwrap_or_else(|| "Failed to book appointment".to_string());
                        show_form_message(BOOK_MESSAGE, "danger", &message);
                    }
                    Err(e) => {
                        if e.is_auth() {
                            SessionViewModel::new().session_expired(&session);
                            return;
                        }
                        show_form_message(BOOK_MESSAGE, "danger", &e.user_message());
                    }
                }
            });
        })?;
    }

    append_child(&container, &form)?;
    Ok(container)
}

/// Recargar las franjas libres cuando cambian médico o fecha
fn refresh_slots(doctor_id: String, date: String) {
    if doctor_id.is_empty() || date.is_empty() {
        return;
    }
    spawn_local(async move {
        let api = ApiClient::new();
        let select = match get_element_by_id("slot-select") {
            Some(select) => select,
            None => return,
        };
        match api.get_available_slots(&doctor_id, &date).await {
            Ok(response) if response.success => {
                set_inner_html(&select, "");
                if response.slots.is_empty() {
                    if let Ok(option) = crate::dom::create_element("option") {
                        let _ = option.set_attribute("value", "");
                        option.set_text_content(Some("No slots available"));
                        let _ = select.append_child(&option);
                    }
                    return;
                }
                for slot in response.slots {
                    if let Ok(option) = crate::dom::create_element("option") {
                        let _ = option.set_attribute("value", &slot);
                        option.set_text_content(Some(&slot));
                        let _ = select.append_child(&option);
                    }
                }
            }
            Ok(_) => {}
            Err(e) => log::error!("❌ [BOOKING] Error cargando franjas: {}", e),
        }
    });
}

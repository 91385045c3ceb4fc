// ============================================================================
// DOCTOR DASHBOARD - Panel de médico
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, on_click, set_inner_html, ElementBuilder};
use crate::models::{
    Appointment, AppointmentStatus, AvailabilitySlot, CreatePrescriptionRequest, Medication,
    UpdateAppointmentRequest, UpdateAvailabilityRequest, UserPatch,
};
use crate::router::{self, DoctorSection, Route};
use crate::services::ApiClient;
use crate::state::{AppState, SessionState};
use crate::viewmodels::SessionViewModel;
use crate::views::dashboard::widgets::{appointment_card, fill_list, prescription_card, quick_link};
use crate::views::shared::{
    alert, error_slot, form_group, loading_placeholder, page, show_form_message, submit_button,
};

const APPOINTMENTS_CONTAINER: &str = "doctor-appointments";
const PATIENTS_CONTAINER: &str = "doctor-patients";
const PRESCRIPTIONS_CONTAINER: &str = "doctor-prescriptions";
const SCHEDULE_CONTAINER: &str = "doctor-schedule";
const PRESCRIPTION_MESSAGE: &str = "prescription-message";
const SCHEDULE_MESSAGE: &str = "schedule-message";
const PROFILE_MESSAGE: &str = "profile-message";

pub fn render_doctor_dashboard(
    state: &AppState,
    section: &DoctorSection,
) -> Result<Element, JsValue> {
    match section {
        DoctorSection::Overview => render_overview(state),
        DoctorSection::Appointments => render_appointments(state),
        DoctorSection::Patients => render_patients(state),
        DoctorSection::Prescriptions => render_prescriptions(state),
        DoctorSection::CreatePrescription => render_create_prescription(state),
        DoctorSection::Schedule => render_schedule(state),
        DoctorSection::Profile => render_profile(state),
    }
}

fn render_overview(state: &AppState) -> Result<Element, JsValue> {
    let user_name = state
        .session
        .current_user()
        .map(|u| u.name)
        .unwrap_or_default();
    let container = page(&format!("Welcome, Dr. {}", user_name))?;

    let links = ElementBuilder::new("div")?.class("quick-links").build();
    append_child(
        &links,
        &quick_link("🗓️", "Appointments", move |_| {
            router::navigate(&Route::DoctorDashboard(DoctorSection::Appointments));
        })?,
    )?;
    append_child(
        &links,
        &quick_link("🧑‍🤝‍🧑", "My Patients", move |_| {
            router::navigate(&Route::DoctorDashboard(DoctorSection::Patients));
        })?,
    )?;
    append_child(
        &links,
        &quick_link("💊", "New Prescription", move |_| {
            router::navigate(&Route::DoctorDashboard(DoctorSection::CreatePrescription));
        })?,
    )?;
    append_child(
        &links,
        &quick_link("📆", "My Schedule", move |_| {
            router::navigate(&Route::DoctorDashboard(DoctorSection::Schedule));
        })?,
    )?;
    append_child(&container, &links)?;

    append_child(
        &container,
        &ElementBuilder::new("h3")?.text("Upcoming Appointments").build(),
    )?;
    let list = ElementBuilder::new("div")?
        .id(APPOINTMENTS_CONTAINER)?
        .class("card-list")
        .build();
    append_child(&list, &loading_placeholder("Loading appointments...")?)?;
    append_child(&container, &list)?;

    load_doctor_appointments(state.session.clone(), false);
    Ok(container)
}

fn render_appointments(state: &AppState) -> Result<Element, JsValue> {
    let container = page("Appointments")?;
    let list = ElementBuilder::new("div")?
        .id(APPOINTMENTS_CONTAINER)?
        .class("card-list")
        .build();
    append_child(&list, &loading_placeholder("Loading appointments...")?)?;
    append_child(&container, &list)?;

    load_doctor_appointments(state.session.clone(), true);
    Ok(container)
}

fn load_doctor_appointments(session: SessionState, with_actions: bool) {
    spawn_local(async move {
        let token = match session.token() {
            Some(token) => token,
            None => return,
        };
        let api = ApiClient::new();
        let result = api
            .get_doctor_appointments(&token)
            .await
            .map(|r| r.appointments);

        let session = session.clone();
        fill_list(
            APPOINTMENTS_CONTAINER,
            result,
            "🗓️",
            "No appointments scheduled",
            move |appointment: &Appointment| {
                let extra = if with_actions {
                    status_actions(session.clone(), appointment).ok()
                } else {
                    None
                };
                appointment_card(appointment, extra)
            },
        );
    });
}

/// Botones de transición de estado según el estado actual
fn status_actions(session: SessionState, appointment: &Appointment) -> Result<Element, JsValue> {
    let actions = ElementBuilder::new("div")?.class("card-actions").build();

    let transitions: &[(&str, AppointmentStatus)] = match appointment.status {
        AppointmentStatus::Pending => &[
            ("Confirm", AppointmentStatus::Confirmed),
            ("Cancel", AppointmentStatus::Cancelled),
        ],
        AppointmentStatus::Confirmed => &[
            ("Complete", AppointmentStatus::Completed),
            ("Cancel", AppointmentStatus::Cancelled),
        ],
        AppointmentStatus::Cancelled | AppointmentStatus::Completed => &[],
    };

    for (label, next_status) in transitions {
        let class = if *next_status == AppointmentStatus::Cancelled {
            "btn btn-danger"
        } else {
            "btn btn-primary"
        };
        let button = ElementBuilder::new("button")?.class(class).text(label).build();
        let session = session.clone();
        let id = appointment.id.clone();
        let next_status = *next_status;
        on_click(&button, move |_| {
            update_status(session.clone(), id.clone(), next_status);
        })?;
        append_child(&actions, &button)?;
    }

    Ok(actions)
}

fn update_status(session: SessionState, appointment_id: String, status: AppointmentStatus) {
    spawn_local(async move {
        let token = match session.token() {
            Some(token) => token,
            None => return,
        };
        let api = ApiClient::new();
        let request = UpdateAppointmentRequest { status };
        match api
            .update_appointment_status(&token, &appointment_id, &request)
            .await
        {
            Ok(response) if response.success => {
                log::info!("✅ [APPOINTMENTS] Cita {} → {}", appointment_id, status.as_str());
                load_doctor_appointments(session, true);
            }
            Ok(response) => {
                log::warn!(
                    "⚠️ [APPOINTMENTS] Transición rechazada: {:?}",
                    response.message
                );
                load_doctor_appointments(session, true);
            }
            Err(e) => {
                if e.is_auth() {
                    SessionViewModel::new().session_expired(&session);
                    return;
                }
                log::error!("❌ [APPOINTMENTS] Error actualizando estado: {}", e);
            }
        }
    });
}

fn render_patients(state: &AppState) -> Result<Element, JsValue> {
    let container = page("My Patients")?;
    let list = ElementBuilder::new("div")?
        .id(PATIENTS_CONTAINER)?
        .class("card-list")
        .build();
    append_child(&list, &loading_placeholder("Loading patients...")?)?;
    append_child(&container, &list)?;

    let session = state.session.clone();
    spawn_local(async move {
        let token = match session.token() {
            Some(token) => token,
            None => return,
        };
        let api = ApiClient::new();
        let result = api.get_my_patients(&token).await.map(|r| r.patients);
        fill_list(
            PATIENTS_CONTAINER,
            result,
            "🧑‍🤝‍🧑",
            "No patients yet",
            |patient: &crate::models::User| {
                let card = ElementBuilder::new("div")?.class("patient-card").build();
                append_child(&card, &ElementBuilder::new("h4")?.text(&patient.name).build())?;
                append_child(
                    &card,
                    &ElementBuilder::new("div")?.class("patient-email").text(&patient.email).build(),
                )?;
                if let Some(phone) = &patient.phone {
                    append_child(
                        &card,
                        &ElementBuilder::new("div")?.class("patient-phone").text(phone).build(),
                    )?;
                }
                Ok(card)
            },
        );
    });

    Ok(container)
}

fn render_prescriptions(state: &AppState) -> Result<Element, JsValue> {
    let container = page("Issued Prescriptions")?;

    let new_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text("＋ New Prescription")
        .build();
    on_click(&new_btn, move |_| {
        router::navigate(&Route::DoctorDashboard(DoctorSection::CreatePrescription));
    })?;
    append_child(&container, &new_btn)?;

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
            "No prescriptions issued yet",
            |prescription| prescription_card(prescription),
        );
    });

    Ok(container)
}

fn render_create_prescription(state: &AppState) -> Result<Element, JsValue> {
    let container = page("New Prescription")?;

    let patient_id = Rc::new(RefCell::new(String::new()));
    let med_name = Rc::new(RefCell::new(String::new()));
    let dosage = Rc::new(RefCell::new(String::new()));
    let frequency = Rc::new(RefCell::new(String::new()));
    let duration = Rc::new(RefCell::new(String::new()));
    let notes = Rc::new(RefCell::new(String::new()));

    let form = ElementBuilder::new("form")?.class("prescription-form").build();
    append_child(&form, &error_slot(PRESCRIPTION_MESSAGE)?)?;

    // Select de pacientes, poblado async
    let patient_group = ElementBuilder::new("div")?.class("form-group").build();
    append_child(
        &patient_group,
        &ElementBuilder::new("label")?.attr("for", "patient-select")?.text("Patient").build(),
    )?;
    let patient_select = ElementBuilder::new("select")?
        .id("patient-select")?
        .class("form-input")
        .build();
    append_child(
        &patient_select,
        &ElementBuilder::new("option")?.attr("value", "")?.text("Select a patient").build(),
    )?;
    {
        let patient_id = patient_id.clone();
        crate::dom::on_change(&patient_select, move |e: web_sys::Event| {
            use wasm_bindgen::JsCast;
            if let Some(target) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                *patient_id.borrow_mut() = target.value();
            }
        })?;
    }
    append_child(&patient_group, &patient_select)?;
    append_child(&form, &patient_group)?;

    {
        let session = state.session.clone();
        spawn_local(async move {
            let token = match session.token() {
                Some(token) => token,
                None => return,
            };
            let api = ApiClient::new();
            match api.get_my_patients(&token).await {
                Ok(response) if response.success => {
                    if let Some(select) = get_element_by_id("patient-select") {
                        for patient in response.patients {
                            if let Ok(option) = crate::dom::create_element("option") {
                                let _ = option.set_attribute("value", &patient.id);
                                option.set_text_content(Some(&patient.name));
                                let _ = select.append_child(&option);
                            }
                        }
                    }
                }
                Ok(_) => {}
                Err(e) => log::error!("❌ [PRESCRIPTION] Error cargando pacientes: {}", e),
            }
        });
    }

    append_child(&form, &form_group("med-name", "Medication", "text", "Medication name", med_name.clone())?)?;
    append_child(&form, &form_group("dosage", "Dosage", "text", "e.g. 500mg", dosage.clone())?)?;
    append_child(&form, &form_group("frequency", "Frequency", "text", "e.g. twice a day", frequency.clone())?)?;
    append_child(&form, &form_group("duration", "Duration", "text", "e.g. 7 days", duration.clone())?)?;
    append_child(&form, &form_group("notes", "Notes (optional)", "text", "Additional notes", notes.clone())?)?;
    append_child(&form, &submit_button("Create Prescription")?)?;

    {
        let session = state.session.clone();
        crate::dom::on_submit(&form, move || {
            let patient_val = patient_id.borrow().clone();
            let med_val = med_name.borrow().clone();
            let dosage_val = dosage.borrow().clone();
            let frequency_val = frequency.borrow().clone();
            let duration_val = duration.borrow().clone();
            let notes_val = notes.borrow().clone();

            if patient_val.is_empty() {
                show_form_message(PRESCRIPTION_MESSAGE, "danger", "Please select a patient");
                return;
            }
            if med_val.is_empty() || dosage_val.is_empty() || frequency_val.is_empty() || duration_val.is_empty() {
                show_form_message(PRESCRIPTION_MESSAGE, "danger", "All medication fields are required");
                return;
            }

            let request = CreatePrescriptionRequest {
                patient_id: patient_val,
                medications: vec![Medication {
                    name: med_val,
                    dosage: dosage_val,
                    frequency: frequency_val,
                    duration: duration_val,
                }],
                notes: if notes_val.is_empty() { None } else { Some(notes_val) },
            };

            let session = session.clone();
            spawn_local(async move {
                let token = match session.token() {
                    Some(token) => token,
                    None => return,
                };
                let api = ApiClient::new();
                match api.create_prescription(&token, &request).await {
                    Ok(response) if response.success => {
                        log::info!("✅ [PRESCRIPTION] Receta creada");
                        router::navigate(&Route::DoctorDashboard(DoctorSection::Prescriptions));
                    }
                    Ok(response) => {
                        let message = response
                            .message
                            .unwrap_or_else(|| "Failed to create prescription".to_string());
                        show_form_message(PRESCRIPTION_MESSAGE, "danger", &message);
                    }
                    Err(e) => {
                        if e.is_auth() {
                            SessionViewModel::new().session_expired(&session);
                            return;
                        }
                        show_form_message(PRESCRIPTION_MESSAGE, "danger", &e.user_message());
                    }
                }
            });
        })?;
    }

    append_child(&container, &form)?;
    Ok(container)
}

// ----------------------------------------------------------------------
// Agenda semanal
// ----------------------------------------------------------------------

fn render_schedule(state: &AppState) -> Result<Element, JsValue> {
    let container = page("My Schedule")?;
    append_child(&container, &error_slot(SCHEDULE_MESSAGE)?)?;

    let list = ElementBuilder::new("div")?
        .id(SCHEDULE_CONTAINER)?
        .class("schedule-editor")
        .build();
    append_child(&list, &loading_placeholder("Loading schedule...")?)?;
    append_child(&container, &list)?;

    let session = state.session.clone();
    spawn_local(async move {
        let user = match session.current_user() {
            Some(user) => user,
            None => return,
        };
        let api = ApiClient::new();

        // La agenda cuelga de la ficha de médico, no del usuario
        let doctor = match api.get_doctor_by_user(&user.id).await {
            Ok(response) if response.success => response.doctor,
            _ => None,
        };
        let doctor = match doctor {
            Some(doctor) => doctor,
            None => {
                if let Some(panel) = get_element_by_id(SCHEDULE_CONTAINER) {
                    set_inner_html(&panel, "");
                    if let Ok(el) = alert("danger", "Doctor profile not found") {
                        let _ = panel.append_child(&el);
                    }
                }
                return;
            }
        };

        let availability = api
            .get_doctor_availability(&doctor.id)
            .await
            .map(|r| r.availability)
            .unwrap_or_default();

        if let Some(panel) = get_element_by_id(SCHEDULE_CONTAINER) {
            set_inner_html(&panel, "");
            if let Ok(editor) = schedule_editor(session.clone(), doctor.id.clone(), availability) {
                let _ = panel.append_child(&editor);
            }
        }
    });

    Ok(container)
}

fn schedule_editor(
    session: SessionState,
    doctor_id: String,
    initial: Vec<AvailabilitySlot>,
) -> Result<Element, JsValue> {
    let slots = Rc::new(RefCell::new(initial));
    let editor = ElementBuilder::new("div")?.class("schedule-slots").build();

    let slot_list = ElementBuilder::new("ul")?.id("slot-list")?.class("availability-list").build();
    render_slot_items(&slot_list, &slots)?;
    append_child(&editor, &slot_list)?;

    // Alta de franja
    let day = Rc::new(RefCell::new("Monday".to_string()));
    let start = Rc::new(RefCell::new(String::new()));
    let end = Rc::new(RefCell::new(String::new()));

    let add_form = ElementBuilder::new("div")?.class("slot-add-form").build();
    let day_options: Vec<(String, String)> = [
        "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
    ]
    .iter()
    .map(|d| (d.to_string(), d.to_string()))
    .collect();
    append_child(
        &add_form,
        &crate::views::shared::select_group("slot-day", "Day", &day_options, day.clone())?,
    )?;
    append_child(&add_form, &form_group("slot-start", "From", "time", "09:00", start.clone())?)?;
    append_child(&add_form, &form_group("slot-end", "To", "time", "17:00", end.clone())?)?;

    let add_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn btn-secondary")
        .text("Add Slot")
        .build();
    {
        let slots = slots.clone();
        let day = day.clone();
        let start = start.clone();
        let end = end.clone();
        on_click(&add_btn, move |_| {
            let start_val = start.borrow().clone();
            let end_val = end.borrow().clone();
            if start_val.is_empty() || end_val.is_empty() || start_val >= end_val {
                show_form_message(SCHEDULE_MESSAGE, "danger", "Enter a valid time range");
                return;
            }
            slots.borrow_mut().push(AvailabilitySlot {
                day: day.borrow().clone(),
                start_time: start_val,
                end_time: end_val,
            });
            if let Some(list) = get_element_by_id("slot-list") {
                let _ = render_slot_items(&list, &slots);
            }
        })?;
    }
    append_child(&add_form, &add_btn)?;
    append_child(&editor, &add_form)?;

    // Guardar
    let save_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn btn-primary")
        .text("Save Schedule")
        .build();
    {
        let slots = slots.clone();
        on_click(&save_btn, move |_| {
            let session = session.clone();
            let doctor_id = doctor_id.clone();
            let availability = slots.borrow().clone();
            spawn_local(async move {
                let token = match session.token() {
                    Some(token) => token,
                    None => return,
                };
                let api = ApiClient::new();
                let request = UpdateAvailabilityRequest { availability };
                match api.update_availability(&token, &doctor_id, &request).await {
                    Ok(response) if response.success => {
                        log::info!("✅ [SCHEDULE] Agenda guardada");
                        show_form_message(SCHEDULE_MESSAGE, "success", "Schedule saved");
                    }
                    Ok(response) => {
                        let message = response
                            .message
                            .unwrap_or_else(|| "Failed to save schedule".to_string());
                        show_form_message(SCHEDULE_MESSAGE, "danger", &message);
                    }
                    Err(e) => {
                        if e.is_auth() {
                            SessionViewModel::new().session_expired(&session);
                            return;
                        }
                        show_form_message(SCHEDULE_MESSAGE, "danger", &e.user_message());
                    }
                }
            });
        })?;
    }
    append_child(&editor, &save_btn)?;

    Ok(editor)
}

fn render_slot_items(list: &Element, slots: &Rc<RefCell<Vec<AvailabilitySlot>>>) -> Result<(), JsValue> {
    set_inner_html(list, "");
    let current = slots.borrow().clone();
    for (index, slot) in current.iter().enumerate() {
        let item = ElementBuilder::new("li")?
            .text(&format!("{}: {} - {}", slot.day, slot.start_time, slot.end_time))
            .build();
        let remove = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-icon")
            .text("✕")
            .build();
        {
            let slots = slots.clone();
            on_click(&remove, move |_| {
                slots.borrow_mut().remove(index);
                if let Some(list) = get_element_by_id("slot-list") {
                    let _ = render_slot_items(&list, &slots);
                }
            })?;
        }
        append_child(&item, &remove)?;
        append_child(list, &item)?;
    }
    Ok(())
}

// ----------------------------------------------------------------------
// Perfil
// ----------------------------------------------------------------------

fn render_profile(state: &AppState) -> Result<Element, JsValue> {
    let container = page("My Profile")?;

    let user = match state.session.current_user() {
        Some(user) => user,
        None => return Ok(container),
    };

    let name = Rc::new(RefCell::new(user.name.clone()));
    let phone = Rc::new(RefCell::new(user.phone.clone().unwrap_or_default()));
    let specialization = Rc::new(RefCell::new(user.specialization.clone().unwrap_or_default()));
    let address = Rc::new(RefCell::new(user.address.clone().unwrap_or_default()));

    let form = ElementBuilder::new("form")?.class("profile-form").build();
    append_child(&form, &error_slot(PROFILE_MESSAGE)?)?;
    append_child(&form, &form_group("name", "Full Name", "text", "Full Name", name.clone())?)?;
    append_child(&form, &form_group("phone", "Phone", "tel", "Phone", phone.clone())?)?;
    append_child(
        &form,
        &form_group("specialization", "Specialization", "text", "Specialization", specialization.clone())?,
    )?;
    append_child(&form, &form_group("address", "Address", "text", "Address", address.clone())?)?;
    append_child(&form, &submit_button("Save Changes")?)?;

    {
        let session = state.session.clone();
        crate::dom::on_submit(&form, move || {
            let name_val = name.borrow().clone();
            let phone_val = phone.borrow().clone();
            let specialization_val = specialization.borrow().clone();
            let address_val = address.borrow().clone();

            if let Some(msg) = crate::utils::validate_name(&name_val) {
                show_form_message(PROFILE_MESSAGE, "danger", &msg);
                return;
            }
            if !phone_val.is_empty() {
                if let Some(msg) = crate::utils::validate_phone(&phone_val) {
                    show_form_message(PROFILE_MESSAGE, "danger", &msg);
                    return;
                }
            }

            let patch = UserPatch {
                name: Some(name_val),
                phone: if phone_val.is_empty() { None } else { Some(phone_val) },
                specialization: if specialization_val.is_empty() {
                    None
                } else {
                    Some(specialization_val)
                },
                address: if address_val.is_empty() { None } else { Some(address_val) },
                ..Default::default()
            };

            let session = session.clone();
            spawn_local(async move {
                let vm = SessionViewModel::new();
                vm.update_profile(&session, patch).await;
                match session.error() {
                    Some(error) => show_form_message(PROFILE_MESSAGE, "danger", &error),
                    None => show_form_message(PROFILE_MESSAGE, "success", "Profile updated"),
                }
            });
        })?;
    }

    append_child(&container, &form)?;
    Ok(container)
}

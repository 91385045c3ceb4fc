// ============================================================================
// DOCTORS - Listado público y perfil de médico
// ============================================================================
// Patrón de carga: se renderiza el esqueleto con un contenedor por id, el
// fetch corre en spawn_local y rellena el contenedor al resolver.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, on_click, set_inner_html, ElementBuilder};
use crate::models::{AvailabilitySlot, Doctor};
use crate::router::{self, PatientSection, Route};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::views::shared::{empty_state, loading_placeholder, page};

const LIST_CONTAINER: &str = "doctor-list-container";
const PROFILE_CONTAINER: &str = "doctor-profile-container";

pub fn render_doctor_list(state: &AppState) -> Result<Element, JsValue> {
    let container = page("Our Doctors")?;
    let is_patient = state.session.current_role() == Some(crate::models::Role::Patient);

    // Filtro por especialización. El select se arma a mano para poder
    // colgarle el on_change antes de que entre al DOM.
    let specialization = Rc::new(RefCell::new(String::new()));
    let filter_group = ElementBuilder::new("div")?.class("form-group").build();
    append_child(
        &filter_group,
        &ElementBuilder::new("label")?
            .attr("for", "specialization-filter")?
            .text("Specialization")
            .build(),
    )?;
    let filter_select = ElementBuilder::new("select")?
        .id("specialization-filter")?
        .class("form-input")
        .build();
    append_child(
        &filter_select,
        &ElementBuilder::new("option")?
            .attr("value", "")?
            .text("All specializations")
            .build(),
    )?;
    {
        let specialization = specialization.clone();
        crate::dom::on_change(&filter_select, move |e: web_sys::Event| {
            use wasm_bindgen::JsCast;
            if let Some(target) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                *specialization.borrow_mut() = target.value();
            }
            let spec = specialization.borrow().clone();
            let spec = if spec.is_empty() { None } else { Some(spec) };
            load_doctors(spec, is_patient);
        })?;
    }
    append_child(&filter_group, &filter_select)?;
    append_child(&container, &filter_group)?;

    // Poblar el select con las especializaciones reales del backend
    spawn_local(async move {
        let api = ApiClient::new();
        match api.get_specializations().await {
            Ok(response) if response.success => {
                if let Some(select) = get_element_by_id("specialization-filter") {
                    for spec in response.specializations {
                        if let Ok(option) = crate::dom::create_element("option") {
                            let _ = option.set_attribute("value", &spec);
                            option.set_text_content(Some(&spec));
                            let _ = select.append_child(&option);
                        }
                    }
                }
            }
            Ok(_) => {}
            Err(e) => log::warn!("⚠️ [DOCTORS] No se pudieron cargar especializaciones: {}", e),
        }
    });

    let list = ElementBuilder::new("div")?
        .id(LIST_CONTAINER)?
        .class("doctor-list")
        .build();
    append_child(&list, &loading_placeholder("Loading doctors...")?)?;
    append_child(&container, &list)?;

    // Carga inicial; las recargas las dispara el on_change del filtro
    load_doctors(None, is_patient);

    Ok(container)
}

fn load_doctors(specialization: Option<String>, is_patient: bool) {
    spawn_local(async move {
        let api = ApiClient::new();
        let result = api
            .get_doctors(1, 20, specialization.as_deref())
            .await;

        let list = match get_element_by_id(LIST_CONTAINER) {
            Some(list) => list,
            // El usuario ya navegó a otra pantalla
            None => return,
        };
        set_inner_html(&list, "");

        match result {
            Ok(response) if response.success => {
                log::info!("✅ [DOCTORS] {} médicos cargados", response.doctors.len());
                if response.doctors.is_empty() {
                    if let Ok(empty) = empty_state("🩺", "No doctors found") {
                        let _ = list.append_child(&empty);
                    }
                    return;
                }
                for doctor in response.doctors {
                    if let Ok(card) = render_doctor_card(&doctor, is_patient) {
                        let _ = list.append_child(&card);
                    }
                }
            }
            Ok(response) => {
                let message = response.message.unwrap_or_else(|| "Failed to load doctors".to_string());
                if let Ok(alert) = crate::views::shared::alert("danger", &message) {
                    let _ = list.append_child(&alert);
                }
            }
            Err(e) => {
                log::error!("❌ [DOCTORS] Error cargando médicos: {}", e);
                if let Ok(alert) = crate::views::shared::alert("danger", &e.user_message()) {
                    let _ = list.append_child(&alert);
                }
            }
        }
    });
}

fn render_doctor_card(doctor: &Doctor, is_patient: bool) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("doctor-card").build();

    append_child(
        &card,
        &ElementBuilder::new("h3")?.class("doctor-name").text(&doctor.name).build(),
    )?;
    append_child(
        &card,
        &ElementBuilder::new("div")?
            .class("doctor-specialization")
            .text(&doctor.specialization)
            .build(),
    )?;

    if let Some(rating) = doctor.rating {
        append_child(
            &card,
            &ElementBuilder::new("div")?
                .class("doctor-rating")
                .text(&format!("⭐ {:.1}", rating))
                .build(),
        )?;
    }
    if let Some(fee) = doctor.consultation_fee {
        append_child(
            &card,
            &ElementBuilder::new("div")?
                .class("doctor-fee")
                .text(&format!("Consultation: ${:.2}", fee))
                .build(),
        )?;
    }

    let actions = ElementBuilder::new("div")?.class("card-actions").build();
    let view_btn = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .text("View Profile")
        .build();
    {
        let id = doctor.id.clone();
        on_click(&view_btn, move |_| {
            router::navigate(&Route::DoctorProfile(id.clone()));
        })?;
    }
    append_child(&actions, &view_btn)?;

    if is_patient {
        let book_btn = ElementBuilder::new("button")?
            .class("btn btn-primary")
            .text("Book Appointment")
            .build();
        on_click(&book_btn, move |_| {
            router::navigate(&Route::PatientDashboard(PatientSection::BookAppointment));
        })?;
        append_child(&actions, &book_btn)?;
    }
    append_child(&card, &actions)?;

    Ok(card)
}

pub fn render_doctor_profile(state: &AppState, doctor_id: &str) -> Result<Element, JsValue> {
    let container = page("Doctor Profile")?;
    let profile = ElementBuilder::new("div")?
        .id(PROFILE_CONTAINER)?
        .class("doctor-profile")
        .build();
    append_child(&profile, &loading_placeholder("Loading profile...")?)?;
    append_child(&container, &profile)?;

    let is_patient = state.session.current_role() == Some(crate::models::Role::Patient);
    let doctor_id = doctor_id.to_string();
    spawn_local(async move {
        let api = ApiClient::new();
        let doctor = api.get_doctor(&doctor_id).await;
        let availability = api.get_doctor_availability(&doctor_id).await;

        let profile = match get_element_by_id(PROFILE_CONTAINER) {
            Some(profile) => profile,
            None => return,
        };
        set_inner_html(&profile, "");

        match doctor {
            Ok(response) if response.success => {
                if let Some(doctor) = response.doctor {
                    if let Ok(card) = render_doctor_card(&doctor, is_patient) {
                        let _ = profile.append_child(&card);
                    }
                    if let Some(bio) = doctor.bio {
                        if let Ok(el) = ElementBuilder::new("p") {
                            let _ = profile.append_child(&el.class("doctor-bio").text(&bio).build());
                        }
                    }
                }
            }
            _ => {
                if let Ok(alert) = crate::views::shared::alert("danger", "Doctor not found") {
                    let _ = profile.append_child(&alert);
                }
                return;
            }
        }

        if let Ok(response) = availability {
            if response.success && !response.availability.is_empty() {
                if let Ok(section) = render_availability(&response.availability) {
                    let _ = profile.append_child(&section);
                }
            }
        }
    });

    Ok(container)
}

fn render_availability(slots: &[AvailabilitySlot]) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("div")?.class("availability-section").build();
    append_child(&section, &ElementBuilder::new("h4")?.text("Weekly Availability").build())?;
    let list = ElementBuilder::new("ul")?.class("availability-list").build();
    for slot in slots {
        let item = ElementBuilder::new("li")?
            .text(&format!("{}: {} - {}", slot.day, slot.start_time, slot.end_time))
            .build();
        append_child(&list, &item)?;
    }
    append_child(&section, &list)?;
    Ok(section)
}

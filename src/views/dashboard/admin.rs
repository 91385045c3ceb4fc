// ============================================================================
// ADMIN DASHBOARD - Panel de administración
// ============================================================================
// Superficie mínima: el grueso de la administración vive en el backend.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_text_content, ElementBuilder};
use crate::router::{self, Route};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::views::dashboard::widgets::quick_link;
use crate::views::shared::page;

pub fn render_admin_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let user_name = state
        .session
        .current_user()
        .map(|u| u.name)
        .unwrap_or_default();
    let container = page(&format!("Admin Panel — {}", user_name))?;

    let stats = ElementBuilder::new("div")?.class("stat-row").build();
    let doctors_stat = ElementBuilder::new("div")?.class("stat-card").build();
    append_child(
        &doctors_stat,
        &ElementBuilder::new("div")?
            .id("stat-doctors")?
            .class("stat-value")
            .text("—")
            .build(),
    )?;
    append_child(
        &doctors_stat,
        &ElementBuilder::new("div")?.class("stat-label").text("Registered doctors").build(),
    )?;
    append_child(&stats, &doctors_stat)?;
    append_child(&container, &stats)?;

    // El total viene en el envelope paginado del listado
    spawn_local(async move {
        let api = ApiClient::new();
        match api.get_doctors(1, 1, None).await {
            Ok(response) if response.success => {
                if let Some(stat) = get_element_by_id("stat-doctors") {
                    let total = response.total.unwrap_or(response.doctors.len() as u32);
                    set_text_content(&stat, &total.to_string());
                }
            }
            Ok(_) => {}
            Err(e) => log::warn!("⚠️ [ADMIN] No se pudo cargar el total de médicos: {}", e),
        }
    });

    let links = ElementBuilder::new("div")?.class("quick-links").build();
    append_child(
        &links,
        &quick_link("🩺", "Browse Doctors", move |_| {
            router::navigate(&Route::Doctors);
        })?,
    )?;
    append_child(&container, &links)?;

    Ok(container)
}

// ============================================================================
// APP VIEW - Despacho de rutas + guard
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::router::{self, GuardOutcome, Route};
use crate::state::AppState;
use crate::views::auth::{
    render_forgot_password, render_login, render_register, render_reset_password,
};
use crate::views::dashboard::{render_admin_dashboard, render_doctor_dashboard, render_patient_dashboard};
use crate::views::doctors::{render_doctor_profile, render_doctor_list};
use crate::views::home::{render_about, render_contact, render_home};
use crate::views::navbar::render_navbar;
use crate::views::shared::render_verifying;

/// Renderizar la aplicación completa para la ruta actual
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let route = router::current_route();
    log::info!("🎬 [APP] Renderizando ruta {}", route.path());

    let root = ElementBuilder::new("div")?.class("app-root").build();
    append_child(&root, &render_navbar(state)?)?;

    let main = ElementBuilder::new("main")?.class("app-content").build();
    append_child(&main, &render_route(state, &route, 0)?)?;
    append_child(&root, &main)?;

    Ok(root)
}

/// Resolver una ruta a contenido, aplicando el guard en las protegidas.
/// `depth` corta cualquier ciclo de redirecciones; con el guard actual la
/// cadena más larga es mismatch de rol -> dashboard propio (profundidad 1).
fn render_route(state: &AppState, route: &Route, depth: u8) -> Result<Element, JsValue> {
    if depth > 2 {
        log::error!("❌ [APP] Ciclo de redirecciones en {}", route.path());
        return render_home(state);
    }

    match route.required_role() {
        None => render_public(state, route),
        Some(required) => {
            let outcome = router::decide(
                state.session.is_loading(),
                state.session.current_role(),
                Some(required),
            );
            match outcome {
                GuardOutcome::Verifying => render_verifying(),
                GuardOutcome::Render => render_protected(state, route),
                GuardOutcome::RedirectTo(target) => {
                    router::redirect(&target);
                    render_route(state, &target, depth + 1)
                }
            }
        }
    }
}

fn render_public(state: &AppState, route: &Route) -> Result<Element, JsValue> {
    match route {
        Route::Home => render_home(state),
        Route::About => render_about(),
        Route::Contact => render_contact(),
        Route::Doctors => render_doctor_list(state),
        Route::DoctorProfile(id) => render_doctor_profile(state, id),
        Route::Login => render_login(state),
        Route::Register => render_register(state),
        Route::ForgotPassword => render_forgot_password(state),
        Route::ResetPassword(token) => render_reset_password(state, token),
        // Las protegidas no entran acá
        _ => render_home(state),
    }
}

fn render_protected(state: &AppState, route: &Route) -> Result<Element, JsValue> {
    match route {
        Route::PatientDashboard(section) => render_patient_dashboard(state, section),
        Route::DoctorDashboard(section) => render_doctor_dashboard(state, section),
        Route::AdminDashboard => render_admin_dashboard(state),
        _ => render_home(state),
    }
}

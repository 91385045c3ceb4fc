// ============================================================================
// ROUTER - Rutas del cliente + navegación via History API
// ============================================================================
// El render lee la ruta actual de window.location en cada pasada; navigate()
// hace pushState y dispara un re-render completo. El listener de popstate se
// registra UNA sola vez en lib.rs.

pub mod guard;

pub use guard::{decide, GuardOutcome};

use crate::models::Role;

/// Sub-rutas del panel de paciente
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PatientSection {
    Overview,
    Doctors,
    AppointmentDetails(String),
    Prescriptions,
    BookAppointment,
}

/// Sub-rutas del panel de médico
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DoctorSection {
    Overview,
    Appointments,
    Patients,
    Prescriptions,
    CreatePrescription,
    Schedule,
    Profile,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Route {
    Home,
    About,
    Contact,
    Doctors,
    DoctorProfile(String),
    Login,
    Register,
    ForgotPassword,
    ResetPassword(String),
    PatientDashboard(PatientSection),
    DoctorDashboard(DoctorSection),
    AdminDashboard,
}

impl Route {
    /// Parsear un pathname. Rutas desconocidas caen en Home.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim_start_matches('/').trim_end_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["contact"] => Route::Contact,
            ["doctors"] => Route::Doctors,
            ["doctors", id] => Route::DoctorProfile((*id).to_string()),
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["forgot-password"] => Route::ForgotPassword,
            ["reset-password", token] => Route::ResetPassword((*token).to_string()),
            ["patient-dashboard"] => Route::PatientDashboard(PatientSection::Overview),
            ["patient-dashboard", "doctors"] => Route::PatientDashboard(PatientSection::Doctors),
            ["patient-dashboard", "appointments", id] => {
                Route::PatientDashboard(PatientSection::AppointmentDetails((*id).to_string()))
            }
            ["patient-dashboard", "prescriptions"] => {
                Route::PatientDashboard(PatientSection::Prescriptions)
            }
            ["patient-dashboard", "book-appointment"] => {
                Route::PatientDashboard(PatientSection::BookAppointment)
            }
            ["doctor-dashboard"] => Route::DoctorDashboard(DoctorSection::Overview),
            ["doctor-dashboard", "appointments"] => {
                Route::DoctorDashboard(DoctorSection::Appointments)
            }
            ["doctor-dashboard", "patients"] => Route::DoctorDashboard(DoctorSection::Patients),
            ["doctor-dashboard", "prescriptions"] => {
                Route::DoctorDashboard(DoctorSection::Prescriptions)
            }
            ["doctor-dashboard", "create-prescription"] => {
                Route::DoctorDashboard(DoctorSection::CreatePrescription)
            }
            ["doctor-dashboard", "schedule"] => Route::DoctorDashboard(DoctorSection::Schedule),
            ["doctor-dashboard", "profile"] => Route::DoctorDashboard(DoctorSection::Profile),
            ["admin-dashboard"] => Route::AdminDashboard,
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Doctors => "/doctors".to_string(),
            Route::DoctorProfile(id) => format!("/doctors/{}", id),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::ForgotPassword => "/forgot-password".to_string(),
            Route::ResetPassword(token) => format!("/reset-password/{}", token),
            Route::PatientDashboard(section) => match section {
                PatientSection::Overview => "/patient-dashboard".to_string(),
                PatientSection::Doctors => "/patient-dashboard/doctors".to_string(),
                PatientSection::AppointmentDetails(id) => {
                    format!("/patient-dashboard/appointments/{}", id)
                }
                PatientSection::Prescriptions => "/patient-dashboard/prescriptions".to_string(),
                PatientSection::BookAppointment => {
                    "/patient-dashboard/book-appointment".to_string()
                }
            },
            Route::DoctorDashboard(section) => match section {
                DoctorSection::Overview => "/doctor-dashboard".to_string(),
                DoctorSection::Appointments => "/doctor-dashboard/appointments".to_string(),
                DoctorSection::Patients => "/doctor-dashboard/patients".to_string(),
                DoctorSection::Prescriptions => "/doctor-dashboard/prescriptions".to_string(),
                DoctorSection::CreatePrescription => {
                    "/doctor-dashboard/create-prescription".to_string()
                }
                DoctorSection::Schedule => "/doctor-dashboard/schedule".to_string(),
                DoctorSection::Profile => "/doctor-dashboard/profile".to_string(),
            },
            Route::AdminDashboard => "/admin-dashboard".to_string(),
        }
    }

    /// Rol requerido para rutas protegidas; None = ruta pública
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::PatientDashboard(_) => Some(Role::Patient),
            Route::DoctorDashboard(_) => Some(Role::Doctor),
            Route::AdminDashboard => Some(Role::Admin),
            _ => None,
        }
    }

    /// Ruta "home" de cada rol tras el login
    pub fn dashboard_for(role: Role) -> Route {
        match role {
            Role::Patient => Route::PatientDashboard(PatientSection::Overview),
            Role::Doctor => Route::DoctorDashboard(DoctorSection::Overview),
            Role::Admin => Route::AdminDashboard,
        }
    }
}

/// Ruta actual según window.location
pub fn current_route() -> Route {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    Route::parse(&path)
}

/// Navegación programática: pushState + re-render completo
pub fn navigate(route: &Route) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let path = route.path();
            if let Err(e) = history.push_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&path),
            ) {
                log::error!("❌ [ROUTER] Error en pushState: {:?}", e);
            } else {
                log::info!("🧭 [ROUTER] Navegando a {}", path);
            }
        }
    }
    crate::rerender_app();
}

/// Redirección del guard: replaceState para no ensuciar el historial
pub fn redirect(route: &Route) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let path = route.path();
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
            log::info!("🧭 [ROUTER] Redirigido a {}", path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_public_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/register"), Route::Register);
        assert_eq!(Route::parse("/forgot-password"), Route::ForgotPassword);
        assert_eq!(Route::parse("/doctors"), Route::Doctors);
        assert_eq!(
            Route::parse("/doctors/d42"),
            Route::DoctorProfile("d42".to_string())
        );
    }

    #[test]
    fn test_parse_dashboard_routes() {
        assert_eq!(
            Route::parse("/patient-dashboard"),
            Route::PatientDashboard(PatientSection::Overview)
        );
        assert_eq!(
            Route::parse("/patient-dashboard/appointments/a7"),
            Route::PatientDashboard(PatientSection::AppointmentDetails("a7".to_string()))
        );
        assert_eq!(
            Route::parse("/doctor-dashboard/create-prescription"),
            Route::DoctorDashboard(DoctorSection::CreatePrescription)
        );
        assert_eq!(Route::parse("/admin-dashboard"), Route::AdminDashboard);
    }

    #[test]
    fn test_unknown_route_falls_back_to_home() {
        assert_eq!(Route::parse("/no-existe"), Route::Home);
        assert_eq!(Route::parse("/patient-dashboard/nada"), Route::Home);
    }

    #[test]
    fn test_parse_path_roundtrip() {
        let routes = vec![
            Route::Home,
            Route::About,
            Route::Contact,
            Route::Doctors,
            Route::DoctorProfile("d1".to_string()),
            Route::Login,
            Route::Register,
            Route::ForgotPassword,
            Route::ResetPassword("tok".to_string()),
            Route::PatientDashboard(PatientSection::Overview),
            Route::PatientDashboard(PatientSection::Doctors),
            Route::PatientDashboard(PatientSection::AppointmentDetails("a1".to_string())),
            Route::PatientDashboard(PatientSection::Prescriptions),
            Route::PatientDashboard(PatientSection::BookAppointment),
            Route::DoctorDashboard(DoctorSection::Overview),
            Route::DoctorDashboard(DoctorSection::Appointments),
            Route::DoctorDashboard(DoctorSection::Patients),
            Route::DoctorDashboard(DoctorSection::Prescriptions),
            Route::DoctorDashboard(DoctorSection::CreatePrescription),
            Route::DoctorDashboard(DoctorSection::Schedule),
            Route::DoctorDashboard(DoctorSection::Profile),
            Route::AdminDashboard,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route, "roundtrip {:?}", route);
        }
    }

    #[test]
    fn test_required_role() {
        use crate::models::Role;
        assert_eq!(Route::Home.required_role(), None);
        assert_eq!(Route::Login.required_role(), None);
        assert_eq!(
            Route::PatientDashboard(PatientSection::Overview).required_role(),
            Some(Role::Patient)
        );
        assert_eq!(
            Route::DoctorDashboard(DoctorSection::Schedule).required_role(),
            Some(Role::Doctor)
        );
        assert_eq!(Route::AdminDashboard.required_role(), Some(Role::Admin));
    }

    #[test]
    fn test_dashboard_for_each_role() {
        use crate::models::Role;
        assert_eq!(
            Route::dashboard_for(Role::Doctor).path(),
            "/doctor-dashboard"
        );
        assert_eq!(
            Route::dashboard_for(Role::Patient).path(),
            "/patient-dashboard"
        );
        assert_eq!(Route::dashboard_for(Role::Admin).path(), "/admin-dashboard");
    }
}

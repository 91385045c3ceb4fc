// ============================================================================
// ROUTE GUARD - Decisión pura de acceso a rutas protegidas
// ============================================================================

use crate::models::Role;
use crate::router::Route;

/// Resultado del guard. Verifying se renderiza como placeholder neutro,
/// nunca como redirección: la verificación inicial todavía está en vuelo.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum GuardOutcome {
    Render,
    Verifying,
    RedirectTo(Route),
}

/// Función de decisión, determinista y sin efectos. Se re-evalúa en cada
/// navegación y en cada cambio de sesión.
///
/// 1. Sesión cargando -> Verifying
/// 2. Sin usuario -> redirigir a login
/// 3. Rol requerido distinto al del usuario -> redirigir a su dashboard
/// 4. En otro caso -> renderizar el contenido protegido
pub fn decide(loading: bool, current: Option<Role>, required: Option<Role>) -> GuardOutcome {
    if loading {
        return GuardOutcome::Verifying;
    }

    let role = match current {
        Some(role) => role,
        None => return GuardOutcome::RedirectTo(Route::Login),
    };

    if let Some(required) = required {
        if role != required {
            return GuardOutcome::RedirectTo(Route::dashboard_for(role));
        }
    }

    GuardOutcome::Render
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_never_redirects() {
        // Con loading activo el resto de los campos no importan
        assert_eq!(decide(true, None, None), GuardOutcome::Verifying);
        assert_eq!(decide(true, None, Some(Role::Doctor)), GuardOutcome::Verifying);
        assert_eq!(
            decide(true, Some(Role::Patient), Some(Role::Doctor)),
            GuardOutcome::Verifying
        );
    }

    #[test]
    fn test_unauthenticated_redirects_to_login() {
        assert_eq!(
            decide(false, None, None),
            GuardOutcome::RedirectTo(Route::Login)
        );
        assert_eq!(
            decide(false, None, Some(Role::Admin)),
            GuardOutcome::RedirectTo(Route::Login)
        );
    }

    #[test]
    fn test_role_mismatch_redirects_to_own_dashboard() {
        assert_eq!(
            decide(false, Some(Role::Patient), Some(Role::Doctor)),
            GuardOutcome::RedirectTo(Route::dashboard_for(Role::Patient))
        );
        assert_eq!(
            decide(false, Some(Role::Doctor), Some(Role::Admin)),
            GuardOutcome::RedirectTo(Route::dashboard_for(Role::Doctor))
        );
    }

    #[test]
    fn test_matching_role_renders() {
        assert_eq!(
            decide(false, Some(Role::Doctor), Some(Role::Doctor)),
            GuardOutcome::Render
        );
        // Ruta protegida sin rol específico: basta estar autenticado
        assert_eq!(decide(false, Some(Role::Patient), None), GuardOutcome::Render);
    }
}

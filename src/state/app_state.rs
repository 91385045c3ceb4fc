// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use crate::state::{SessionState, ThemeState};

/// Estado global: sesión + preferencias de UI. La ruta actual no vive acá:
/// window.location es la fuente de verdad y el router la lee en cada render.
#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    pub theme: ThemeState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            theme: ThemeState::new(),
        }
    }

    /// Suscribirse a cambios de sesión (el único estado que fuerza
    /// re-render; el tema se aplica directo al documento)
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.session.subscribe(callback);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

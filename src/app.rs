// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::AppState;
use crate::viewmodels::SessionViewModel;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Option<Element>,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Verificación de arranque: token guardado -> /auth/verify.
        // Mientras resuelve, session.loading=true y el guard muestra el
        // placeholder de verificación.
        {
            let session = state.session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = SessionViewModel::new();
                vm.restore_session(&session).await;
            });
        }

        // Re-render ante cambios de sesión, batcheado con Timeout(0) para
        // colapsar ráfagas de notificaciones en un solo render
        state.subscribe_to_changes(move || {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self {
            state,
            root: Some(root),
        })
    }

    /// Renderizar aplicación completa
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(root) = &self.root {
            // Limpiar contenido anterior
            set_inner_html(root, "");
            let view = render_app(&self.state)?;
            append_child(root, &view)?;
        }
        Ok(())
    }
}

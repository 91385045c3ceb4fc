// ============================================================================
// CAREPOINT - Frontend de agendamiento médico (Rust puro + MVVM)
// ============================================================================
// Arquitectura:
// - Views: funciones que renderizan DOM (sin lógica de negocio)
// - ViewModels: sesión y flujos de auth
// - Services: comunicación API + credenciales persistidas
// - State: state management con Rc<RefCell> + subscribers
// - Router: rutas cliente + guard por rol
// - Models: estructuras compartidas con el backend
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod router;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

// Instancia global de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para stack traces legibles en la consola
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::default());
    }
    log::info!("🚀 CarePoint ({})", CONFIG.environment);

    // Crear y renderizar app
    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Back/forward del navegador -> re-render con la nueva location.
    // Este listener global se registra UNA sola vez acá.
    if let Some(win) = web_sys::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_e: web_sys::Event| {
            log::info!("🧭 [MAIN] popstate recibido, re-renderizando");
            rerender_app();
        }) as Box<dyn FnMut(web_sys::Event)>);

        win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
        // forget() mantiene vivo el closure; al registrarse una única vez
        // no hay acumulación
        closure.forget();
    }

    Ok(())
}

/// Re-render completo de la aplicación
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref mut app) = *app_cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ [RERENDER] App no está inicializada");
        }
    });
}

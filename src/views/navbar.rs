// ============================================================================
// NAVBAR - Barra superior con navegación y sesión
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::router::{self, Route};
use crate::state::AppState;
use crate::viewmodels::SessionViewModel;

pub fn render_navbar(state: &AppState) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?.class("navbar").build();

    let brand = ElementBuilder::new("div")?
        .class("navbar-brand")
        .text("CarePoint")
        .build();
    {
        on_click(&brand, move |_| {
            router::navigate(&Route::Home);
        })?;
    }
    append_child(&nav, &brand)?;

    let links = ElementBuilder::new("div")?.class("navbar-links").build();
    append_child(&links, &nav_link("Home", Route::Home)?)?;
    append_child(&links, &nav_link("Doctors", Route::Doctors)?)?;
    append_child(&links, &nav_link("About", Route::About)?)?;
    append_child(&links, &nav_link("Contact", Route::Contact)?)?;
    append_child(&nav, &links)?;

    let actions = ElementBuilder::new("div")?.class("navbar-actions").build();

    // Toggle de tema: aplica directo al documento, sin re-render
    let theme_btn = ElementBuilder::new("button")?
        .class("btn-icon btn-theme")
        .attr("title", "Toggle theme")?
        .text("🌓")
        .build();
    {
        let theme = state.theme.clone();
        on_click(&theme_btn, move |_| {
            theme.toggle_theme();
        })?;
    }
    append_child(&actions, &theme_btn)?;

    // Ciclar tamaño de fuente: small -> medium -> large
    let font_btn = ElementBuilder::new("button")?
        .class("btn-icon btn-font-size")
        .attr("title", "Font size")?
        .text("🔠")
        .build();
    {
        let theme = state.theme.clone();
        on_click(&font_btn, move |_| {
            use crate::state::FontSize;
            let next = match theme.font_size() {
                FontSize::Small => FontSize::Medium,
                FontSize::Medium => FontSize::Large,
                FontSize::Large => FontSize::Small,
            };
            theme.set_font_size(next);
        })?;
    }
    append_child(&actions, &font_btn)?;

    if let Some(user) = state.session.current_user() {
        let dashboard_btn = ElementBuilder::new("button")?
            .class("btn btn-dashboard")
            .text("My Dashboard")
            .build();
        {
            let role = user.role;
            on_click(&dashboard_btn, move |_| {
                router::navigate(&Route::dashboard_for(role));
            })?;
        }
        append_child(&actions, &dashboard_btn)?;

        let user_label = ElementBuilder::new("span")?
            .class("navbar-user")
            .text(&user.name)
            .build();
        append_child(&actions, &user_label)?;

        let logout_btn = ElementBuilder::new("button")?
            .class("btn btn-logout")
            .text("Logout")
            .build();
        {
            let session = state.session.clone();
            on_click(&logout_btn, move |_| {
                SessionViewModel::new().logout(&session);
            })?;
        }
        append_child(&actions, &logout_btn)?;
    } else if !state.session.is_loading() {
        let login_btn = ElementBuilder::new("button")?
            .class("btn btn-login")
            .text("Login")
            .build();
        on_click(&login_btn, move |_| {
            router::navigate(&Route::Login);
        })?;
        append_child(&actions, &login_btn)?;

        let register_btn = ElementBuilder::new("button")?
            .class("btn btn-register")
            .text("Register")
            .build();
        on_click(&register_btn, move |_| {
            router::navigate(&Route::Register);
        })?;
        append_child(&actions, &register_btn)?;
    }

    append_child(&nav, &actions)?;
    Ok(nav)
}

fn nav_link(label: &str, route: Route) -> Result<Element, JsValue> {
    let link = ElementBuilder::new("a")?
        .class("nav-link")
        .attr("href", &route.path())?
        .text(label)
        .build();
    on_click(&link, move |e: web_sys::MouseEvent| {
        e.prevent_default();
        router::navigate(&route);
    })?;
    Ok(link)
}

// ============================================================================
// THEME STATE - Preferencias de UI (tema y tamaño de fuente)
// ============================================================================
// Independiente de la sesión: sobrevive al logout. Cada cambio persiste en
// localStorage y se refleja como atributos del documento; el CSS hace el
// resto, sin re-render.

use std::cell::RefCell;
use std::rc::Rc;

use crate::utils::{load_raw, save_raw, STORAGE_KEY_FONT_SIZE, STORAGE_KEY_THEME};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

impl FontSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }

    pub fn from_str(value: &str) -> Option<FontSize> {
        match value {
            "small" => Some(FontSize::Small),
            "medium" => Some(FontSize::Medium),
            "large" => Some(FontSize::Large),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct ThemeState {
    theme: Rc<RefCell<Theme>>,
    font_size: Rc<RefCell<FontSize>>,
}

impl ThemeState {
    /// Inicializar desde localStorage; sin preferencia guardada cae al
    /// esquema de color del sistema, y en última instancia a light/medium
    pub fn new() -> Self {
        let theme = load_raw(STORAGE_KEY_THEME)
            .and_then(|v| Theme::from_str(&v))
            .unwrap_or_else(Self::system_theme);
        let font_size = load_raw(STORAGE_KEY_FONT_SIZE)
            .and_then(|v| FontSize::from_str(&v))
            .unwrap_or(FontSize::Medium);

        let state = Self {
            theme: Rc::new(RefCell::new(theme)),
            font_size: Rc::new(RefCell::new(font_size)),
        };
        state.apply_to_document();
        state
    }

    fn system_theme() -> Theme {
        let prefers_dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
            .flatten()
            .map(|mql| mql.matches())
            .unwrap_or(false);
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn theme(&self) -> Theme {
        *self.theme.borrow()
    }

    pub fn font_size(&self) -> FontSize {
        *self.font_size.borrow()
    }

    pub fn set_theme(&self, theme: Theme) {
        *self.theme.borrow_mut() = theme;
        let _ = save_raw(STORAGE_KEY_THEME, theme.as_str());
        self.apply_to_document();
    }

    pub fn toggle_theme(&self) {
        let next = self.theme().toggled();
        log::info!("🎨 [THEME] Cambiando tema a {}", next.as_str());
        self.set_theme(next);
    }

    pub fn set_font_size(&self, size: FontSize) {
        *self.font_size.borrow_mut() = size;
        let _ = save_raw(STORAGE_KEY_FONT_SIZE, size.as_str());
        self.apply_to_document();
    }

    /// Reflejar las preferencias como atributos/clases del documento
    pub fn apply_to_document(&self) {
        let document = match web_sys::window().and_then(|w| w.document()) {
            Some(doc) => doc,
            None => return,
        };

        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", self.theme().as_str());
            let _ = root.set_attribute("data-font-size", self.font_size().as_str());
        }

        if let Some(body) = document.body() {
            let class_list = body.class_list();
            match self.theme() {
                Theme::Dark => {
                    let _ = class_list.add_1("dark-theme");
                }
                Theme::Light => {
                    let _ = class_list.remove_1("dark-theme");
                }
            }
            for class in ["font-small", "font-medium", "font-large"] {
                let _ = class_list.remove_1(class);
            }
            let _ = class_list.add_1(&format!("font-{}", self.font_size().as_str()));
        }
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse_is_closed() {
        assert_eq!(Theme::from_str("light"), Some(Theme::Light));
        assert_eq!(Theme::from_str("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_str("sepia"), None);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_font_size_parse() {
        assert_eq!(FontSize::from_str("small"), Some(FontSize::Small));
        assert_eq!(FontSize::from_str("medium"), Some(FontSize::Medium));
        assert_eq!(FontSize::from_str("large"), Some(FontSize::Large));
        assert_eq!(FontSize::from_str("xl"), None);
    }
}

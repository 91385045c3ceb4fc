/// Claves de localStorage
/// La clave del token es la única credencial durable; theme/fontSize son
/// preferencias de UI y sobreviven al logout.
pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_THEME: &str = "theme";
pub const STORAGE_KEY_FONT_SIZE: &str = "fontSize";

// ============================================================================
// CREDENTIAL STORE - Slot único de localStorage con el token bearer
// ============================================================================
// Escrito SOLO por el SessionViewModel. Sin expiración del lado del cliente:
// un token vencido se detecta recién cuando el backend rechaza un request.

use crate::utils::{load_raw, remove_from_storage, save_raw, STORAGE_KEY_TOKEN};

#[derive(Clone)]
pub struct CredentialStore;

impl CredentialStore {
    pub fn new() -> Self {
        Self
    }

    /// Persistir el token, pisando cualquier valor anterior. Una falla de
    /// persistencia queda en no-op silencioso (limitación documentada).
    pub fn save(&self, token: &str) {
        if save_raw(STORAGE_KEY_TOKEN, token).is_err() {
            log::warn!("⚠️ [CREDENTIALS] No se pudo persistir el token");
        }
    }

    /// Lectura síncrona del token guardado
    pub fn load(&self) -> Option<String> {
        load_raw(STORAGE_KEY_TOKEN)
    }

    /// Eliminar el token (logout, verificación rechazada, 401 del backend)
    pub fn clear(&self) {
        if remove_from_storage(STORAGE_KEY_TOKEN).is_err() {
            log::warn!("⚠️ [CREDENTIALS] No se pudo limpiar el token");
        }
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

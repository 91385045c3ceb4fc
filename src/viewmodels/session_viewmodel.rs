// ============================================================================
// SESSION VIEWMODEL - LÓGICA DE SESIÓN
// ============================================================================
// Orquesta el estado de sesión contra el API. Es el ÚNICO escritor del
// CredentialStore. Cada operación asíncrona captura un número de secuencia
// al emitirse y descarta su resultado si otra emisión la superó.

use crate::models::{LoginRequest, RegisterRequest, Role, UserPatch};
use crate::router::{self, Route};
use crate::services::{ApiClient, ApiError, CredentialStore};
use crate::state::{OpKind, SessionState};

pub struct SessionViewModel {
    api: ApiClient,
    credentials: CredentialStore,
}

impl SessionViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
            credentials: CredentialStore::new(),
        }
    }

    // ------------------------------------------------------------------
    // Arranque
    // ------------------------------------------------------------------

    /// Verificación inicial: token guardado -> /auth/verify. Una falla acá
    /// es silenciosa (nada de error visible), solo deja Unauthenticated.
    pub async fn restore_session(&self, session: &SessionState) {
        let token = match self.credentials.load() {
            Some(token) => token,
            None => {
                log::info!("ℹ️ [SESSION] Sin token guardado, sesión no autenticada");
                session.apply_unauthenticated();
                return;
            }
        };

        log::info!("🔐 [SESSION] Token encontrado, verificando contra el backend...");
        let seq = session.begin(OpKind::Verify);

        match self.api.verify(&token).await {
            Ok(response) if response.success => {
                if !session.is_current(OpKind::Verify, seq) {
                    log::warn!("⏭️ [SESSION] Verificación superada por otra emisión, descartada");
                    return;
                }
                match response.user {
                    Some(user) => {
                        log::info!("✅ [SESSION] Sesión restaurada: {} ({})", user.name, user.role);
                        session.apply_authenticated(token, user);
                    }
                    None => {
                        // success sin user no cumple el contrato
                        log::error!("❌ [SESSION] /auth/verify sin usuario en la respuesta");
                        self.credentials.clear();
                        session.apply_unauthenticated();
                    }
                }
            }
            Ok(_) => {
                if !session.is_current(OpKind::Verify, seq) {
                    return;
                }
                log::info!("🔒 [SESSION] Token rechazado por el backend, limpiando credenciales");
                self.credentials.clear();
                session.apply_unauthenticated();
            }
            Err(e) => {
                if !session.is_current(OpKind::Verify, seq) {
                    return;
                }
                log::warn!("⚠️ [SESSION] Verificación falló ({}), sesión no autenticada", e);
                self.credentials.clear();
                session.apply_unauthenticated();
            }
        }
    }

    // ------------------------------------------------------------------
    // Login / Logout
    // ------------------------------------------------------------------

    /// Login. En éxito persiste el token, autentica y navega al dashboard
    /// del rol. En falla deja la sesión previa intacta y setea `error`.
    pub async fn login(&self, session: &SessionState, email: String, password: String) {
        let seq = session.begin(OpKind::Login);
        session.set_loading(true);

        let request = LoginRequest { email, password };
        let result = self.api.login(&request).await;

        if !session.is_current(OpKind::Login, seq) {
            log::warn!("⏭️ [SESSION] Respuesta de login superada, descartada");
            return;
        }

        match result {
            Ok(response) if response.success => match (response.token, response.user) {
                (Some(token), Some(user)) => {
                    log::info!("✅ [SESSION] Login exitoso: {} ({})", user.name, user.role);
                    self.credentials.save(&token);
                    let role = user.role;
                    session.apply_authenticated(token, user);
                    router::navigate(&Route::dashboard_for(role));
                }
                _ => {
                    log::error!("❌ [SESSION] Login success sin token/usuario");
                    session.set_error(Some(
                        ApiError::Shape("missing token or user".to_string()).user_message(),
                    ));
                }
            },
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Login failed".to_string());
                log::warn!("🔒 [SESSION] Login rechazado: {}", message);
                session.set_error(Some(message));
            }
            Err(e) => {
                log::error!("❌ [SESSION] Error en login: {}", e);
                session.set_error(Some(e.user_message()));
            }
        }
    }

    /// Logout incondicional: limpia credenciales, desautentica y navega
    /// al login. No puede fallar.
    pub fn logout(&self, session: &SessionState) {
        log::info!("👋 [SESSION] Logout");
        self.credentials.clear();
        session.apply_unauthenticated();
        router::navigate(&Route::Login);
    }

    /// El backend rechazó el token en cualquier llamada autenticada:
    /// misma limpieza que el logout, distinta causa.
    pub fn session_expired(&self, session: &SessionState) {
        log::warn!("🔒 [SESSION] Token rechazado por el backend, cerrando sesión");
        self.credentials.clear();
        session.apply_unauthenticated();
        router::navigate(&Route::Login);
    }

    // ------------------------------------------------------------------
    // Operaciones laterales (sin efecto sobre la sesión)
    // ------------------------------------------------------------------

    /// Registro. En éxito NO autologuea: el caller redirige al login.
    pub async fn register(
        &self,
        session: &SessionState,
        name: String,
        email: String,
        password: String,
        role: Role,
    ) -> Result<String, String> {
        let request = RegisterRequest {
            name,
            email,
            password,
            role,
        };

        match self.api.register(&request).await {
            Ok(response) if response.success => {
                log::info!("✅ [SESSION] Registro exitoso para {}", request.email);
                Ok(response
                    .message
                    .unwrap_or_else(|| "Registration successful. Please log in.".to_string()))
            }
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Registration failed".to_string());
                session.set_error(Some(message.clone()));
                Err(message)
            }
            Err(e) => {
                log::error!("❌ [SESSION] Error en registro: {}", e);
                let message = e.user_message();
                session.set_error(Some(message.clone()));
                Err(message)
            }
        }
    }

    pub async fn request_password_reset(
        &self,
        session: &SessionState,
        email: String,
    ) -> Result<String, String> {
        match self.api.forgot_password(&email).await {
            Ok(response) if response.success => Ok(response
                .message
                .unwrap_or_else(|| "Check your inbox for the reset link.".to_string())),
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Failed to request password reset".to_string());
                session.set_error(Some(message.clone()));
                Err(message)
            }
            Err(e) => {
                let message = e.user_message();
                session.set_error(Some(message.clone()));
                Err(message)
            }
        }
    }

    pub async fn confirm_password_reset(
        &self,
        session: &SessionState,
        reset_token: String,
        password: String,
    ) -> Result<String, String> {
        match self.api.reset_password(&reset_token, &password).await {
            Ok(response) if response.success => Ok(response
                .message
                .unwrap_or_else(|| "Password updated. Please log in.".to_string())),
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Failed to reset password".to_string());
                session.set_error(Some(message.clone()));
                Err(message)
            }
            Err(e) => {
                let message = e.user_message();
                session.set_error(Some(message.clone()));
                Err(message)
            }
        }
    }

    // ------------------------------------------------------------------
    // Perfil
    // ------------------------------------------------------------------

    /// Actualizar perfil: merge superficial de lo que devuelva el backend.
    /// En falla el usuario actual queda como estaba.
    pub async fn update_profile(&self, session: &SessionState, patch: UserPatch) {
        let token = match session.token() {
            Some(token) => token,
            None => {
                session.set_error(Some("Authentication required".to_string()));
                return;
            }
        };

        let seq = session.begin(OpKind::Profile);
        session.set_loading(true);

        let result = self.api.update_profile(&token, &patch).await;

        if !session.is_current(OpKind::Profile, seq) {
            log::warn!("⏭️ [SESSION] Respuesta de perfil superada, descartada");
            return;
        }

        match result {
            Ok(response) if response.success => match response.user {
                Some(server_patch) => {
                    log::info!("✅ [SESSION] Perfil actualizado");
                    session.apply_profile_patch(server_patch);
                }
                None => {
                    session.set_error(Some(
                        ApiError::Shape("missing user in profile response".to_string())
                            .user_message(),
                    ));
                }
            },
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Failed to update profile".to_string());
                session.set_error(Some(message));
            }
            Err(e) if e.is_auth() => self.session_expired(session),
            Err(e) => {
                log::error!("❌ [SESSION] Error actualizando perfil: {}", e);
                session.set_error(Some(e.user_message()));
            }
        }
    }
}

impl Default for SessionViewModel {
    fn default() -> Self {
        Self::new()
    }
}

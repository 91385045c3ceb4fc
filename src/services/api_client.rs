// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP contra el backend REST.
// Toda respuesta se decodifica contra un esquema estricto: si no matchea,
// es un ApiError::Shape, nunca se adivina la forma del payload.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::config::CONFIG;
use crate::models::{
    AppointmentResponse, AppointmentsResponse, AvailabilityResponse, AvailableSlotsResponse,
    CreateAppointmentRequest, CreatePrescriptionRequest, DoctorResponse, DoctorsResponse,
    ForgotPasswordRequest, LoginRequest, LoginResponse, PatientsResponse, PrescriptionResponse,
    PrescriptionsResponse, ProfileResponse, RegisterRequest, ResetPasswordRequest,
    SpecializationsResponse, StatusResponse, UpdateAppointmentRequest,
    UpdateAvailabilityRequest, UserPatch, VerifyResponse,
};

/// Taxonomía de fallas del boundary HTTP.
/// Auth y Validation llevan el mensaje del servidor tal cual; Network y
/// Shape se convierten en texto genérico de cara al usuario.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No llegó respuesta (DNS, CORS, caída de red)
    Network(String),
    /// Credenciales inválidas o token expirado/rechazado
    Auth(String),
    /// El servidor rechazó el input; mensaje para el usuario
    Validation(String),
    /// La respuesta no cumple el contrato esperado
    Shape(String),
}

impl ApiError {
    /// Texto para mostrar en la UI
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Auth(msg) | ApiError::Validation(msg) => msg.clone(),
            ApiError::Network(_) => "Connection failed. Please try again.".to_string(),
            ApiError::Shape(_) => "Unexpected server response. Please try again.".to_string(),
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Auth(msg) => write!(f, "Authentication error: {}", msg),
            ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ApiError::Shape(msg) => write!(f, "Response shape error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.api_url().to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Ejecutar el request y decodificar contra el esquema `T`
    async fn run<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        path: &str,
    ) -> Result<T, ApiError> {
        let req_id = Uuid::new_v4();
        log::debug!("🌐 [API] {} (req {})", path, req_id);

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::decode(response, path, req_id).await
    }

    /// Igual que `run` pero serializando un body JSON
    async fn run_json<B: Serialize, T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        body: &B,
        path: &str,
    ) -> Result<T, ApiError> {
        let req_id = Uuid::new_v4();
        log::debug!("🌐 [API] {} (req {})", path, req_id);

        let response = builder
            .json(body)
            .map_err(|e| ApiError::Shape(format!("request serialization: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::decode(response, path, req_id).await
    }

    async fn decode<T: DeserializeOwned>(
        response: Response,
        path: &str,
        req_id: Uuid,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status == 401 || status == 403 {
            let message = Self::extract_message(response).await
                .unwrap_or_else(|| "Authentication required".to_string());
            log::warn!("🔒 [API] {} rechazado ({}, req {})", path, status, req_id);
            return Err(ApiError::Auth(message));
        }

        if !response.ok() {
            let message = Self::extract_message(response).await;
            log::error!("❌ [API] {} falló con HTTP {} (req {})", path, status, req_id);
            return match message {
                Some(message) if status < 500 => Err(ApiError::Validation(message)),
                _ => Err(ApiError::Network(format!("HTTP {}", status))),
            };
        }

        response
            .json::<T>()
            .await
            .map_err(|e| {
                log::error!("❌ [API] {} respuesta malformada: {} (req {})", path, e, req_id);
                ApiError::Shape(e.to_string())
            })
    }

    /// Sacar el campo `message` de un body de error, si existe
    async fn extract_message(response: Response) -> Option<String> {
        let body = response.json::<serde_json::Value>().await.ok()?;
        body.get("message")?.as_str().map(|s| s.to_string())
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    /// Verificar el token guardado contra GET /auth/verify
    pub async fn verify(&self, token: &str) -> Result<VerifyResponse, ApiError> {
        let builder = Self::with_bearer(Request::get(&self.url("/auth/verify")), Some(token));
        self.run(builder, "/auth/verify").await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.run_json(Request::post(&self.url("/auth/login")), request, "/auth/login")
            .await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<StatusResponse, ApiError> {
        self.run_json(Request::post(&self.url("/auth/register")), request, "/auth/register")
            .await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<StatusResponse, ApiError> {
        let request = ForgotPasswordRequest {
            email: email.to_string(),
        };
        self.run_json(
            Request::post(&self.url("/auth/forgot-password")),
            &request,
            "/auth/forgot-password",
        )
        .await
    }

    pub async fn reset_password(
        &self,
        token: &str,
        password: &str,
    ) -> Result<StatusResponse, ApiError> {
        let request = ResetPasswordRequest {
            token: token.to_string(),
            password: password.to_string(),
        };
        self.run_json(
            Request::post(&self.url("/auth/reset-password")),
            &request,
            "/auth/reset-password",
        )
        .await
    }

    pub async fn update_profile(
        &self,
        token: &str,
        patch: &UserPatch,
    ) -> Result<ProfileResponse, ApiError> {
        let builder = Self::with_bearer(Request::put(&self.url("/users/profile")), Some(token));
        self.run_json(builder, patch, "/users/profile").await
    }

    // ------------------------------------------------------------------
    // Doctors
    // ------------------------------------------------------------------

    pub async fn get_doctors(
        &self,
        page: u32,
        limit: u32,
        specialization: Option<&str>,
    ) -> Result<DoctorsResponse, ApiError> {
        let mut path = format!("/doctors?page={}&limit={}", page, limit);
        if let Some(spec) = specialization {
            if !spec.is_empty() {
                path.push_str(&format!("&specialization={}", spec));
            }
        }
        self.run(Request::get(&self.url(&path)), "/doctors").await
    }

    pub async fn get_doctor(&self, id: &str) -> Result<DoctorResponse, ApiError> {
        let path = format!("/doctors/{}", id);
        self.run(Request::get(&self.url(&path)), "/doctors/:id").await
    }

    /// Ficha de médico asociada a un usuario autenticado
    pub async fn get_doctor_by_user(&self, user_id: &str) -> Result<DoctorResponse, ApiError> {
        let path = format!("/doctors/user/{}", user_id);
        self.run(Request::get(&self.url(&path)), "/doctors/user/:id").await
    }

    pub async fn get_specializations(&self) -> Result<SpecializationsResponse, ApiError> {
        self.run(
            Request::get(&self.url("/doctors/specializations")),
            "/doctors/specializations",
        )
        .await
    }

    pub async fn get_doctor_availability(
        &self,
        id: &str,
    ) -> Result<AvailabilityResponse, ApiError> {
        let path = format!("/doctors/{}/availability", id);
        self.run(Request::get(&self.url(&path)), "/doctors/:id/availability")
            .await
    }

    pub async fn update_availability(
        &self,
        token: &str,
        id: &str,
        request: &UpdateAvailabilityRequest,
    ) -> Result<AvailabilityResponse, ApiError> {
        let path = format!("/doctors/{}/availability", id);
        let builder = Self::with_bearer(Request::put(&self.url(&path)), Some(token));
        self.run_json(builder, request, "/doctors/:id/availability").await
    }

    // ------------------------------------------------------------------
    // Appointments
    // ------------------------------------------------------------------

    pub async fn get_patient_appointments(
        &self,
        token: &str,
    ) -> Result<AppointmentsResponse, ApiError> {
        let builder = Self::with_bearer(
            Request::get(&self.url("/patients/appointments")),
            Some(token),
        );
        self.run(builder, "/patients/appointments").await
    }

    pub async fn get_doctor_appointments(
        &self,
        token: &str,
    ) -> Result<AppointmentsResponse, ApiError> {
        let builder = Self::with_bearer(
            Request::get(&self.url("/appointments/doctor")),
            Some(token),
        );
        self.run(builder, "/appointments/doctor").await
    }

    pub async fn get_appointment(
        &self,
        token: &str,
        id: &str,
    ) -> Result<AppointmentResponse, ApiError> {
        let path = format!("/appointments/{}", id);
        let builder = Self::with_bearer(Request::get(&self.url(&path)), Some(token));
        self.run(builder, "/appointments/:id").await
    }

    pub async fn create_appointment(
        &self,
        token: &str,
        request: &CreateAppointmentRequest,
    ) -> Result<AppointmentResponse, ApiError> {
        let builder = Self::with_bearer(Request::post(&self.url("/appointments")), Some(token));
        self.run_json(builder, request, "/appointments").await
    }

    pub async fn cancel_appointment(
        &self,
        token: &str,
        id: &str,
    ) -> Result<StatusResponse, ApiError> {
        let path = format!("/appointments/{}", id);
        let builder = Self::with_bearer(Request::delete(&self.url(&path)), Some(token));
        self.run(builder, "/appointments/:id").await
    }

    pub async fn update_appointment_status(
        &self,
        token: &str,
        id: &str,
        request: &UpdateAppointmentRequest,
    ) -> Result<AppointmentResponse, ApiError> {
        let path = format!("/appointments/{}", id);
        let builder = Self::with_bearer(Request::patch(&self.url(&path)), Some(token));
        self.run_json(builder, request, "/appointments/:id").await
    }

    pub async fn get_available_slots(
        &self,
        doctor_id: &str,
        date: &str,
    ) -> Result<AvailableSlotsResponse, ApiError> {
        let path = format!(
            "/appointments/available-slots?doctorId={}&date={}",
            doctor_id, date
        );
        self.run(Request::get(&self.url(&path)), "/appointments/available-slots")
            .await
    }

    // ------------------------------------------------------------------
    // Prescriptions / Patients
    // ------------------------------------------------------------------

    pub async fn get_prescriptions(&self, token: &str) -> Result<PrescriptionsResponse, ApiError> {
        let builder = Self::with_bearer(Request::get(&self.url("/prescriptions")), Some(token));
        self.run(builder, "/prescriptions").await
    }

    pub async fn create_prescription(
        &self,
        token: &str,
        request: &CreatePrescriptionRequest,
    ) -> Result<PrescriptionResponse, ApiError> {
        let builder = Self::with_bearer(Request::post(&self.url("/prescriptions")), Some(token));
        self.run_json(builder, request, "/prescriptions").await
    }

    pub async fn get_my_patients(&self, token: &str) -> Result<PatientsResponse, ApiError> {
        let builder = Self::with_bearer(Request::get(&self.url("/doctors/patients")), Some(token));
        self.run(builder, "/doctors/patients").await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_passes_server_text_verbatim() {
        let err = ApiError::Auth("Invalid credentials".to_string());
        assert_eq!(err.user_message(), "Invalid credentials");
        let err = ApiError::Validation("Email already in use".to_string());
        assert_eq!(err.user_message(), "Email already in use");
    }

    #[test]
    fn test_user_message_is_generic_for_transport_and_shape() {
        let err = ApiError::Network("fetch failed".to_string());
        assert!(!err.user_message().contains("fetch failed"));
        let err = ApiError::Shape("missing field `user`".to_string());
        assert!(!err.user_message().contains("missing field"));
    }

    #[test]
    fn test_is_auth() {
        assert!(ApiError::Auth("x".to_string()).is_auth());
        assert!(!ApiError::Network("x".to_string()).is_auth());
    }
}

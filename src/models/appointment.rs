use serde::{Deserialize, Serialize};

/// Estado de una cita. El backend es el dueño de las transiciones;
/// el cliente solo las refleja.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Completed => "completed",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Appointment {
    pub id: String,
    pub doctor_id: String,
    #[serde(default)]
    pub doctor_name: Option<String>,
    pub patient_id: String,
    #[serde(default)]
    pub patient_name: Option<String>,
    /// YYYY-MM-DD
    pub date: String,
    /// "HH:MM - HH:MM"
    pub time_slot: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreateAppointmentRequest {
    pub doctor_id: String,
    pub date: String,
    pub time_slot: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UpdateAppointmentRequest {
    pub status: AppointmentStatus,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AppointmentsResponse {
    pub success: bool,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AppointmentResponse {
    pub success: bool,
    #[serde(default)]
    pub appointment: Option<Appointment>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Franjas libres de un médico para una fecha dada
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AvailableSlotsResponse {
    pub success: bool,
    #[serde(default)]
    pub slots: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Doctor {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub name: String,
    pub specialization: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub consultation_fee: Option<f64>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub ratings_count: Option<u32>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Franja semanal de disponibilidad del médico
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AvailabilitySlot {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DoctorsResponse {
    pub success: bool,
    #[serde(default)]
    pub doctors: Vec<Doctor>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DoctorResponse {
    pub success: bool,
    #[serde(default)]
    pub doctor: Option<Doctor>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AvailabilityResponse {
    pub success: bool,
    #[serde(default)]
    pub availability: Vec<AvailabilitySlot>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UpdateAvailabilityRequest {
    pub availability: Vec<AvailabilitySlot>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SpecializationsResponse {
    pub success: bool,
    #[serde(default)]
    pub specializations: Vec<String>,
}

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Prescription {
    pub id: String,
    pub doctor_id: String,
    #[serde(default)]
    pub doctor_name: Option<String>,
    pub patient_id: String,
    #[serde(default)]
    pub patient_name: Option<String>,
    /// YYYY-MM-DD
    pub date: String,
    pub medications: Vec<Medication>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreatePrescriptionRequest {
    pub patient_id: String,
    pub medications: Vec<Medication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PrescriptionsResponse {
    pub success: bool,
    #[serde(default)]
    pub prescriptions: Vec<Prescription>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PrescriptionResponse {
    pub success: bool,
    #[serde(default)]
    pub prescription: Option<Prescription>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Pacientes atendidos por el médico autenticado
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PatientsResponse {
    pub success: bool,
    #[serde(default)]
    pub patients: Vec<crate::models::User>,
    #[serde(default)]
    pub message: Option<String>,
}

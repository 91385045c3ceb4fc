pub mod user;
pub mod auth;
pub mod doctor;
pub mod appointment;
pub mod prescription;

pub use user::{Role, User, UserPatch};
pub use auth::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, ProfileResponse, RegisterRequest,
    ResetPasswordRequest, StatusResponse, VerifyResponse,
};
pub use doctor::{
    AvailabilityResponse, AvailabilitySlot, Doctor, DoctorResponse, DoctorsResponse,
    SpecializationsResponse, UpdateAvailabilityRequest,
};
pub use appointment::{
    Appointment, AppointmentResponse, AppointmentStatus, AppointmentsResponse,
    AvailableSlotsResponse, CreateAppointmentRequest, UpdateAppointmentRequest,
};
pub use prescription::{
    CreatePrescriptionRequest, Medication, PatientsResponse, Prescription,
    PrescriptionResponse, PrescriptionsResponse,
};

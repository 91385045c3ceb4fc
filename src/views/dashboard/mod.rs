pub mod admin;
pub mod doctor;
pub mod patient;
pub mod widgets;

pub use admin::render_admin_dashboard;
pub use doctor::render_doctor_dashboard;
pub use patient::render_patient_dashboard;

pub mod app;
pub mod auth;
pub mod dashboard;
pub mod doctors;
pub mod home;
pub mod navbar;
pub mod shared;

pub use app::render_app;

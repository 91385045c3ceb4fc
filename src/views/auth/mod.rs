pub mod forgot_password;
pub mod login;
pub mod register;
pub mod reset_password;

pub use forgot_password::render_forgot_password;
pub use login::render_login;
pub use register::render_register;
pub use reset_password::render_reset_password;

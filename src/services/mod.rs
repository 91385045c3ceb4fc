pub mod api_client;
pub mod credential_store;

pub use api_client::{ApiClient, ApiError};
pub use credential_store::CredentialStore;

use serde::{Deserialize, Serialize};
use crate::models::{Role, User, UserPatch};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct VerifyResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

/// Respuesta de actualización de perfil: el backend devuelve solo los
/// campos modificados
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProfileResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<UserPatch>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Respuesta genérica success/message (register, forgot/reset password)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StatusResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

use serde::{Deserialize, Serialize};

/// Rol de usuario. Enum cerrado: un valor desconocido del backend
/// falla la deserialización (shape failure) en lugar de circular como string.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Campos parciales de perfil: lo que devuelve PUT /users/profile.
/// Los campos ausentes de la respuesta se conservan al hacer merge.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl User {
    /// Merge superficial: los campos presentes en el patch pisan los actuales,
    /// los ausentes se conservan
    pub fn merge(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if patch.phone.is_some() {
            self.phone = patch.phone;
        }
        if patch.specialization.is_some() {
            self.specialization = patch.specialization;
        }
        if patch.date_of_birth.is_some() {
            self.date_of_birth = patch.date_of_birth;
        }
        if patch.gender.is_some() {
            self.gender = patch.gender;
        }
        if patch.address.is_some() {
            self.address = patch.address;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "u1".to_string(),
            name: "Ana García".to_string(),
            email: "ana@patients.com".to_string(),
            role: Role::Patient,
            phone: Some("+33612345678".to_string()),
            specialization: None,
            date_of_birth: None,
            gender: None,
            address: None,
        }
    }

    #[test]
    fn test_role_parsing_is_closed() {
        assert_eq!(serde_json::from_str::<Role>("\"patient\"").unwrap(), Role::Patient);
        assert_eq!(serde_json::from_str::<Role>("\"doctor\"").unwrap(), Role::Doctor);
        assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
        // Valores fuera del enum se rechazan en el boundary
        assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
        assert!(serde_json::from_str::<Role>("\"Patient\"").is_err());
    }

    #[test]
    fn test_user_with_unknown_role_fails_decoding() {
        let json = r#"{"id":"u1","name":"X","email":"x@y.com","role":"guest"}"#;
        assert!(serde_json::from_str::<User>(&json).is_err());
    }

    #[test]
    fn test_merge_overwrites_present_fields() {
        let mut user = sample_user();
        user.merge(UserPatch {
            name: Some("Ana María García".to_string()),
            phone: Some("+33699999999".to_string()),
            ..Default::default()
        });
        assert_eq!(user.name, "Ana María García");
        assert_eq!(user.phone.as_deref(), Some("+33699999999"));
    }

    #[test]
    fn test_merge_retains_absent_fields() {
        let mut user = sample_user();
        user.merge(UserPatch::default());
        assert_eq!(user.name, "Ana García");
        assert_eq!(user.email, "ana@patients.com");
        assert_eq!(user.phone.as_deref(), Some("+33612345678"));
    }
}

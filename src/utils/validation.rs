// ============================================================================
// VALIDATION - Validación de formularios en el cliente
// ============================================================================
// El backend re-valida todo; esto solo evita un round-trip obvio.

use crate::models::Role;

/// Resultado de validar un campo: None = válido, Some(msg) = texto para el usuario
pub type FieldError = Option<String>;

pub fn validate_email(email: &str) -> FieldError {
    if email.is_empty() {
        return Some("Email is required".to_string());
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    if local.is_empty() || !domain_ok {
        return Some("Please enter a valid email address".to_string());
    }
    None
}

/// Mínimo 8 caracteres, al menos una letra y un dígito
pub fn validate_password(password: &str) -> FieldError {
    if password.is_empty() {
        return Some("Password is required".to_string());
    }
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if password.len() < 8 || !has_letter || !has_digit {
        return Some(
            "Password must be at least 8 characters long and contain at least one letter and one number"
                .to_string(),
        );
    }
    None
}

pub fn validate_confirm_password(password: &str, confirm: &str) -> FieldError {
    if confirm.is_empty() {
        return Some("Please confirm your password".to_string());
    }
    if password != confirm {
        return Some("Passwords do not match".to_string());
    }
    None
}

pub fn validate_name(name: &str) -> FieldError {
    if name.is_empty() {
        return Some("Name is required".to_string());
    }
    if name.len() < 2 {
        return Some("Name must be at least 2 characters long".to_string());
    }
    let valid = name
        .chars()
        .all(|c| c.is_alphabetic() || c == ' ' || c == '\'' || c == '-');
    if !valid {
        return Some("Please enter a valid name".to_string());
    }
    None
}

/// 10-15 dígitos, con '+' inicial opcional
pub fn validate_phone(phone: &str) -> FieldError {
    if phone.is_empty() {
        return Some("Phone number is required".to_string());
    }
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if digits.len() < 10 || digits.len() > 15 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Some("Please enter a valid phone number".to_string());
    }
    None
}

/// Fecha de cita en formato YYYY-MM-DD; no puede estar en el pasado
pub fn validate_appointment_date(date: &str, today: chrono::NaiveDate) -> FieldError {
    if date.is_empty() {
        return Some("Date is required".to_string());
    }
    match chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) if d < today => Some("Date cannot be in the past".to_string()),
        Ok(_) => None,
        Err(_) => Some("Please enter a valid date".to_string()),
    }
}

/// Dominio de email requerido según el rol al registrarse
/// (regla heredada del backend: cada rol usa su propio dominio)
pub fn required_email_domain(role: Role) -> &'static str {
    match role {
        Role::Patient => "@patients.com",
        Role::Doctor => "@doctors.com",
        Role::Admin => "@admin.com",
    }
}

pub fn validate_role_email(role: Role, email: &str) -> FieldError {
    let domain = required_email_domain(role);
    if !email.ends_with(domain) {
        return Some(format!(
            "For {} accounts, email must end with {}",
            role.as_str(),
            domain
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("ana@patients.com").is_none());
        assert!(validate_email("").is_some());
        assert!(validate_email("sin-arroba").is_some());
        assert!(validate_email("a@b").is_some());
        assert!(validate_email("a@.com").is_some());
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("abcd1234").is_none());
        assert!(validate_password("short1").is_some());
        assert!(validate_password("soloLetras").is_some());
        assert!(validate_password("12345678").is_some());
    }

    #[test]
    fn test_confirm_password() {
        assert!(validate_confirm_password("abcd1234", "abcd1234").is_none());
        assert!(validate_confirm_password("abcd1234", "otra").is_some());
        assert!(validate_confirm_password("abcd1234", "").is_some());
    }

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("+33612345678").is_none());
        assert!(validate_phone("0612345678").is_none());
        assert!(validate_phone("123").is_some());
        assert!(validate_phone("06-12-34-56-78").is_some());
    }

    #[test]
    fn test_date_not_in_past() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert!(validate_appointment_date("2025-06-15", today).is_none());
        assert!(validate_appointment_date("2025-07-01", today).is_none());
        assert!(validate_appointment_date("2025-06-14", today).is_some());
        assert!(validate_appointment_date("15/06/2025", today).is_some());
    }

    #[test]
    fn test_role_email_domain() {
        assert!(validate_role_email(Role::Patient, "ana@patients.com").is_none());
        assert!(validate_role_email(Role::Doctor, "ana@patients.com").is_some());
        assert_eq!(required_email_domain(Role::Admin), "@admin.com");
    }
}

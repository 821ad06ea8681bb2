//! Utilidades de validación
//!
//! Validaciones del lado cliente que se ejecutan antes de cualquier llamada
//! a la API. El backend sigue siendo la fuente de verdad.

use std::borrow::Cow;

use validator::ValidationError;

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 64;

/// Validar que un string no esté vacío (tras `trim`)
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Devuelve el primer campo vacío de la lista, en orden
pub fn first_blank<'a>(fields: &[(&'a str, &str)]) -> Option<&'a str> {
    fields
        .iter()
        .find(|(_, value)| is_blank(value))
        .map(|(name, _)| *name)
}

/// Convertir un campo de formulario a id numérico
pub fn parse_id(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

/// Contraseña: 8-64 caracteres, al menos un dígito y un carácter especial
pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_special = value.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    if len < PASSWORD_MIN_LEN || len > PASSWORD_MAX_LEN || !has_digit || !has_special {
        let mut error = ValidationError::new("password");
        error.add_param("min".into(), &PASSWORD_MIN_LEN);
        error.add_param("max".into(), &PASSWORD_MAX_LEN);
        error.add_param("actual".into(), &len);
        error.message = Some(Cow::from(
            "Password must be 8-64 characters and contain at least one digit and one special character.",
        ));
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_blank_keeps_field_order() {
        let fields = [("username", "alice"), ("email", " "), ("address", "")];
        assert_eq!(first_blank(&fields), Some("email"));
        assert_eq!(first_blank(&[("username", "alice")]), None);
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(" 42 "), Some(42));
        assert_eq!(parse_id("4a"), None);
        assert_eq!(parse_id(""), None);
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("secret1.").is_ok());
        assert!(validate_password("secret1").is_err()); // sin especial
        assert!(validate_password("secret..").is_err()); // sin dígito
        assert!(validate_password("s1.").is_err()); // muy corta
        assert!(validate_password(&format!("{}1.", "a".repeat(63))).is_err());
    }
}

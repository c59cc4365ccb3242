//! Utilidades de validación
//!
//! Validadores custom compartidos por los requests de los modelos.

use validator::ValidationError;

/// Validar que un string no esté vacío (los `length(min = 1)` de
/// `validator` aceptan strings de puro espacio; este no)
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del núcleo. Todos los
//! errores del entity store son síncronos y deben manejarse en el punto
//! de llamada; no hay política de reintentos porque las operaciones son
//! locales y deterministas.

use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// Login rechazado. Mensaje genérico a propósito: no se distingue
    /// entre email desconocido y contraseña incorrecta.
    #[error("Credenciales incorrectas. Inténtalo de nuevo.")]
    InvalidCredentials,

    /// Intento de borrar la cuenta con la que se inició sesión
    #[error("No puedes eliminar al usuario con el que has iniciado sesión.")]
    SelfDelete,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Política de borrado `restrict`: el usuario aún tiene vehículos
    #[error("User '{user_id}' still owns {count} vehicle(s)")]
    OwnedVehiclesExist { user_id: uuid::Uuid, count: usize },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Summary API error: {0}")]
    SummaryApi(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de acceso prohibido
pub fn forbidden_error(operation: &str, reason: &str) -> AppError {
    AppError::Forbidden(format!("Cannot {}: {}", operation, reason))
}

/// Función helper para crear errores de conflicto
pub fn conflict_error(resource: &str, field: &str, value: &str) -> AppError {
    AppError::Conflict(format!("{} with {} '{}' already exists", resource, field, value))
}

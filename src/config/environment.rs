//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. A diferencia de un
//! servicio desplegado, el núcleo debe poder arrancar sin ninguna
//! variable definida, así que cada clave tiene un valor por defecto.

use std::env;
use std::path::PathBuf;

use crate::utils::errors::AppError;

/// Política ante vehículos cuyo propietario se elimina
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletionPolicy {
    /// Rechazar el borrado mientras el usuario tenga vehículos
    Restrict,
    /// Eliminar también los vehículos del usuario
    Cascade,
    /// Eliminar solo el usuario; los vehículos quedan con dueño "N/A"
    #[default]
    OrphanTolerant,
}

impl DeletionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeletionPolicy::Restrict => "restrict",
            DeletionPolicy::Cascade => "cascade",
            DeletionPolicy::OrphanTolerant => "orphan",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, AppError> {
        match s {
            "restrict" => Ok(DeletionPolicy::Restrict),
            "cascade" => Ok(DeletionPolicy::Cascade),
            "orphan" => Ok(DeletionPolicy::OrphanTolerant),
            other => Err(AppError::Config(format!(
                "DELETION_POLICY inválida: '{}' (se espera restrict|cascade|orphan)",
                other
            ))),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub deletion_policy: DeletionPolicy,
    pub storage_dir: PathBuf,
    pub summary_api_url: Option<String>,
    pub summary_api_key: Option<String>,
    pub seed_demo_data: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            deletion_policy: DeletionPolicy::default(),
            storage_dir: PathBuf::from("data"),
            summary_api_url: None,
            summary_api_key: None,
            seed_demo_data: true,
        }
    }
}

impl EnvironmentConfig {
    /// Carga la configuración desde el entorno, con defaults integrados
    pub fn from_env() -> Result<Self, AppError> {
        let deletion_policy = match env::var("DELETION_POLICY") {
            Ok(value) => DeletionPolicy::from_str(value.trim())?,
            Err(_) => DeletionPolicy::default(),
        };

        Ok(Self {
            deletion_policy,
            storage_dir: env::var("STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            summary_api_url: env::var("SUMMARY_API_URL").ok(),
            summary_api_key: env::var("SUMMARY_API_KEY").ok(),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        })
    }

    /// Verificar si el generador de resúmenes externo está configurado
    pub fn summary_api_configured(&self) -> bool {
        self.summary_api_url.is_some() && self.summary_api_key.is_some()
    }
}

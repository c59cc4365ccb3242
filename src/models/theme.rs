//! Modelo de ThemeSettings
//!
//! Estado de presentación a nivel de proceso, con ciclo de vida propio:
//! se persiste fuera del entity store, en un slot clave/valor dedicado.

use serde::{Deserialize, Serialize};

/// Ajustes de tema del taller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettings {
    pub logo: String,
    pub color_primary: String,
    pub color_secondary: String,
    pub color_background: String,
    pub app_name: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            logo: "https://tailwindui.com/img/logos/mark.svg?color=indigo&shade=600".to_string(),
            color_primary: "#4f46e5".to_string(),
            color_secondary: "#ffffff".to_string(),
            color_background: "#f3f4f6".to_string(),
            app_name: "Taller Pro".to_string(),
        }
    }
}

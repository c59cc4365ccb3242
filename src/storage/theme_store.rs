//! Persistencia del tema
//!
//! El tema vive bajo la clave fija `themeSettings`. La lectura inicial
//! nunca falla: un slot ausente o corrupto cae al tema integrado (el
//! error se registra, no se propaga).

use crate::models::ThemeSettings;
use crate::storage::kv::KeyValueSlot;
use crate::utils::errors::AppError;

/// Clave fija del slot de tema
pub const THEME_KEY: &str = "themeSettings";

pub struct ThemeStore {
    slot: Box<dyn KeyValueSlot>,
}

impl ThemeStore {
    pub fn new(slot: Box<dyn KeyValueSlot>) -> Self {
        Self { slot }
    }

    /// Tema persistido, o el default si el slot está ausente o corrupto
    pub fn load(&self) -> ThemeSettings {
        match self.slot.read(THEME_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("⚠️ Tema persistido corrupto, usando el default: {}", e);
                    ThemeSettings::default()
                }
            },
            Ok(None) => ThemeSettings::default(),
            Err(e) => {
                log::warn!("⚠️ No se pudo leer el tema persistido: {}", e);
                ThemeSettings::default()
            }
        }
    }

    /// Persiste el tema (se invoca en cada cambio)
    pub fn save(&self, settings: &ThemeSettings) -> Result<(), AppError> {
        let raw = serde_json::to_string(settings)?;
        self.slot.write(THEME_KEY, &raw)
    }
}

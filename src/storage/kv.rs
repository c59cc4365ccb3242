//! Slot clave/valor
//!
//! Abstracción mínima sobre el almacenamiento local del navegador: un
//! valor serializado bajo una clave fija. La implementación de archivo
//! guarda cada clave como un archivo JSON dentro de un directorio.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::utils::errors::AppError;

pub trait KeyValueSlot: Send + Sync {
    /// Valor crudo bajo la clave, si existe
    fn read(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Escribe (o reemplaza) el valor bajo la clave
    fn write(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Slot respaldado por el filesystem
#[derive(Debug)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueSlot for FileSlot {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// Slot en memoria para tests
#[derive(Debug, Default)]
pub struct MemorySlot {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-carga un valor (por ejemplo, uno corrupto)
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self {
            values: Mutex::new(values),
        }
    }
}

impl KeyValueSlot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .values
            .lock()
            .map_err(|_| AppError::Storage("slot lock poisoned".to_string()))?
            .get(key)
            .cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.values
            .lock()
            .map_err(|_| AppError::Storage("slot lock poisoned".to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

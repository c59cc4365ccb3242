//! Repositorio de repuestos en memoria

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::Part;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

#[derive(Debug, Clone, Default)]
pub struct PartRepository {
    parts: Arc<RwLock<Vec<Part>>>,
}

impl PartRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: Vec<Part>) -> Self {
        Self {
            parts: Arc::new(RwLock::new(seed)),
        }
    }

    pub async fn insert(&self, build: impl FnOnce(Uuid) -> Part) -> Result<Part, AppError> {
        let mut parts = self.parts.write().await;
        let id = Uuid::new_v4();
        if parts.iter().any(|p| p.id == id) {
            return Err(conflict_error("Part", "id", &id.to_string()));
        }
        let part = build(id);
        parts.push(part.clone());
        log::info!("Repuesto creado: {} ({})", part.name, part.id);
        Ok(part)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<Part> {
        self.parts.read().await.iter().find(|p| p.id == id).cloned()
    }

    pub async fn list(&self) -> Vec<Part> {
        self.parts.read().await.clone()
    }

    /// Reemplaza el registro cuyo id coincide con el del repuesto dado
    pub async fn update(&self, part: Part) -> Result<Part, AppError> {
        let mut parts = self.parts.write().await;
        match parts.iter_mut().find(|p| p.id == part.id) {
            Some(existing) => {
                *existing = part.clone();
                Ok(part)
            }
            None => Err(not_found_error("Part", &part.id.to_string())),
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut parts = self.parts.write().await;
        let before = parts.len();
        parts.retain(|p| p.id != id);
        if parts.len() == before {
            return Err(not_found_error("Part", &id.to_string()));
        }
        log::info!("Repuesto eliminado: {}", id);
        Ok(())
    }
}

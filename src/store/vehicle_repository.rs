//! Repositorio de vehículos en memoria
//!
//! El reemplazo por id se usa tanto para reasignar el propietario como
//! para agregar registros al historial: el llamador construye el registro
//! completo y el repositorio no hace diffing ni merge.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::Vehicle;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

#[derive(Debug, Clone, Default)]
pub struct VehicleRepository {
    vehicles: Arc<RwLock<Vec<Vehicle>>>,
}

impl VehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: Vec<Vehicle>) -> Self {
        Self {
            vehicles: Arc::new(RwLock::new(seed)),
        }
    }

    pub async fn insert(&self, build: impl FnOnce(Uuid) -> Vehicle) -> Result<Vehicle, AppError> {
        let mut vehicles = self.vehicles.write().await;
        let id = Uuid::new_v4();
        if vehicles.iter().any(|v| v.id == id) {
            return Err(conflict_error("Vehicle", "id", &id.to_string()));
        }
        let vehicle = build(id);
        vehicles.push(vehicle.clone());
        log::info!(
            "Vehículo creado: {} {} ({})",
            vehicle.make,
            vehicle.model,
            vehicle.id
        );
        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<Vehicle> {
        self.vehicles.read().await.iter().find(|v| v.id == id).cloned()
    }

    pub async fn find_by_owner(&self, owner_id: Uuid) -> Vec<Vehicle> {
        self.vehicles
            .read()
            .await
            .iter()
            .filter(|v| v.owner_id == owner_id)
            .cloned()
            .collect()
    }

    pub async fn list(&self) -> Vec<Vehicle> {
        self.vehicles.read().await.clone()
    }

    /// Reemplaza el registro cuyo id coincide con el del vehículo dado
    pub async fn update(&self, vehicle: Vehicle) -> Result<Vehicle, AppError> {
        let mut vehicles = self.vehicles.write().await;
        match vehicles.iter_mut().find(|v| v.id == vehicle.id) {
            Some(existing) => {
                *existing = vehicle.clone();
                Ok(vehicle)
            }
            None => Err(not_found_error("Vehicle", &vehicle.id.to_string())),
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut vehicles = self.vehicles.write().await;
        let before = vehicles.len();
        vehicles.retain(|v| v.id != id);
        if vehicles.len() == before {
            return Err(not_found_error("Vehicle", &id.to_string()));
        }
        log::info!("Vehículo eliminado: {}", id);
        Ok(())
    }

    /// Elimina todos los vehículos de un propietario (política `cascade`)
    pub async fn delete_by_owner(&self, owner_id: Uuid) -> usize {
        let mut vehicles = self.vehicles.write().await;
        let before = vehicles.len();
        vehicles.retain(|v| v.owner_id != owner_id);
        before - vehicles.len()
    }

    pub async fn count_by_owner(&self, owner_id: Uuid) -> usize {
        self.vehicles
            .read()
            .await
            .iter()
            .filter(|v| v.owner_id == owner_id)
            .count()
    }
}

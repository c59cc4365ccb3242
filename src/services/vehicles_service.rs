//! Servicio de vehículos
//!
//! Lecturas filtradas por rol y las dos rutas de escritura: reemplazo
//! completo (solo admin) y agregado al historial (mecánico y admin).
//! El historial previo se preserva intacto y en orden en todo caso.

use uuid::Uuid;
use validator::Validate;

use crate::models::{CreateVehicleRequest, NewServiceRecord, ServiceRecord, User, Vehicle};
use crate::services::authorization_service::AuthorizationService;
use crate::store::VehicleRepository;
use crate::utils::errors::{forbidden_error, not_found_error, AppError};

#[derive(Clone)]
pub struct VehiclesService {
    vehicles: VehicleRepository,
    authz: AuthorizationService,
}

impl VehiclesService {
    pub fn new(vehicles: VehicleRepository, authz: AuthorizationService) -> Self {
        Self { vehicles, authz }
    }

    /// Vehículos visibles para el principal según su rol
    pub async fn list_vehicles(&self, principal: &User) -> Vec<Vehicle> {
        self.vehicles
            .list()
            .await
            .into_iter()
            .filter(|v| self.authz.can_view_vehicle(principal, v))
            .collect()
    }

    /// Detalle de un vehículo; `NotFound` si existe pero el principal no
    /// puede verlo, para no revelar su existencia a un cliente ajeno
    pub async fn get_vehicle(&self, principal: &User, id: Uuid) -> Result<Vehicle, AppError> {
        match self.vehicles.find_by_id(id).await {
            Some(vehicle) if self.authz.can_view_vehicle(principal, &vehicle) => Ok(vehicle),
            _ => Err(not_found_error("Vehicle", &id.to_string())),
        }
    }

    pub async fn create_vehicle(
        &self,
        principal: &User,
        request: CreateVehicleRequest,
    ) -> Result<Vehicle, AppError> {
        if !self.authz.can_replace_vehicle(principal) {
            return Err(forbidden_error("create vehicle", "requires admin role"));
        }
        request.validate()?;
        self.vehicles.insert(|id| request.into_vehicle(id)).await
    }

    /// Reemplazo completo por id (reasignación de propietario incluida)
    pub async fn update_vehicle(
        &self,
        principal: &User,
        vehicle: Vehicle,
    ) -> Result<Vehicle, AppError> {
        if !self.authz.can_replace_vehicle(principal) {
            return Err(forbidden_error("update vehicle", "requires admin role"));
        }
        self.vehicles.update(vehicle).await
    }

    pub async fn delete_vehicle(&self, principal: &User, id: Uuid) -> Result<(), AppError> {
        if !self.authz.can_replace_vehicle(principal) {
            return Err(forbidden_error("delete vehicle", "requires admin role"));
        }
        self.vehicles.delete(id).await
    }

    /// Agrega un registro de servicio al final del historial.
    ///
    /// Construye el registro completo aquí (id fresco) y reemplaza el
    /// vehículo con el historial extendido en una sola escritura, de modo
    /// que las entradas previas quedan intactas y en orden.
    pub async fn append_service_record(
        &self,
        principal: &User,
        vehicle_id: Uuid,
        record: NewServiceRecord,
    ) -> Result<ServiceRecord, AppError> {
        if !self.authz.can_append_service_history(principal) {
            return Err(forbidden_error(
                "append service record",
                "requires mechanic or admin role",
            ));
        }
        record.validate()?;

        let mut vehicle = self
            .vehicles
            .find_by_id(vehicle_id)
            .await
            .ok_or_else(|| not_found_error("Vehicle", &vehicle_id.to_string()))?;

        let stored = record.into_record(Uuid::new_v4());
        vehicle.service_history.push(stored.clone());
        self.vehicles.update(vehicle).await?;

        log::info!(
            "Registro de servicio agregado al vehículo {}: {} km",
            vehicle_id,
            stored.mileage
        );
        Ok(stored)
    }
}

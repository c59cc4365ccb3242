//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle con su historial de servicio.
//! El historial es propiedad exclusiva del vehículo: los registros se
//! agregan al final y nunca se editan (orden de inserción == cronológico).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Tipo de transmisión
///
/// Se serializa con las etiquetas originales del catálogo en español.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transmission {
    #[serde(rename = "Automática")]
    Automatic,
    #[serde(rename = "Manual")]
    Manual,
}

impl Transmission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transmission::Automatic => "Automática",
            Transmission::Manual => "Manual",
        }
    }
}

/// Registro de servicio: hijo append-only del vehículo, inmutable una vez creado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub mileage: u32,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub cost: Decimal,
}

/// Vehículo del taller
///
/// `owner_id` es una referencia débil a un User (solo relación, sin
/// propiedad); puede quedar huérfana según la política de borrado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    pub license_plate: String,
    pub owner_id: Uuid,
    pub engine_displacement: String,
    pub transmission: Transmission,
    pub oil_filter: String,
    pub air_filter: String,
    pub fuel_filter: String,
    pub cabin_filter: String,
    pub service_history: Vec<ServiceRecord>,
}

impl Vehicle {
    /// Kilometraje del último servicio registrado (0 si no hay historial)
    pub fn last_service_mileage(&self) -> u32 {
        self.service_history.last().map_or(0, |record| record.mileage)
    }
}

/// Request para crear un nuevo vehículo
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,

    #[validate(length(min = 5, max = 20))]
    pub vin: String,

    #[validate(length(min = 4, max = 20))]
    pub license_plate: String,

    pub owner_id: Uuid,

    #[validate(length(min = 1, max = 20))]
    pub engine_displacement: String,

    pub transmission: Transmission,

    #[validate(custom = "crate::utils::validation::validate_not_empty")]
    pub oil_filter: String,

    #[validate(custom = "crate::utils::validation::validate_not_empty")]
    pub air_filter: String,

    #[validate(custom = "crate::utils::validation::validate_not_empty")]
    pub fuel_filter: String,

    #[validate(custom = "crate::utils::validation::validate_not_empty")]
    pub cabin_filter: String,
}

impl CreateVehicleRequest {
    /// Materializa el vehículo con el id asignado y el historial vacío
    pub fn into_vehicle(self, id: Uuid) -> Vehicle {
        Vehicle {
            id,
            make: self.make,
            model: self.model,
            year: self.year,
            vin: self.vin,
            license_plate: self.license_plate,
            owner_id: self.owner_id,
            engine_displacement: self.engine_displacement,
            transmission: self.transmission,
            oil_filter: self.oil_filter,
            air_filter: self.air_filter,
            fuel_filter: self.fuel_filter,
            cabin_filter: self.cabin_filter,
            service_history: Vec::new(),
        }
    }
}

/// Datos para un nuevo registro de servicio (el id lo asigna el servicio)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewServiceRecord {
    pub date: NaiveDate,

    #[validate(range(min = 0, max = 2_000_000))]
    pub mileage: u32,

    #[validate(length(min = 1, max = 2000))]
    pub notes: String,

    pub summary: Option<String>,

    #[validate(custom = "validate_cost")]
    pub cost: Decimal,
}

fn validate_cost(cost: &Decimal) -> Result<(), ValidationError> {
    if cost.is_sign_negative() {
        return Err(ValidationError::new("negative_cost"));
    }
    Ok(())
}

impl NewServiceRecord {
    pub fn into_record(self, id: Uuid) -> ServiceRecord {
        ServiceRecord {
            id,
            date: self.date,
            mileage: self.mileage,
            notes: self.notes,
            summary: self.summary,
            cost: self.cost,
        }
    }
}

//! Modelo de Part
//!
//! Catálogo de repuestos: entidad independiente, sin relación con Vehicle
//! en el alcance actual.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Repuesto del catálogo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: Uuid,
    pub name: String,
    pub part_number: String,
    pub brand: String,
    pub stock: u32,
    pub description: String,
}

/// Request para crear un nuevo repuesto
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePartRequest {
    #[validate(length(min = 2, max = 200))]
    pub name: String,

    #[validate(length(min = 1, max = 50))]
    pub part_number: String,

    #[validate(length(min = 1, max = 100))]
    pub brand: String,

    pub stock: u32,

    #[validate(length(max = 1000))]
    pub description: String,
}

impl CreatePartRequest {
    pub fn into_part(self, id: Uuid) -> Part {
        Part {
            id,
            name: self.name,
            part_number: self.part_number,
            brand: self.brand,
            stock: self.stock,
            description: self.description,
        }
    }
}

/// Request para actualizar un repuesto existente (reemplazo completo por id)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePartRequest {
    pub id: Uuid,

    #[validate(length(min = 2, max = 200))]
    pub name: String,

    #[validate(length(min = 1, max = 50))]
    pub part_number: String,

    #[validate(length(min = 1, max = 100))]
    pub brand: String,

    pub stock: u32,

    #[validate(length(max = 1000))]
    pub description: String,
}

impl From<UpdatePartRequest> for Part {
    fn from(request: UpdatePartRequest) -> Self {
        Self {
            id: request.id,
            name: request.name,
            part_number: request.part_number,
            brand: request.brand,
            stock: request.stock,
            description: request.description,
        }
    }
}

//! Modelo de User
//!
//! Este módulo contiene el struct User y los roles del sistema.
//! La identidad de un usuario es su `id`; el rol solo lo cambia un admin.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Roles del sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Mechanic,
    Client,
    /// Rol no mapeado en datos importados; sin panel ni capacidad alguna
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Mechanic => "mechanic",
            Role::Client => "client",
            Role::Unknown => "unknown",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "mechanic" => Some(Role::Mechanic),
            "client" => Some(Role::Client),
            _ => None,
        }
    }
}

/// Usuario del taller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Request para crear un nuevo usuario
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    pub role: Role,
}

impl CreateUserRequest {
    /// Materializa el usuario con el id asignado por el repositorio
    pub fn into_user(self, id: Uuid) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
        }
    }
}

/// Request para actualizar un usuario existente (reemplazo completo por id)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    pub id: Uuid,

    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    pub role: Role,
}

impl From<UpdateUserRequest> for User {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            id: request.id,
            name: request.name,
            email: request.email,
            role: request.role,
        }
    }
}

//! Servicio de autorización
//!
//! Mapea el rol del principal a las capacidades del sistema. Las reglas
//! se aplican en la frontera de acceso a datos (los servicios de
//! entidades), no en la capa de presentación.

use crate::models::{Role, User, Vehicle};

/// Servicio de autorización para verificar permisos por rol
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizationService;

impl AuthorizationService {
    pub fn new() -> Self {
        Self
    }

    /// Solo el admin gestiona usuarios
    pub fn can_manage_users(&self, principal: &User) -> bool {
        matches!(principal.role, Role::Admin)
    }

    /// Solo el admin gestiona el catálogo de repuestos
    pub fn can_manage_parts(&self, principal: &User) -> bool {
        matches!(principal.role, Role::Admin)
    }

    /// Solo el admin edita el tema
    pub fn can_manage_theme(&self, principal: &User) -> bool {
        matches!(principal.role, Role::Admin)
    }

    /// Admin y mecánico ven todos los vehículos; el cliente solo los suyos
    pub fn can_view_vehicle(&self, principal: &User, vehicle: &Vehicle) -> bool {
        match principal.role {
            Role::Admin | Role::Mechanic => true,
            Role::Client => vehicle.owner_id == principal.id,
            Role::Unknown => false,
        }
    }

    /// Reemplazo completo del vehículo (reasignación de dueño incluida)
    pub fn can_replace_vehicle(&self, principal: &User) -> bool {
        matches!(principal.role, Role::Admin)
    }

    /// Escritura append-only del historial de servicio
    pub fn can_append_service_history(&self, principal: &User) -> bool {
        matches!(principal.role, Role::Admin | Role::Mechanic)
    }

    /// Nivel de acceso del principal
    pub fn access_level(&self, principal: &User) -> AccessLevel {
        match principal.role {
            Role::Admin => AccessLevel::Full,
            Role::Mechanic => AccessLevel::Workshop,
            Role::Client => AccessLevel::Owned,
            Role::Unknown => AccessLevel::None,
        }
    }
}

/// Niveles de acceso del sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    /// Acceso completo: usuarios, vehículos, repuestos y tema
    Full,
    /// Acceso de taller: todos los vehículos, historial append-only
    Workshop,
    /// Acceso de cliente: solo lectura de los vehículos propios
    Owned,
    /// Rol no reconocido: sin acceso
    None,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Full => "full",
            AccessLevel::Workshop => "workshop",
            AccessLevel::Owned => "owned",
            AccessLevel::None => "none",
        }
    }
}

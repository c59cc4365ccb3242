//! Servicio de usuarios
//!
//! Frontera de acceso a datos para la colección de usuarios: cada
//! operación recibe al principal que la ejecuta y verifica sus
//! capacidades antes de tocar el repositorio.

use uuid::Uuid;
use validator::Validate;

use crate::config::DeletionPolicy;
use crate::models::{CreateUserRequest, UpdateUserRequest, User};
use crate::services::authorization_service::AuthorizationService;
use crate::store::{UserRepository, VehicleRepository};
use crate::utils::errors::{forbidden_error, AppError};

#[derive(Clone)]
pub struct UsersService {
    users: UserRepository,
    vehicles: VehicleRepository,
    authz: AuthorizationService,
    deletion_policy: DeletionPolicy,
}

impl UsersService {
    pub fn new(
        users: UserRepository,
        vehicles: VehicleRepository,
        authz: AuthorizationService,
        deletion_policy: DeletionPolicy,
    ) -> Self {
        Self {
            users,
            vehicles,
            authz,
            deletion_policy,
        }
    }

    pub async fn list_users(&self, principal: &User) -> Result<Vec<User>, AppError> {
        if !self.authz.can_manage_users(principal) {
            return Err(forbidden_error("list users", "requires admin role"));
        }
        Ok(self.users.list().await)
    }

    pub async fn create_user(
        &self,
        principal: &User,
        request: CreateUserRequest,
    ) -> Result<User, AppError> {
        if !self.authz.can_manage_users(principal) {
            return Err(forbidden_error("create user", "requires admin role"));
        }
        request.validate()?;
        self.users.insert(|id| request.into_user(id)).await
    }

    pub async fn update_user(
        &self,
        principal: &User,
        request: UpdateUserRequest,
    ) -> Result<User, AppError> {
        if !self.authz.can_manage_users(principal) {
            return Err(forbidden_error("update user", "requires admin role"));
        }
        request.validate()?;
        self.users.update(request.into()).await
    }

    /// Elimina un usuario aplicando la política de borrado configurada.
    ///
    /// Nunca se puede eliminar la cuenta con la que se inició sesión.
    pub async fn delete_user(&self, principal: &User, id: Uuid) -> Result<(), AppError> {
        if !self.authz.can_manage_users(principal) {
            return Err(forbidden_error("delete user", "requires admin role"));
        }
        if principal.id == id {
            return Err(AppError::SelfDelete);
        }

        match self.deletion_policy {
            DeletionPolicy::Restrict => {
                let count = self.vehicles.count_by_owner(id).await;
                if count > 0 {
                    return Err(AppError::OwnedVehiclesExist { user_id: id, count });
                }
                self.users.delete(id).await
            }
            DeletionPolicy::Cascade => {
                // El usuario primero: si no existe, no se toca ningún vehículo
                self.users.delete(id).await?;
                let removed = self.vehicles.delete_by_owner(id).await;
                if removed > 0 {
                    log::info!("Cascade: {} vehículo(s) eliminados junto al usuario {}", removed, id);
                }
                Ok(())
            }
            DeletionPolicy::OrphanTolerant => {
                let orphaned = self.vehicles.count_by_owner(id).await;
                if orphaned > 0 {
                    log::warn!(
                        "⚠️ {} vehículo(s) quedan sin propietario tras eliminar {}",
                        orphaned,
                        id
                    );
                }
                self.users.delete(id).await
            }
        }
    }
}

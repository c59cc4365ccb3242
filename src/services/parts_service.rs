//! Servicio de repuestos
//!
//! CRUD del catálogo, restringido al admin. Sin guardas adicionales.

use uuid::Uuid;
use validator::Validate;

use crate::models::{CreatePartRequest, Part, UpdatePartRequest, User};
use crate::services::authorization_service::AuthorizationService;
use crate::store::PartRepository;
use crate::utils::errors::{forbidden_error, AppError};

#[derive(Clone)]
pub struct PartsService {
    parts: PartRepository,
    authz: AuthorizationService,
}

impl PartsService {
    pub fn new(parts: PartRepository, authz: AuthorizationService) -> Self {
        Self { parts, authz }
    }

    pub async fn list_parts(&self, principal: &User) -> Result<Vec<Part>, AppError> {
        if !self.authz.can_manage_parts(principal) {
            return Err(forbidden_error("list parts", "requires admin role"));
        }
        Ok(self.parts.list().await)
    }

    pub async fn create_part(
        &self,
        principal: &User,
        request: CreatePartRequest,
    ) -> Result<Part, AppError> {
        if !self.authz.can_manage_parts(principal) {
            return Err(forbidden_error("create part", "requires admin role"));
        }
        request.validate()?;
        self.parts.insert(|id| request.into_part(id)).await
    }

    pub async fn update_part(
        &self,
        principal: &User,
        request: UpdatePartRequest,
    ) -> Result<Part, AppError> {
        if !self.authz.can_manage_parts(principal) {
            return Err(forbidden_error("update part", "requires admin role"));
        }
        request.validate()?;
        self.parts.update(request.into()).await
    }

    pub async fn delete_part(&self, principal: &User, id: Uuid) -> Result<(), AppError> {
        if !self.authz.can_manage_parts(principal) {
            return Err(forbidden_error("delete part", "requires admin role"));
        }
        self.parts.delete(id).await
    }
}

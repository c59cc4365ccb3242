//! Repositorio de usuarios en memoria
//!
//! Colección mutable de usuarios detrás de un RwLock. El orden de
//! inserción se preserva. Este repositorio no aplica reglas de
//! autorización: eso es responsabilidad de la capa de servicios.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::User;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

#[derive(Debug, Clone, Default)]
pub struct UserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(seed)),
        }
    }

    /// Inserta un usuario con un id fresco y devuelve el registro almacenado.
    ///
    /// El id es un UUID v4; aun así se verifica contra la colección para
    /// descartar colisiones (el esquema original de timestamps colisionaba
    /// con dos creaciones en el mismo tick).
    pub async fn insert(&self, build: impl FnOnce(Uuid) -> User) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        let id = Uuid::new_v4();
        if users.iter().any(|u| u.id == id) {
            return Err(conflict_error("User", "id", &id.to_string()));
        }
        let user = build(id);
        users.push(user.clone());
        log::info!("Usuario creado: {} ({})", user.name, user.id);
        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<User> {
        self.users.read().await.iter().find(|u| u.id == id).cloned()
    }

    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.read().await.iter().find(|u| u.email == email).cloned()
    }

    pub async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    /// Reemplaza el registro cuyo id coincide con el del usuario dado
    pub async fn update(&self, user: User) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(user)
            }
            None => Err(not_found_error("User", &user.id.to_string())),
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(not_found_error("User", &id.to_string()));
        }
        log::info!("Usuario eliminado: {}", id);
        Ok(())
    }
}

//! Servicio de tema
//!
//! Estado de presentación a nivel de proceso. Se carga una vez al
//! arrancar (con fallback al tema integrado) y se persiste en el slot
//! clave/valor en cada cambio.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{ThemeSettings, User};
use crate::services::authorization_service::AuthorizationService;
use crate::storage::ThemeStore;
use crate::utils::errors::{forbidden_error, AppError};

#[derive(Clone)]
pub struct ThemeService {
    store: Arc<ThemeStore>,
    authz: AuthorizationService,
    current: Arc<RwLock<ThemeSettings>>,
}

impl ThemeService {
    /// Carga el tema persistido (o el default) y deja el servicio listo
    pub fn new(store: ThemeStore, authz: AuthorizationService) -> Self {
        let current = store.load();
        Self {
            store: Arc::new(store),
            authz,
            current: Arc::new(RwLock::new(current)),
        }
    }

    /// El tema es legible por cualquier vista (pantalla de login incluida)
    pub async fn current_theme(&self) -> ThemeSettings {
        self.current.read().await.clone()
    }

    /// Aplica y persiste un cambio de tema (solo admin)
    pub async fn update_theme(
        &self,
        principal: &User,
        settings: ThemeSettings,
    ) -> Result<(), AppError> {
        if !self.authz.can_manage_theme(principal) {
            return Err(forbidden_error("update theme", "requires admin role"));
        }
        self.store.save(&settings)?;
        let mut current = self.current.write().await;
        *current = settings;
        Ok(())
    }
}

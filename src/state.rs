//! Shared application state
//!
//! Este módulo arma el estado de la aplicación: repositorios, sesión y
//! servicios con sus capacidades. No hay singletons ambientales: el
//! estado se construye explícitamente y se pasa por referencia a quien
//! lo necesite.

use std::sync::Arc;

use crate::config::EnvironmentConfig;
use crate::router::RoleRouter;
use crate::seed::SeedData;
use crate::services::{
    AuthorizationService, CredentialVerifier, PartsService, SessionService, ThemeService,
    UsersService, VehiclesService,
};
use crate::storage::{FileSlot, ThemeStore};
use crate::store::{PartRepository, UserRepository, VehicleRepository};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub session: SessionService,
    pub users: UsersService,
    pub vehicles: VehiclesService,
    pub parts: PartsService,
    pub theme: ThemeService,
    pub router: RoleRouter,
}

impl AppState {
    /// Construye el estado con las colecciones iniciales dadas
    pub fn new(
        config: EnvironmentConfig,
        seed: SeedData,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        let user_repo = UserRepository::with_seed(seed.users);
        let vehicle_repo = VehicleRepository::with_seed(seed.vehicles);
        let part_repo = PartRepository::with_seed(seed.parts);
        let authz = AuthorizationService::new();

        let theme_store = ThemeStore::new(Box::new(FileSlot::new(config.storage_dir.clone())));

        let session = SessionService::new(user_repo.clone(), verifier);
        let users = UsersService::new(
            user_repo,
            vehicle_repo.clone(),
            authz,
            config.deletion_policy,
        );
        let vehicles = VehiclesService::new(vehicle_repo, authz);
        let parts = PartsService::new(part_repo, authz);
        let theme = ThemeService::new(theme_store, authz);
        let router = RoleRouter::new(vehicles.clone());

        Self {
            config,
            session,
            users,
            vehicles,
            parts,
            theme,
            router,
        }
    }

    /// Estado vacío (colecciones sin sembrar), útil para tests
    pub fn empty(config: EnvironmentConfig, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self::new(config, SeedData::default(), verifier)
    }
}

//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación. Los
//! servicios de entidades son la frontera de acceso a datos: cada
//! operación recibe al principal y verifica sus capacidades.

pub mod authorization_service;
pub mod parts_service;
pub mod session_service;
pub mod summary_service;
pub mod theme_service;
pub mod users_service;
pub mod vehicles_service;

pub use authorization_service::{AccessLevel, AuthorizationService};
pub use parts_service::PartsService;
pub use session_service::{
    BcryptVerifier, CredentialVerifier, DerivedPasswordVerifier, SessionService,
};
pub use summary_service::{
    summary_generator_from_config, HttpSummaryGenerator, OfflineSummaryGenerator,
    SummaryGenerator, SUMMARY_UNAVAILABLE,
};
pub use theme_service::ThemeService;
pub use users_service::UsersService;
pub use vehicles_service::VehiclesService;

//! Taller Pro: núcleo de sesión, autorización y estado del taller
//!
//! La fuente de verdad son las colecciones en memoria del entity store;
//! toda lectura y mutación pasa por servicios que verifican las
//! capacidades del principal. El router de roles decide qué panel y qué
//! recorte de datos ve cada sesión.

pub mod config;
pub mod devices;
pub mod models;
pub mod router;
pub mod seed;
pub mod services;
pub mod state;
pub mod storage;
pub mod store;
pub mod utils;

pub use state::AppState;
pub use utils::errors::{AppError, AppResult};

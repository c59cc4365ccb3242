//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos del taller junto con
//! sus requests de creación/actualización validados.

pub mod part;
pub mod theme;
pub mod user;
pub mod vehicle;

pub use part::*;
pub use theme::*;
pub use user::*;
pub use vehicle::*;

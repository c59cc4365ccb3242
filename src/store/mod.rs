//! Entity store: las colecciones en memoria del sistema
//!
//! Cada repositorio es la fuente de verdad de su colección. Las
//! mutaciones se aplican en el orden en que llegan (un solo escritor
//! lógico, lecturas consistentes tras cada escritura).

pub mod part_repository;
pub mod user_repository;
pub mod vehicle_repository;

pub use part_repository::PartRepository;
pub use user_repository::UserRepository;
pub use vehicle_repository::VehicleRepository;

//! Almacenamiento clave/valor local
//!
//! El equivalente al almacenamiento local del navegador: slots
//! clave/valor durables, hoy usados solo por el tema.

pub mod kv;
pub mod theme_store;

pub use kv::{FileSlot, KeyValueSlot, MemorySlot};
pub use theme_store::{ThemeStore, THEME_KEY};

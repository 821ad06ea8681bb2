//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno y la configuración
//! por recurso (centinelas de lista vacía).

pub mod environment;
pub mod resources;

pub use environment::*;
pub use resources::ResourceConfig;

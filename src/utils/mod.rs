//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! de formularios y construcción de query strings.

pub mod errors;
pub mod query;
pub mod validation;

pub use errors::*;
pub use query::QueryParams;

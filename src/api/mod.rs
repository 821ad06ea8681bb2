//! Módulos de acceso a recursos
//!
//! Una función por operación de dominio, cada una mapeada a un único
//! endpoint. No validan ni capturan errores: eso es de los controladores.

pub mod auth;
pub mod geography;
pub mod trucks;
pub mod users;
pub mod warehouses;

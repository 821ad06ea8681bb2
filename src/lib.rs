//! TransFlow: consola de administración logística
//!
//! Cliente del API remoto de camiones, depósitos y personal. Sesión
//! persistida, controladores de pantalla y una consola de terminal.

pub mod api;
pub mod cli;
pub mod clients;
pub mod config;
pub mod controllers;
pub mod models;
pub mod navigation;
pub mod routes;
pub mod session;
pub mod state;
pub mod utils;

pub use state::AppContext;

//! Sesión del usuario
//!
//! Contexto de sesión explícito: se crea al arrancar y se inyecta en el
//! cliente HTTP y en cada controlador.

pub mod session_store;
pub mod storage;

pub use session_store::SessionStore;
pub use storage::{FileStorage, MemoryStorage, SessionStorage};

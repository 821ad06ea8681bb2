//! Estado de sesión
//!
//! Token de autenticación + perfil del usuario, persistidos en dos claves
//! (`token`, `user`). El token se considera válido hasta que una petición
//! que lo usa falla; no se controla expiración del lado cliente.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use super::storage::SessionStorage;
use crate::utils::errors::{AppError, AppResult};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    /// Inicializar el contexto de sesión leyendo lo que haya persistido
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        let store = Self { storage };
        if store.is_authenticated() {
            info!("🔑 Sesión persistida encontrada");
        }
        store
    }

    pub fn set_session(&self, token: &str, user: &Value) -> AppResult<()> {
        let user_raw = serde_json::to_string(user).map_err(|e| AppError::Storage(e.to_string()))?;
        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(USER_KEY, &user_raw)?;
        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Perfil del usuario; un blob corrupto se trata como ausente
    pub fn user(&self) -> Option<Value> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("⚠️ Perfil de usuario persistido ilegible: {}", e);
                None
            }
        }
    }

    /// Nombre a mostrar en la barra de navegación
    pub fn username(&self) -> Option<String> {
        self.user()?
            .get("username")
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Borra token y usuario juntos
    pub fn clear(&self) -> AppResult<()> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(USER_KEY)?;
        Ok(())
    }
}

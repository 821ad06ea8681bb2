//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno: origen del backend,
//! archivo de sesión y políticas del cliente.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::utils::errors::{config_error, AppResult};

pub const DEFAULT_API_BASE_URL: &str = "http://lasttik.com";
pub const DEFAULT_SESSION_FILE: &str = ".transflow/session.json";
pub const DEFAULT_USERS_PAGE_LIMIT: u32 = 10;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    /// Origen único del backend, sin `/` final
    pub api_base_url: String,
    pub session_file: PathBuf,
    pub users_page_limit: u32,
    pub log_level: tracing::Level,
    pub clear_session_on_unauthorized: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "production".to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            users_page_limit: DEFAULT_USERS_PAGE_LIMIT,
            log_level: tracing::Level::INFO,
            clear_session_on_unauthorized: true,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde el entorno (tras `dotenvy::dotenv()`)
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            api_base_url: env::var("API_BASE_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            session_file: env::var("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_file),
            users_page_limit: parse_var("USERS_PAGE_LIMIT", defaults.users_page_limit)?,
            log_level: parse_var("LOG_LEVEL", defaults.log_level)?,
            clear_session_on_unauthorized: parse_var(
                "CLEAR_SESSION_ON_UNAUTHORIZED",
                defaults.clear_session_on_unauthorized,
            )?,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// En desarrollo las respuestas mal formadas se muestran como error
    pub fn strict_schemas(&self) -> bool {
        self.is_development()
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| config_error(name, &format!("invalid value '{}'", raw))),
        _ => Ok(default),
    }
}

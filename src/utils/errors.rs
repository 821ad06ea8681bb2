//! Sistema de manejo de errores
//!
//! Este módulo define los errores del cliente HTTP (`ApiError`) y los
//! errores de la aplicación (`AppError`) que ven los controladores.

use thiserror::Error;

/// Errores de la capa de acceso a la API remota
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Respuesta con status fuera de 200-299. El mensaje ya viene resuelto
    /// (`message`, `error` o uno sintetizado con el status).
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response from {path}: {reason}")]
    Decode { path: String, reason: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Status HTTP si el servidor llegó a responder
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::Decode { .. })
    }

    /// Mensaje del servidor, solo para fallos estructurados
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Resultado tipado para llamadas a la API
pub type ApiResult<T> = Result<T, ApiError>;

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de configuración
pub fn config_error(variable: &str, reason: &str) -> AppError {
    AppError::Config(format!("{}: {}", variable, reason))
}

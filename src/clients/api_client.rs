//! Cliente HTTP para la API de TransFlow
//!
//! Una sola función de petición contra un origen fijo: agrega
//! `Content-Type: application/json`, el bearer token de la sesión si existe,
//! y normaliza los fallos a `ApiError`.

use std::sync::Arc;

use http::header::{HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::transport::{HttpRequest, HttpTransport};
use crate::config::EnvironmentConfig;
use crate::models::Ack;
use crate::session::SessionStore;
use crate::utils::errors::{ApiError, ApiResult};

/// Opciones de una petición: método, headers extra y body JSON
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self::with_method(Method::POST)
    }

    pub fn put() -> Self {
        Self::with_method(Method::PUT)
    }

    pub fn delete() -> Self {
        Self::with_method(Method::DELETE)
    }

    fn with_method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Serializar el payload de dominio como body JSON
    pub fn json<T: Serialize>(mut self, payload: &T) -> ApiResult<Self> {
        let body = serde_json::to_value(payload)
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        self.body = Some(body);
        Ok(self)
    }
}

pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    session: Arc<SessionStore>,
    clear_session_on_unauthorized: bool,
    strict_schemas: bool,
}

impl ApiClient {
    pub fn new(
        config: &EnvironmentConfig,
        session: Arc<SessionStore>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            transport,
            session,
            clear_session_on_unauthorized: config.clear_session_on_unauthorized,
            strict_schemas: config.strict_schemas(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Ejecutar una petición y devolver el body parseado.
    ///
    /// Un body que no es JSON se trata como `Value::Null`. Un status fuera de
    /// 200-299 es siempre un `ApiError::Server`.
    pub async fn request(&self, path: &str, options: RequestOptions) -> ApiResult<Value> {
        if !path.starts_with('/') {
            return Err(ApiError::InvalidRequest(format!(
                "path must be root-relative: '{}'",
                path
            )));
        }

        let token = self.session.token();
        let headers = build_headers(token.as_deref(), &options.headers)?;

        debug!("➡️ {} {}", options.method, path);

        let response = self
            .transport
            .send(HttpRequest {
                method: options.method,
                url: format!("{}{}", self.base_url, path),
                headers,
                body: options.body.map(|body| body.to_string()),
            })
            .await?;

        let data: Value = serde_json::from_str(&response.body).unwrap_or(Value::Null);

        if !(200..300).contains(&response.status) {
            if response.status == 401 && token.is_some() && self.clear_session_on_unauthorized {
                if let Err(e) = self.session.clear() {
                    warn!("⚠️ No se pudo limpiar la sesión tras 401: {}", e);
                }
            }
            return Err(ApiError::Server {
                status: response.status,
                message: error_message(&data, response.status),
            });
        }

        Ok(data)
    }

    /// Igual que `request`, decodificando la respuesta al schema del endpoint
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        let data = self.request(path, options).await?;
        serde_json::from_value(data).map_err(|e| ApiError::Decode {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// Para mutaciones: un body vacío o ilegible es un `Ack` por defecto.
    /// Fuera de modo estricto un body con otra forma tampoco tumba una
    /// mutación que el backend ya aceptó.
    pub async fn request_ack(&self, path: &str, options: RequestOptions) -> ApiResult<Ack> {
        match self.request_as::<Option<Ack>>(path, options).await {
            Ok(ack) => Ok(ack.unwrap_or_default()),
            Err(ApiError::Decode { path, reason }) if !self.strict_schemas => {
                warn!("⚠️ Respuesta de {} ignorada: {}", path, reason);
                Ok(Ack::default())
            }
            Err(e) => Err(e),
        }
    }
}

/// Headers por defecto + los del llamador encima (mismo nombre reemplaza)
fn build_headers(token: Option<&str>, extra: &[(String, String)]) -> ApiResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(token) = token {
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        headers.insert(AUTHORIZATION, value);
    }

    for (name, value) in extra {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        let value =
            HeaderValue::from_str(value).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        headers.insert(name, value);
    }

    Ok(headers)
}

/// Mensaje de error en orden de prioridad: `message`, `error`, o uno
/// sintetizado con el status.
pub fn error_message(data: &Value, status: u16) -> String {
    ["message", "error"]
        .iter()
        .filter_map(|key| data.get(*key).and_then(Value::as_str))
        .find(|message| !message.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("API error (status: {})", status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message_priority() {
        let both = json!({ "message": "kayit yok", "error": "NOT_FOUND" });
        assert_eq!(error_message(&both, 404), "kayit yok");

        let only_error = json!({ "error": "Yetkisiz" });
        assert_eq!(error_message(&only_error, 401), "Yetkisiz");

        let empty_message = json!({ "message": "", "error": "boom" });
        assert_eq!(error_message(&empty_message, 500), "boom");

        assert_eq!(error_message(&Value::Null, 502), "API error (status: 502)");
        assert_eq!(
            error_message(&json!({ "message": 12 }), 400),
            "API error (status: 400)"
        );
    }

    #[test]
    fn test_caller_headers_override_defaults() {
        let extra = vec![("content-type".to_string(), "text/plain".to_string())];
        let headers = build_headers(Some("tok"), &extra).unwrap();

        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer tok");
    }

    #[test]
    fn test_no_token_no_authorization_header() {
        let headers = build_headers(None, &[]).unwrap();
        assert!(headers.get(AUTHORIZATION).is_none());
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }
}

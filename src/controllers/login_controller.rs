//! Pantalla de login y landing

use std::sync::Arc;

use tracing::info;

use crate::api::auth;
use crate::clients::ApiClient;
use crate::routes::Route;
use crate::session::SessionStore;
use crate::utils::validation::is_blank;

pub const LOGIN_FAILED: &str = "Login failed";
pub const CREDENTIALS_REQUIRED: &str = "Username and password are required.";

pub struct LoginController {
    client: Arc<ApiClient>,
    pub identifier: String,
    pub password: String,
    loading: bool,
    error: Option<String>,
}

impl LoginController {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            identifier: String::new(),
            password: String::new(),
            loading: false,
            error: None,
        }
    }

    /// Enviar credenciales. En éxito persiste la sesión y devuelve la ruta
    /// del dashboard; en fallo deja el mensaje en `error()`.
    pub async fn submit(&mut self) -> Option<Route> {
        self.error = None;
        if is_blank(&self.identifier) || is_blank(&self.password) {
            self.error = Some(CREDENTIALS_REQUIRED.to_string());
            return None;
        }

        self.loading = true;
        let result = auth::login(&self.client, self.identifier.trim(), &self.password).await;
        self.loading = false;

        match result {
            Ok(response) => {
                if let Err(e) = self.client.session().set_session(&response.token, &response.user) {
                    self.error = Some(e.to_string());
                    return None;
                }
                info!("🔐 Sesión iniciada para {}", self.identifier.trim());
                self.password.clear();
                Some(Route::Dashboard)
            }
            Err(e) => {
                let message = e.to_string();
                self.error = Some(if message.is_empty() {
                    LOGIN_FAILED.to_string()
                } else {
                    message
                });
                None
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Portada: el botón principal lleva al dashboard si ya hay sesión
pub struct LandingController {
    session: Arc<SessionStore>,
}

impl LandingController {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }

    pub fn cta_target(&self) -> Route {
        if self.session.is_authenticated() {
            Route::Dashboard
        } else {
            Route::Login
        }
    }
}

//! Contexto compartido de la aplicación
//!
//! Se construye una vez al arrancar y se pasa a cada controlador. Sustituye
//! cualquier estado global: sesión, cliente HTTP y diálogos se inyectan.

use std::sync::Arc;

use crate::clients::{ApiClient, HttpTransport, ReqwestTransport};
use crate::config::EnvironmentConfig;
use crate::controllers::{
    DashboardController, LandingController, LoginController, Prompt, TruckController,
    UserController, WarehouseController,
};
use crate::navigation::Navbar;
use crate::session::{FileStorage, SessionStorage, SessionStore};
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct AppContext {
    pub config: EnvironmentConfig,
    pub session: Arc<SessionStore>,
    pub client: Arc<ApiClient>,
    pub prompt: Arc<dyn Prompt>,
}

impl AppContext {
    pub fn new(
        config: EnvironmentConfig,
        storage: Arc<dyn SessionStorage>,
        transport: Arc<dyn HttpTransport>,
        prompt: Arc<dyn Prompt>,
    ) -> Self {
        let session = Arc::new(SessionStore::new(storage));
        let client = Arc::new(ApiClient::new(&config, session.clone(), transport));
        Self {
            config,
            session,
            client,
            prompt,
        }
    }

    /// Contexto real: sesión en archivo y transporte `reqwest`
    pub fn from_config(config: EnvironmentConfig, prompt: Arc<dyn Prompt>) -> AppResult<Self> {
        let storage = Arc::new(FileStorage::open(&config.session_file)?);
        let transport = Arc::new(ReqwestTransport::new()?);
        Ok(Self::new(config, storage, transport, prompt))
    }

    pub fn navbar(&self) -> Navbar {
        Navbar::new(self.client.clone())
    }

    pub fn landing(&self) -> LandingController {
        LandingController::new(self.session.clone())
    }

    pub fn login(&self) -> LoginController {
        LoginController::new(self.client.clone())
    }

    pub fn dashboard(&self) -> DashboardController {
        DashboardController::new(self.client.clone())
    }

    pub fn trucks(&self) -> TruckController {
        TruckController::new(
            self.client.clone(),
            self.prompt.clone(),
            self.config.strict_schemas(),
        )
    }

    pub fn warehouses(&self) -> WarehouseController {
        WarehouseController::new(
            self.client.clone(),
            self.prompt.clone(),
            self.config.strict_schemas(),
        )
    }

    pub fn users(&self) -> UserController {
        UserController::new(
            self.client.clone(),
            self.prompt.clone(),
            self.config.strict_schemas(),
            self.config.users_page_limit,
        )
    }
}

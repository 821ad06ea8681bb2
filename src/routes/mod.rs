//! Tabla de rutas de la consola
//!
//! Los controladores devuelven un `Route` en vez de navegar ellos mismos.

use crate::session::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Dashboard,
    Trucks,
    Warehouses,
    UserManagement,
    Profile,
    Employees,
    NotFound,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Trucks => "/trucks",
            Route::Warehouses => "/warehouse",
            Route::UserManagement => "/userManagement",
            Route::Profile => "/profile",
            Route::Employees => "/employees",
            Route::NotFound => "/404",
        }
    }

    pub fn from_path(path: &str) -> Self {
        let path = path.split('?').next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "" => Route::Landing,
            "/login" => Route::Login,
            "/dashboard" => Route::Dashboard,
            "/trucks" => Route::Trucks,
            "/warehouse" => Route::Warehouses,
            "/userManagement" => Route::UserManagement,
            "/profile" => Route::Profile,
            "/employees" => Route::Employees,
            _ => Route::NotFound,
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Landing | Route::Login | Route::NotFound)
    }

    /// Sin sesión, las rutas autenticadas llevan al login
    pub fn guard(self, session: &SessionStore) -> Self {
        if self.requires_auth() && !session.is_authenticated() {
            Route::Login
        } else {
            self
        }
    }
}

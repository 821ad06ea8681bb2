//! Controladores de página
//!
//! Cada controlador es dueño del estado local de su pantalla (formularios,
//! filtros, paginación, modal) y orquesta las llamadas a `api::*`.

pub mod cascade;
pub mod dashboard_controller;
pub mod login_controller;
pub mod modal;
pub mod prompt;
pub mod resource_list;
pub mod truck_controller;
pub mod user_controller;
pub mod warehouse_controller;

pub use cascade::CountryCityCascade;
pub use dashboard_controller::{DashboardController, DashboardStats, QuickAction};
pub use login_controller::{LandingController, LoginController};
pub use modal::Modal;
pub use prompt::Prompt;
pub use resource_list::{FetchOutcome, FetchTicket, ListPhase, Pagination, ResourceList};
pub use truck_controller::{TruckController, TruckForm, TruckFormKind};
pub use user_controller::{UserController, UserForm};
pub use warehouse_controller::{WarehouseController, WarehouseFilters, WarehouseForm, WarehouseKey};

//! Modelos del sistema
//!
//! Este módulo contiene los schemas de request/response de cada endpoint,
//! con los nombres de campo exactos del backend.

pub mod auth;
pub mod geography;
pub mod page;
pub mod truck;
pub mod user;
pub mod warehouse;

pub use auth::{Ack, LoginRequest, LoginResponse};
pub use geography::{City, Country};
pub use page::{Listing, Page};
pub use truck::{NewTruck, NewTruckInfo, Truck, TruckInfo, TruckInfoChanges};
pub use user::{NewUser, Permission, User};
pub use warehouse::{NewWarehouse, Warehouse, WarehouseChanges, WarehouseQuery};

//! Barra de navegación compartida por las pantallas autenticadas

pub mod navbar;

pub use navbar::{MenuItem, MenuItemKind, Navbar, Point, Rect};

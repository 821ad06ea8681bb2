//! Navbar con menú desplegable de perfil
//!
//! Un único estado: desplegable abierto o cerrado. Se cierra al elegir un
//! ítem, con un pointer-down fuera de su región, o al hacer logout.

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::auth;
use crate::clients::ApiClient;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Región rectangular en coordenadas de pantalla
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItemKind {
    Navigate(Route),
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub kind: MenuItemKind,
    /// Ítems peligrosos se pintan en rojo
    pub danger: bool,
}

pub const BRAND_TARGET: Route = Route::Landing;

pub const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem {
        label: "Dashboard",
        kind: MenuItemKind::Navigate(Route::Dashboard),
        danger: false,
    },
    MenuItem {
        label: "Trucks",
        kind: MenuItemKind::Navigate(Route::Trucks),
        danger: false,
    },
    MenuItem {
        label: "Warehouses",
        kind: MenuItemKind::Navigate(Route::Warehouses),
        danger: false,
    },
    MenuItem {
        label: "Staff",
        kind: MenuItemKind::Navigate(Route::UserManagement),
        danger: false,
    },
];

pub const PROFILE_ITEMS: [MenuItem; 3] = [
    MenuItem {
        label: "Profile",
        kind: MenuItemKind::Navigate(Route::Profile),
        danger: false,
    },
    MenuItem {
        label: "Employees",
        kind: MenuItemKind::Navigate(Route::Employees),
        danger: false,
    },
    MenuItem {
        label: "Logout",
        kind: MenuItemKind::Logout,
        danger: true,
    },
];

impl MenuItem {
    /// Tecla de atajo: inicial del rótulo en minúscula
    pub fn shortcut(&self) -> char {
        self.label
            .chars()
            .next()
            .map(|c| c.to_ascii_lowercase())
            .unwrap_or(' ')
    }
}

pub struct Navbar {
    client: Arc<ApiClient>,
    open: bool,
    dropdown_region: Rect,
}

impl Navbar {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            open: false,
            dropdown_region: Rect::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Nombre a mostrar junto al avatar
    pub fn username(&self) -> Option<String> {
        self.client.session().username()
    }

    pub fn menu_items(&self) -> &'static [MenuItem] {
        &MENU_ITEMS
    }

    pub fn profile_items(&self) -> &'static [MenuItem] {
        &PROFILE_ITEMS
    }

    /// Región ocupada por el desplegable (trigger incluido), la fija la vista
    pub fn set_dropdown_region(&mut self, region: Rect) {
        self.dropdown_region = region;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Pointer-down en cualquier punto de la pantalla
    pub fn on_pointer_down(&mut self, point: Point) {
        if self.open && !self.dropdown_region.contains(point) {
            self.open = false;
        }
    }

    /// Click en la marca: vuelve a la portada
    pub fn select_brand(&mut self) -> Route {
        self.open = false;
        BRAND_TARGET
    }

    /// Elegir un ítem de navegación. El logout va por `logout()`.
    pub fn select_item(&mut self, item: &MenuItem) -> Option<Route> {
        match item.kind {
            MenuItemKind::Navigate(route) => {
                self.open = false;
                Some(route)
            }
            MenuItemKind::Logout => None,
        }
    }

    /// Logout: la llamada remota es best-effort, la limpieza local siempre ocurre
    pub async fn logout(&mut self) -> Route {
        if let Err(e) = auth::logout(&self.client).await {
            warn!("⚠️ Logout remoto falló: {}", e);
        }
        if let Err(e) = self.client.session().clear() {
            warn!("⚠️ No se pudo limpiar la sesión: {}", e);
        }
        self.open = false;
        info!("👋 Sesión cerrada");
        Route::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(rect.contains(Point { x: 10.0, y: 10.0 }));
        assert!(rect.contains(Point { x: 110.0, y: 60.0 }));
        assert!(!rect.contains(Point { x: 9.9, y: 30.0 }));
        assert!(!rect.contains(Point { x: 50.0, y: 61.0 }));
    }

    #[test]
    fn test_shortcuts_are_unique() {
        let mut keys: Vec<char> = MENU_ITEMS
            .iter()
            .chain(PROFILE_ITEMS.iter())
            .map(MenuItem::shortcut)
            .collect();
        let count = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), count);
    }

    #[test]
    fn test_brand_leads_to_landing() {
        assert_eq!(BRAND_TARGET, Route::Landing);
        assert!(MENU_ITEMS
            .iter()
            .all(|item| item.kind != MenuItemKind::Navigate(BRAND_TARGET)));
    }

    #[test]
    fn test_profile_items_end_with_logout() {
        let last = PROFILE_ITEMS[PROFILE_ITEMS.len() - 1];
        assert_eq!(last.kind, MenuItemKind::Logout);
        assert!(last.danger);
    }
}

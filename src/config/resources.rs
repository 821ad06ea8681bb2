//! Configuración por recurso
//!
//! El backend responde con un error cuyo mensaje significa "lista vacía"
//! en vez de devolver una lista vacía. Cada recurso declara aquí ese texto.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceConfig {
    pub name: &'static str,
    pub empty_sentinel: Option<&'static str>,
}

impl ResourceConfig {
    pub fn is_empty_sentinel(&self, message: &str) -> bool {
        self.empty_sentinel == Some(message)
    }
}

pub const TRUCKS: ResourceConfig = ResourceConfig {
    name: "trucks",
    empty_sentinel: None,
};

pub const TRUCK_INFOS: ResourceConfig = ResourceConfig {
    name: "truck-infos",
    empty_sentinel: Some("Hicbir tır kaydi bulunamadi."),
};

pub const WAREHOUSES: ResourceConfig = ResourceConfig {
    name: "warehouses",
    empty_sentinel: Some("Hicbir depo kaydi bulunamadi."),
};

pub const USERS: ResourceConfig = ResourceConfig {
    name: "users",
    empty_sentinel: Some("Hicbir kullanici kaydi bulunamadi."),
};

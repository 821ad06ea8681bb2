//! Dashboard: estadísticas agregadas y últimos registros
//!
//! Las cuatro colecciones se piden en paralelo. Cada fallo deja su
//! colección vacía sin afectar a las demás.

use std::sync::Arc;

use tracing::warn;

use crate::api::{trucks, users, warehouses};
use crate::clients::ApiClient;
use crate::models::{Page, TruckInfo, User, Warehouse, WarehouseQuery};
use crate::routes::Route;
use crate::utils::errors::ApiResult;

pub const RECENT_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub trucks: u64,
    pub truck_infos: u64,
    pub warehouses: u64,
    pub users: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecentItems {
    pub truck_infos: Vec<TruckInfo>,
    pub warehouses: Vec<Warehouse>,
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub route: Route,
}

pub const QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        title: "Truck management",
        description: "Manage trucks and their registrations",
        route: Route::Trucks,
    },
    QuickAction {
        title: "Warehouse management",
        description: "Browse and edit warehouses",
        route: Route::Warehouses,
    },
    QuickAction {
        title: "Staff management",
        description: "Manage user accounts",
        route: Route::UserManagement,
    },
];

pub struct DashboardController {
    client: Arc<ApiClient>,
    loading: bool,
    stats: DashboardStats,
    recent: RecentItems,
}

impl DashboardController {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            loading: true,
            stats: DashboardStats::default(),
            recent: RecentItems::default(),
        }
    }

    pub async fn load(&mut self) {
        self.loading = true;

        let warehouse_query = WarehouseQuery {
            page_no: Some(1),
            ..WarehouseQuery::default()
        };
        let (truck_list, info_list, warehouse_page, user_page) = tokio::join!(
            trucks::list_trucks(&self.client),
            trucks::list_truck_info(&self.client),
            warehouses::get_warehouses(&self.client, &warehouse_query),
            users::get_users(&self.client, Some(1), None),
        );

        let truck_list = or_default("trucks", truck_list);
        let info_list = or_default("truck-infos", info_list);
        let warehouse_page = or_default("warehouses", warehouse_page.map(Some));
        let user_page = or_default("users", user_page.map(Some));

        self.stats = DashboardStats {
            trucks: truck_list.len() as u64,
            truck_infos: info_list.len() as u64,
            warehouses: page_count(warehouse_page.as_ref()),
            users: page_count(user_page.as_ref()),
        };

        self.recent = RecentItems {
            truck_infos: info_list.into_iter().take(RECENT_LIMIT).collect(),
            warehouses: warehouse_page
                .map(|page| page.data.into_iter().take(RECENT_LIMIT).collect())
                .unwrap_or_default(),
            users: user_page
                .map(|page| page.data.into_iter().take(RECENT_LIMIT).collect())
                .unwrap_or_default(),
        };

        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn stats(&self) -> DashboardStats {
        self.stats
    }

    pub fn recent(&self) -> &RecentItems {
        &self.recent
    }

    pub fn quick_actions(&self) -> &'static [QuickAction] {
        &QUICK_ACTIONS
    }
}

fn or_default<T: Default>(name: &str, result: ApiResult<T>) -> T {
    result.unwrap_or_else(|e| {
        warn!("⚠️ Dashboard: {} no disponible: {}", name, e);
        T::default()
    })
}

/// `total` del sobre si no es cero, si no el largo de la página
fn page_count<T>(page: Option<&Page<T>>) -> u64 {
    match page {
        Some(page) if page.total > 0 => page.total,
        Some(page) => page.data.len() as u64,
        None => 0,
    }
}

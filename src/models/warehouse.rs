//! Modelos de depósitos

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    #[serde(rename = "warehouseID")]
    pub warehouse_id: u64,
    #[serde(default)]
    pub warehouse_name: Option<String>,
    #[serde(default)]
    pub warehouse_address: Option<String>,
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
}

/// Filtros y página de `/getWH`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarehouseQuery {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub page_no: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWarehouse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_name: Option<String>,
    #[serde(rename = "warehouseCityID")]
    pub warehouse_city_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_name: Option<String>,
    #[serde(rename = "warehouseCityID", skip_serializing_if = "Option::is_none")]
    pub warehouse_city_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_address: Option<String>,
}

impl From<NewWarehouse> for WarehouseChanges {
    fn from(payload: NewWarehouse) -> Self {
        Self {
            warehouse_name: payload.warehouse_name,
            warehouse_city_id: Some(payload.warehouse_city_id),
            warehouse_address: payload.warehouse_address,
        }
    }
}

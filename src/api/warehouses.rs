//! Endpoints de depósitos

use crate::clients::{ApiClient, RequestOptions};
use crate::models::{Ack, NewWarehouse, Page, Warehouse, WarehouseChanges, WarehouseQuery};
use crate::utils::errors::ApiResult;
use crate::utils::QueryParams;

/// Ruta de `/getWH` con solo los filtros definidos
pub fn warehouses_path(query: &WarehouseQuery) -> String {
    QueryParams::new()
        .push("id", query.id)
        .push("name", query.name.as_deref())
        .push("pageNo", query.page_no)
        .with_path("/getWH")
}

/// GET /getWH?id=&name=&pageNo=
pub async fn get_warehouses(client: &ApiClient, query: &WarehouseQuery) -> ApiResult<Page<Warehouse>> {
    client
        .request_as(&warehouses_path(query), RequestOptions::get())
        .await
}

/// POST /addWH → `{ message, id }`
pub async fn add_warehouse(client: &ApiClient, payload: &NewWarehouse) -> ApiResult<Ack> {
    client
        .request_ack("/addWH", RequestOptions::post().json(payload)?)
        .await
}

/// PUT /editWH?id=
pub async fn edit_warehouse(
    client: &ApiClient,
    warehouse_id: u64,
    changes: &WarehouseChanges,
) -> ApiResult<Ack> {
    let path = QueryParams::new()
        .push("id", Some(warehouse_id))
        .with_path("/editWH");
    client
        .request_ack(&path, RequestOptions::put().json(changes)?)
        .await
}

/// DELETE /deleteWH?id=
pub async fn delete_warehouse(client: &ApiClient, warehouse_id: u64) -> ApiResult<Ack> {
    let path = QueryParams::new()
        .push("id", Some(warehouse_id))
        .with_path("/deleteWH");
    client.request_ack(&path, RequestOptions::delete()).await
}

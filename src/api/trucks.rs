//! Endpoints de camiones
//!
//! Estos dos listados devuelven arrays planos, no páginas.

use crate::clients::{ApiClient, RequestOptions};
use crate::models::{Ack, NewTruck, NewTruckInfo, Truck, TruckInfo, TruckInfoChanges};
use crate::utils::errors::ApiResult;
use crate::utils::QueryParams;

/// GET /listTrucks
pub async fn list_trucks(client: &ApiClient) -> ApiResult<Vec<Truck>> {
    client.request_as("/listTrucks", RequestOptions::get()).await
}

/// GET /listTruckInfo
pub async fn list_truck_info(client: &ApiClient) -> ApiResult<Vec<TruckInfo>> {
    client.request_as("/listTruckInfo", RequestOptions::get()).await
}

/// POST /addTruck
pub async fn add_truck(client: &ApiClient, payload: &NewTruck) -> ApiResult<Ack> {
    client
        .request_ack("/addTruck", RequestOptions::post().json(payload)?)
        .await
}

/// POST /addTruckInfo
pub async fn add_truck_info(client: &ApiClient, payload: &NewTruckInfo) -> ApiResult<Ack> {
    client
        .request_ack("/addTruckInfo", RequestOptions::post().json(payload)?)
        .await
}

/// PUT /editTruckInfo?id=
pub async fn edit_truck_info(
    client: &ApiClient,
    truck_info_id: u64,
    changes: &TruckInfoChanges,
) -> ApiResult<Ack> {
    let path = QueryParams::new()
        .push("id", Some(truck_info_id))
        .with_path("/editTruckInfo");
    client
        .request_ack(&path, RequestOptions::put().json(changes)?)
        .await
}

/// DELETE /removeTruckInfo?id=
pub async fn delete_truck_info(client: &ApiClient, truck_info_id: u64) -> ApiResult<Ack> {
    let path = QueryParams::new()
        .push("id", Some(truck_info_id))
        .with_path("/removeTruckInfo");
    client.request_ack(&path, RequestOptions::delete()).await
}

/// DELETE /removeTruck?id=
pub async fn delete_truck(client: &ApiClient, truck_id: u64) -> ApiResult<Ack> {
    let path = QueryParams::new()
        .push("id", Some(truck_id))
        .with_path("/removeTruck");
    client.request_ack(&path, RequestOptions::delete()).await
}

//! Consultas de geografía (países y ciudades), solo lectura

use crate::clients::{ApiClient, RequestOptions};
use crate::models::{City, Country};
use crate::utils::errors::ApiResult;
use crate::utils::QueryParams;

/// GET /getCountries
pub async fn get_countries(client: &ApiClient) -> ApiResult<Vec<Country>> {
    client.request_as("/getCountries", RequestOptions::get()).await
}

/// GET /getCities?countryID=
pub async fn get_cities(client: &ApiClient, country_id: u64) -> ApiResult<Vec<City>> {
    let path = QueryParams::new()
        .push("countryID", Some(country_id))
        .with_path("/getCities");
    client.request_as(&path, RequestOptions::get()).await
}

//! Tablas de consulta para los selectores país → ciudad

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(rename = "countryID")]
    pub country_id: u64,
    #[serde(rename = "countryName")]
    pub country_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(rename = "cityID")]
    pub city_id: u64,
    #[serde(rename = "cityName")]
    pub city_name: String,
    #[serde(rename = "countryID")]
    pub country_id: u64,
}

//! Modelos de camiones y sus registros (matrícula)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Truck {
    #[serde(rename = "truckID")]
    pub truck_id: u64,
    pub truck_brand: String,
    pub truck_model: String,
}

impl Truck {
    /// Etiqueta para selectores: `ID: 3 - Volvo FH16`
    pub fn label(&self) -> String {
        format!("ID: {} - {} {}", self.truck_id, self.truck_brand, self.truck_model)
    }
}

/// Registro de matrícula sobre un `Truck`. Marca y modelo vienen
/// desnormalizados solo para mostrar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruckInfo {
    #[serde(rename = "truckInfoID", default)]
    pub truck_info_id: Option<u64>,
    #[serde(rename = "truckID")]
    pub truck_id: u64,
    pub plate: String,
    #[serde(default)]
    pub truck_brand: Option<String>,
    #[serde(default)]
    pub truck_model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTruck {
    pub truck_brand: String,
    pub truck_model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTruckInfo {
    #[serde(rename = "truckID")]
    pub truck_id: u64,
    pub plate: String,
}

/// Edición parcial: los campos `None` no se envían
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TruckInfoChanges {
    #[serde(rename = "truckID", skip_serializing_if = "Option::is_none")]
    pub truck_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plate: Option<String>,
}

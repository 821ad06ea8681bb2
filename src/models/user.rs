//! Modelos de usuarios (personal)

use serde::{Deserialize, Serialize};

/// Nivel de acceso: 1 = admin, 2 = estándar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Permission {
    Admin,
    #[default]
    Standard,
}

impl From<Permission> for u8 {
    fn from(permission: Permission) -> Self {
        match permission {
            Permission::Admin => 1,
            Permission::Standard => 2,
        }
    }
}

impl TryFrom<u8> for Permission {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Permission::Admin),
            2 => Ok(Permission::Standard),
            other => Err(format!("unknown permission level {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "userID")]
    pub user_id: u64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub tel: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(rename = "cityID", default)]
    pub city_id: Option<u64>,
    #[serde(rename = "warehouseID", default)]
    pub warehouse_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub permission: Permission,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tel: Option<String>,
    #[serde(rename = "cityID", skip_serializing_if = "Option::is_none")]
    pub city_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    #[serde(rename = "warehouseID", skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_permission_is_numeric_on_the_wire() {
        assert_eq!(serde_json::to_value(Permission::Admin).unwrap(), json!(1));
        assert_eq!(
            serde_json::from_value::<Permission>(json!(2)).unwrap(),
            Permission::Standard
        );
        assert!(serde_json::from_value::<Permission>(json!(7)).is_err());
    }
}

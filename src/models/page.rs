//! Sobres de listado
//!
//! Los endpoints de depósitos y usuarios devuelven una página
//! (`{ data, total, page, limit, totalPages }`); los de camiones devuelven
//! un array plano. `Listing` es la forma común que consumen los controladores.

use serde::{Deserialize, Serialize};

/// Página tal como la envía el backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub data: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total_pages: u32,
}

/// Resultado de un fetch de listado, paginado o no
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub rows: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> Listing<T> {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
            page: 1,
            limit: 0,
            total_pages: 1,
        }
    }

    /// Array plano: una sola página con todo
    pub fn unpaged(rows: Vec<T>) -> Self {
        let total = rows.len() as u64;
        Self {
            limit: rows.len() as u32,
            rows,
            total,
            page: 1,
            total_pages: 1,
        }
    }
}

impl<T> From<Page<T>> for Listing<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            rows: page.data,
            total: page.total,
            page: page.page.max(1),
            limit: page.limit,
            total_pages: page.total_pages.max(1),
        }
    }
}

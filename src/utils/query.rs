//! Construcción de query strings
//!
//! Un parámetro sin valor, o cuyo valor queda vacío tras `trim`, no se
//! envía: nunca aparece como `clave=`.

use std::fmt::Display;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agregar un parámetro si tiene valor no vacío
    pub fn push<V: Display>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            let rendered = value.to_string();
            let trimmed = rendered.trim();
            if !trimmed.is_empty() {
                self.pairs.push((key.to_string(), trimmed.to_string()));
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// `k1=v1&k2=v2` con valores codificados
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Ruta con el sufijo `?...` solo cuando hay parámetros
    pub fn with_path(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.encode())
        }
    }
}

//! Selectores dependientes país → ciudad
//!
//! Cambiar el país vacía la lista de ciudades y la ciudad elegida, y vuelve
//! a pedir las ciudades del nuevo país.

use tracing::warn;

use crate::api::geography;
use crate::clients::ApiClient;
use crate::models::{City, Country};

#[derive(Debug, Clone, Default)]
pub struct CountryCityCascade {
    countries: Vec<Country>,
    cities: Vec<City>,
    country_id: Option<u64>,
    city_id: Option<u64>,
}

impl CountryCityCascade {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load_countries(&mut self, client: &ApiClient) {
        self.countries = geography::get_countries(client).await.unwrap_or_else(|e| {
            warn!("⚠️ No se pudieron cargar los países: {}", e);
            Vec::new()
        });
    }

    /// Devuelve `true` si el país cambió (y con él la ciudad se vació)
    pub async fn select_country(&mut self, client: &ApiClient, country_id: Option<u64>) -> bool {
        if self.country_id == country_id {
            return false;
        }
        self.country_id = country_id;
        self.city_id = None;
        self.cities.clear();

        if let Some(country_id) = country_id {
            let cities = geography::get_cities(client, country_id)
                .await
                .unwrap_or_else(|e| {
                    warn!("⚠️ No se pudieron cargar las ciudades de {}: {}", country_id, e);
                    Vec::new()
                });
            // otra selección pudo llegar mientras tanto
            if self.country_id == Some(country_id) {
                self.cities = cities;
            }
        }
        true
    }

    /// Elegir ciudad. Solo se aceptan ciudades del país actual.
    pub fn select_city(&mut self, city_id: Option<u64>) -> bool {
        match city_id {
            None => {
                self.city_id = None;
                true
            }
            Some(id) if self.cities.iter().any(|c| c.city_id == id) => {
                self.city_id = Some(id);
                true
            }
            Some(_) => false,
        }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn country_id(&self) -> Option<u64> {
        self.country_id
    }

    pub fn city_id(&self) -> Option<u64> {
        self.city_id
    }

    pub fn reset(&mut self) {
        self.country_id = None;
        self.city_id = None;
        self.cities.clear();
    }
}

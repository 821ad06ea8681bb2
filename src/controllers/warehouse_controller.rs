//! Pantalla de gestión de depósitos
//!
//! Filtros (id, nombre) en borrador hasta "Buscar", paginación por `pageNo`
//! y modal de alta/edición. Toda mutación exitosa termina con un único
//! re-fetch de la clave aplicada.

use std::sync::Arc;

use tracing::info;

use super::cascade::CountryCityCascade;
use super::modal::Modal;
use super::prompt::Prompt;
use super::resource_list::{FetchOutcome, ListPhase, Pagination, ResourceList};
use crate::api::warehouses;
use crate::clients::ApiClient;
use crate::config::resources::WAREHOUSES;
use crate::models::{Listing, NewWarehouse, Warehouse, WarehouseChanges, WarehouseQuery};
use crate::utils::validation::{is_blank, parse_id};

pub const CITY_REQUIRED: &str = "City ID is required.";
pub const INVALID_CITY_ID: &str = "City ID must be a number.";
pub const INVALID_FILTER_ID: &str = "Warehouse ID filter must be a number.";
pub const DELETE_CONFIRM: &str = "Delete this warehouse?";
pub const ADD_SUCCESS: &str = "Warehouse added.";
pub const EDIT_SUCCESS: &str = "Warehouse updated.";

/// Filtros en borrador (texto libre, sin red)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarehouseFilters {
    pub id: String,
    pub name: String,
}

/// Filtros + página que dispararon el último fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseKey {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub page_no: u32,
}

impl Default for WarehouseKey {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            page_no: 1,
        }
    }
}

impl WarehouseKey {
    pub fn to_query(&self) -> WarehouseQuery {
        WarehouseQuery {
            id: self.id,
            name: self.name.clone(),
            page_no: Some(self.page_no),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarehouseForm {
    pub name: String,
    pub city_id: String,
    pub address: String,
}

impl WarehouseForm {
    /// El formulario de edición arranca con la ciudad vacía
    fn from_warehouse(warehouse: &Warehouse) -> Self {
        Self {
            name: warehouse.warehouse_name.clone().unwrap_or_default(),
            city_id: String::new(),
            address: warehouse.warehouse_address.clone().unwrap_or_default(),
        }
    }

    fn to_payload(&self) -> Result<NewWarehouse, &'static str> {
        if is_blank(&self.city_id) {
            return Err(CITY_REQUIRED);
        }
        let city_id = parse_id(&self.city_id).ok_or(INVALID_CITY_ID)?;

        Ok(NewWarehouse {
            warehouse_name: non_blank(&self.name),
            warehouse_city_id: city_id,
            warehouse_address: non_blank(&self.address),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub struct WarehouseController {
    client: Arc<ApiClient>,
    prompt: Arc<dyn Prompt>,
    list: ResourceList<Warehouse, WarehouseKey>,
    pub filters: WarehouseFilters,
    modal: Modal<WarehouseForm, Warehouse>,
    pub cascade: CountryCityCascade,
}

impl WarehouseController {
    pub fn new(client: Arc<ApiClient>, prompt: Arc<dyn Prompt>, strict_schemas: bool) -> Self {
        Self {
            client,
            prompt,
            list: ResourceList::new(WAREHOUSES, strict_schemas, WarehouseKey::default()),
            filters: WarehouseFilters::default(),
            modal: Modal::Closed,
            cascade: CountryCityCascade::new(),
        }
    }

    /// Carga inicial: listado con la clave aplicada y países para el selector
    pub async fn mount(&mut self) {
        self.refresh().await;
        self.cascade.load_countries(&self.client).await;
    }

    /// Fetch de la página actual con los filtros aplicados
    pub async fn refresh(&mut self) -> FetchOutcome {
        let ticket = self.list.begin_fetch();
        let query = ticket.key().to_query();
        let result = warehouses::get_warehouses(&self.client, &query)
            .await
            .map(Listing::from);
        self.list.complete(ticket, result)
    }

    /// Promover los filtros en borrador y volver a la página 1
    pub async fn apply_search(&mut self) {
        let id = if is_blank(&self.filters.id) {
            None
        } else {
            match parse_id(&self.filters.id) {
                Some(id) => Some(id),
                None => {
                    self.prompt.alert(INVALID_FILTER_ID);
                    return;
                }
            }
        };

        self.list.apply(WarehouseKey {
            id,
            name: non_blank(&self.filters.name),
            page_no: 1,
        });
        self.refresh().await;
    }

    /// Vaciar borrador y filtros aplicados, volver a la página 1
    pub async fn clear_search(&mut self) {
        self.filters = WarehouseFilters::default();
        if self.list.apply(WarehouseKey::default()) {
            self.refresh().await;
        }
    }

    pub async fn next_page(&mut self) {
        if self.list.can_next() {
            self.go_to_page(self.list.applied().page_no + 1).await;
        }
    }

    pub async fn prev_page(&mut self) {
        if self.list.can_prev() {
            self.go_to_page(self.list.applied().page_no.saturating_sub(1).max(1)).await;
        }
    }

    async fn go_to_page(&mut self, page_no: u32) {
        let key = WarehouseKey {
            page_no,
            ..self.list.applied().clone()
        };
        if self.list.apply(key) {
            self.refresh().await;
        }
    }

    pub fn open_add(&mut self) {
        self.cascade.reset();
        self.modal = Modal::Add(WarehouseForm::default());
    }

    pub fn open_edit(&mut self, warehouse: &Warehouse) {
        self.cascade.reset();
        self.modal = Modal::Edit {
            draft: WarehouseForm::from_warehouse(warehouse),
            target: warehouse.clone(),
        };
    }

    pub fn cancel(&mut self) {
        self.modal.close();
    }

    pub fn form_mut(&mut self) -> Option<&mut WarehouseForm> {
        self.modal.draft_mut()
    }

    pub async fn select_country(&mut self, country_id: Option<u64>) {
        if !self.cascade.select_country(&self.client, country_id).await {
            return;
        }
        if let Some(form) = self.modal.draft_mut() {
            form.city_id.clear();
        }
    }

    /// Elegir ciudad del selector; se copia al campo del formulario
    pub fn select_city(&mut self, city_id: Option<u64>) -> bool {
        if !self.cascade.select_city(city_id) {
            return false;
        }
        if let Some(form) = self.modal.draft_mut() {
            form.city_id = city_id.map(|id| id.to_string()).unwrap_or_default();
        }
        true
    }

    /// Guardar el modal. Devuelve `true` si la mutación se completó.
    pub async fn save(&mut self) -> bool {
        let Some(form) = self.modal.draft() else {
            return false;
        };

        // Validar campos
        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(message) => {
                self.prompt.alert(message);
                return false;
            }
        };

        let result = match &self.modal {
            Modal::Edit { target, .. } => {
                warehouses::edit_warehouse(
                    &self.client,
                    target.warehouse_id,
                    &WarehouseChanges::from(payload),
                )
                .await
                .map(|_| EDIT_SUCCESS)
            }
            _ => warehouses::add_warehouse(&self.client, &payload)
                .await
                .map(|ack| {
                    if let Some(id) = ack.id {
                        info!("🏭 Depósito creado con id {}", id);
                    }
                    ADD_SUCCESS
                }),
        };

        match result {
            Ok(message) => {
                self.prompt.alert(message);
                self.refresh().await;
                self.modal.close();
                true
            }
            Err(e) => {
                self.prompt.alert(&e.to_string());
                false
            }
        }
    }

    /// Borrar tras confirmación. Rechazar la confirmación no hace nada.
    pub async fn delete(&mut self, warehouse_id: u64) -> bool {
        if !self.prompt.confirm(DELETE_CONFIRM) {
            return false;
        }

        match warehouses::delete_warehouse(&self.client, warehouse_id).await {
            Ok(_) => {
                self.refresh().await;
                true
            }
            Err(e) => {
                self.prompt.alert(&e.to_string());
                false
            }
        }
    }

    pub fn phase(&self) -> ListPhase {
        self.list.phase()
    }

    pub fn rows(&self) -> &[Warehouse] {
        self.list.rows()
    }

    pub fn error(&self) -> Option<&str> {
        self.list.error()
    }

    pub fn applied(&self) -> &WarehouseKey {
        self.list.applied()
    }

    pub fn pagination(&self) -> Pagination {
        self.list.pagination()
    }

    pub fn can_prev(&self) -> bool {
        self.list.can_prev()
    }

    pub fn can_next(&self) -> bool {
        self.list.can_next()
    }

    pub fn modal(&self) -> &Modal<WarehouseForm, Warehouse> {
        &self.modal
    }
}

//! Pantalla de gestión de camiones
//!
//! Dos listados: camiones (solo alimenta los selectores) y registros de
//! matrícula (la tabla principal). Ninguno de los dos está paginado.

use std::sync::Arc;

use tracing::warn;

use super::modal::Modal;
use super::prompt::Prompt;
use super::resource_list::{FetchOutcome, ListPhase, ResourceList};
use crate::api::trucks;
use crate::clients::ApiClient;
use crate::config::resources::{TRUCKS, TRUCK_INFOS};
use crate::models::{Listing, NewTruck, NewTruckInfo, Truck, TruckInfo, TruckInfoChanges};
use crate::utils::errors::ApiResult;
use crate::utils::validation::{is_blank, parse_id};

pub const BRAND_REQUIRED: &str = "Truck brand is required.";
pub const MODEL_REQUIRED: &str = "Truck model is required.";
pub const TRUCK_ID_REQUIRED: &str = "Truck ID is required.";
pub const INVALID_TRUCK_ID: &str = "Truck ID must be a number.";
pub const PLATE_REQUIRED: &str = "Plate is required.";
pub const DELETE_CONFIRM: &str = "Delete this record?";
pub const ADD_TRUCK_SUCCESS: &str = "Truck added.";
pub const ADD_TRUCK_INFO_SUCCESS: &str = "Truck record added.";
pub const EDIT_TRUCK_INFO_SUCCESS: &str = "Truck record updated.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruckFormKind {
    Truck,
    TruckInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruckForm {
    pub kind: TruckFormKind,
    pub truck_brand: String,
    pub truck_model: String,
    pub truck_id: String,
    pub plate: String,
}

impl TruckForm {
    fn new(kind: TruckFormKind) -> Self {
        Self {
            kind,
            truck_brand: String::new(),
            truck_model: String::new(),
            truck_id: String::new(),
            plate: String::new(),
        }
    }

    fn from_truck_info(info: &TruckInfo) -> Self {
        Self {
            truck_id: info.truck_id.to_string(),
            plate: info.plate.clone(),
            ..Self::new(TruckFormKind::TruckInfo)
        }
    }
}

/// Mutación lista para enviar, ya validada
#[derive(Debug, Clone, PartialEq)]
enum TruckMutation {
    AddTruck(NewTruck),
    AddTruckInfo(NewTruckInfo),
    EditTruckInfo(u64, TruckInfoChanges),
}

pub struct TruckController {
    client: Arc<ApiClient>,
    prompt: Arc<dyn Prompt>,
    trucks: ResourceList<Truck, ()>,
    truck_infos: ResourceList<TruckInfo, ()>,
    modal: Modal<TruckForm, TruckInfo>,
}

impl TruckController {
    pub fn new(client: Arc<ApiClient>, prompt: Arc<dyn Prompt>, strict_schemas: bool) -> Self {
        Self {
            client,
            prompt,
            trucks: ResourceList::new(TRUCKS, strict_schemas, ()),
            truck_infos: ResourceList::new(TRUCK_INFOS, strict_schemas, ()),
            modal: Modal::Closed,
        }
    }

    /// Carga inicial: los dos listados en paralelo
    pub async fn mount(&mut self) {
        let trucks_ticket = self.trucks.begin_fetch();
        let infos_ticket = self.truck_infos.begin_fetch();

        let (trucks, infos) = tokio::join!(
            trucks::list_trucks(&self.client),
            trucks::list_truck_info(&self.client)
        );

        self.trucks.complete(trucks_ticket, selector_listing(trucks));
        self.truck_infos.complete(infos_ticket, infos.map(Listing::unpaged));
    }

    /// El listado de camiones solo alimenta selectores: un fallo es vacío
    pub async fn refresh_trucks(&mut self) -> FetchOutcome {
        let ticket = self.trucks.begin_fetch();
        let result = trucks::list_trucks(&self.client).await;
        self.trucks.complete(ticket, selector_listing(result))
    }

    pub async fn refresh_truck_infos(&mut self) -> FetchOutcome {
        let ticket = self.truck_infos.begin_fetch();
        let result = trucks::list_truck_info(&self.client)
            .await
            .map(Listing::unpaged);
        self.truck_infos.complete(ticket, result)
    }

    pub fn open_add_truck(&mut self) {
        self.modal = Modal::Add(TruckForm::new(TruckFormKind::Truck));
    }

    pub async fn open_add_truck_info(&mut self) {
        self.modal = Modal::Add(TruckForm::new(TruckFormKind::TruckInfo));
        self.ensure_trucks_loaded().await;
    }

    pub async fn open_edit_truck_info(&mut self, info: &TruckInfo) {
        self.modal = Modal::Edit {
            draft: TruckForm::from_truck_info(info),
            target: info.clone(),
        };
        self.ensure_trucks_loaded().await;
    }

    async fn ensure_trucks_loaded(&mut self) {
        if self.trucks.rows().is_empty() {
            self.refresh_trucks().await;
        }
    }

    pub fn cancel(&mut self) {
        self.modal.close();
    }

    pub fn form_mut(&mut self) -> Option<&mut TruckForm> {
        self.modal.draft_mut()
    }

    fn validated_mutation(&self) -> Option<Result<TruckMutation, &'static str>> {
        let mutation = match &self.modal {
            Modal::Add(form) if form.kind == TruckFormKind::Truck => {
                if is_blank(&form.truck_brand) {
                    return Some(Err(BRAND_REQUIRED));
                }
                if is_blank(&form.truck_model) {
                    return Some(Err(MODEL_REQUIRED));
                }
                TruckMutation::AddTruck(NewTruck {
                    truck_brand: form.truck_brand.trim().to_string(),
                    truck_model: form.truck_model.trim().to_string(),
                })
            }
            Modal::Add(form) => {
                if is_blank(&form.truck_id) {
                    return Some(Err(TRUCK_ID_REQUIRED));
                }
                if is_blank(&form.plate) {
                    return Some(Err(PLATE_REQUIRED));
                }
                let Some(truck_id) = parse_id(&form.truck_id) else {
                    return Some(Err(INVALID_TRUCK_ID));
                };
                TruckMutation::AddTruckInfo(NewTruckInfo {
                    truck_id,
                    plate: form.plate.trim().to_string(),
                })
            }
            Modal::Edit { draft, target } => {
                // sin id no hay registro que editar
                let truck_info_id = target.truck_info_id?;
                if is_blank(&draft.plate) {
                    return Some(Err(PLATE_REQUIRED));
                }
                let truck_id = if is_blank(&draft.truck_id) {
                    None
                } else {
                    match parse_id(&draft.truck_id) {
                        Some(id) => Some(id),
                        None => return Some(Err(INVALID_TRUCK_ID)),
                    }
                };
                TruckMutation::EditTruckInfo(
                    truck_info_id,
                    TruckInfoChanges {
                        truck_id,
                        plate: Some(draft.plate.trim().to_string()),
                    },
                )
            }
            _ => return None,
        };
        Some(Ok(mutation))
    }

    /// Guardar el modal actual. Devuelve `true` si la mutación se completó.
    pub async fn save(&mut self) -> bool {
        let mutation = match self.validated_mutation() {
            None => return false,
            Some(Err(message)) => {
                self.prompt.alert(message);
                return false;
            }
            Some(Ok(mutation)) => mutation,
        };

        let result: ApiResult<&'static str> = match &mutation {
            TruckMutation::AddTruck(payload) => trucks::add_truck(&self.client, payload)
                .await
                .map(|_| ADD_TRUCK_SUCCESS),
            TruckMutation::AddTruckInfo(payload) => trucks::add_truck_info(&self.client, payload)
                .await
                .map(|_| ADD_TRUCK_INFO_SUCCESS),
            TruckMutation::EditTruckInfo(id, changes) => {
                trucks::edit_truck_info(&self.client, *id, changes)
                    .await
                    .map(|_| EDIT_TRUCK_INFO_SUCCESS)
            }
        };

        match result {
            Ok(message) => {
                self.prompt.alert(message);
                match mutation {
                    TruckMutation::AddTruck(_) => self.refresh_trucks().await,
                    _ => self.refresh_truck_infos().await,
                };
                self.modal.close();
                true
            }
            Err(e) => {
                self.prompt.alert(&e.to_string());
                false
            }
        }
    }

    /// Borrar un registro de matrícula. Sin id es un no-op.
    pub async fn delete_truck_info(&mut self, info: &TruckInfo) -> bool {
        let Some(truck_info_id) = info.truck_info_id else {
            return false;
        };
        if !self.prompt.confirm(DELETE_CONFIRM) {
            return false;
        }

        match trucks::delete_truck_info(&self.client, truck_info_id).await {
            Ok(_) => {
                self.refresh_truck_infos().await;
                true
            }
            Err(e) => {
                self.prompt.alert(&e.to_string());
                false
            }
        }
    }

    /// Borrar un camión; sus registros también cambian, se recargan ambos
    pub async fn delete_truck(&mut self, truck_id: u64) -> bool {
        if !self.prompt.confirm(DELETE_CONFIRM) {
            return false;
        }

        match trucks::delete_truck(&self.client, truck_id).await {
            Ok(_) => {
                self.refresh_trucks().await;
                self.refresh_truck_infos().await;
                true
            }
            Err(e) => {
                self.prompt.alert(&e.to_string());
                false
            }
        }
    }

    pub fn phase(&self) -> ListPhase {
        self.truck_infos.phase()
    }

    pub fn truck_infos(&self) -> &[TruckInfo] {
        self.truck_infos.rows()
    }

    pub fn trucks(&self) -> &[Truck] {
        self.trucks.rows()
    }

    pub fn error(&self) -> Option<&str> {
        self.truck_infos.error()
    }

    pub fn modal(&self) -> &Modal<TruckForm, TruckInfo> {
        &self.modal
    }
}

fn selector_listing(result: ApiResult<Vec<Truck>>) -> ApiResult<Listing<Truck>> {
    Ok(match result {
        Ok(rows) => Listing::unpaged(rows),
        Err(e) => {
            warn!("⚠️ No se pudieron cargar los camiones: {}", e);
            Listing::empty()
        }
    })
}

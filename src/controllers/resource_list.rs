//! Listado de un recurso con estado de carga, error y paginación
//!
//! El listado refleja siempre el último fetch exitoso para la clave aplicada
//! (filtros + página). Cada fetch se etiqueta con la clave con la que salió;
//! si al terminar la clave aplicada ya es otra, el resultado se descarta.

use std::fmt::Debug;

use tracing::{debug, warn};

use crate::config::ResourceConfig;
use crate::models::Listing;
use crate::utils::errors::{ApiError, ApiResult};

/// Estado visible del listado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Loading,
    Empty,
    Populated,
    Error,
}

/// Paginación reportada por el último fetch aplicado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 0,
            total: 0,
            total_pages: 1,
        }
    }
}

impl Pagination {
    /// "Mostrando X–Y de Z": `(page-1)*limit + 1` hasta `min(page*limit, total)`
    pub fn showing_range(&self) -> Option<(u64, u64)> {
        if self.total == 0 || self.limit == 0 || self.page == 0 {
            return None;
        }
        let limit = u64::from(self.limit);
        let page = u64::from(self.page);
        let first = (page - 1) * limit + 1;
        if first > self.total {
            return None;
        }
        Some((first, (page * limit).min(self.total)))
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Etiqueta de un fetch en vuelo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket<K> {
    key: K,
    seq: u64,
}

impl<K> FetchTicket<K> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// La clave aplicada cambió mientras el fetch estaba en vuelo
    Discarded,
}

pub struct ResourceList<T, K> {
    config: ResourceConfig,
    strict_schemas: bool,
    applied: K,
    rows: Vec<T>,
    loading: bool,
    loaded: bool,
    error: Option<String>,
    pagination: Pagination,
    issued: u64,
}

impl<T, K> ResourceList<T, K>
where
    K: Clone + PartialEq + Debug,
{
    pub fn new(config: ResourceConfig, strict_schemas: bool, initial: K) -> Self {
        Self {
            config,
            strict_schemas,
            applied: initial,
            rows: Vec::new(),
            loading: false,
            loaded: false,
            error: None,
            pagination: Pagination::default(),
            issued: 0,
        }
    }

    pub fn applied(&self) -> &K {
        &self.applied
    }

    /// Cambiar la clave aplicada. Devuelve `true` si cambió.
    pub fn apply(&mut self, key: K) -> bool {
        if self.applied == key {
            return false;
        }
        self.applied = key;
        true
    }

    /// Marcar un fetch como iniciado para la clave aplicada actual.
    /// Las filas anteriores se conservan hasta que el fetch termine.
    pub fn begin_fetch(&mut self) -> FetchTicket<K> {
        self.issued += 1;
        self.loading = true;
        self.error = None;
        FetchTicket {
            key: self.applied.clone(),
            seq: self.issued,
        }
    }

    /// Aplicar el resultado de un fetch
    pub fn complete(&mut self, ticket: FetchTicket<K>, result: ApiResult<Listing<T>>) -> FetchOutcome {
        if ticket.key != self.applied {
            debug!(
                "Descartando fetch #{} de {}: clave {:?} ya no aplicada",
                ticket.seq, self.config.name, ticket.key
            );
            return FetchOutcome::Discarded;
        }

        self.loading = false;
        self.loaded = true;

        match result {
            Ok(listing) => self.set_listing(listing),
            Err(error) => self.set_failure(error),
        }
        FetchOutcome::Applied
    }

    fn set_listing(&mut self, listing: Listing<T>) {
        self.pagination = Pagination {
            page: listing.page,
            limit: listing.limit,
            total: listing.total,
            total_pages: listing.total_pages,
        };
        self.rows = listing.rows;
        self.error = None;
    }

    fn set_failure(&mut self, error: ApiError) {
        let is_sentinel = error
            .server_message()
            .map(|message| self.config.is_empty_sentinel(message))
            .unwrap_or(false);

        if is_sentinel {
            self.set_listing(Listing::empty());
            return;
        }

        if error.is_decode() && !self.strict_schemas {
            warn!("⚠️ Respuesta inesperada para {}, se muestra vacío: {}", self.config.name, error);
            self.set_listing(Listing::empty());
            return;
        }

        self.rows.clear();
        self.pagination = Pagination::default();
        self.error = Some(error.to_string());
    }

    pub fn phase(&self) -> ListPhase {
        if self.loading || !self.loaded {
            ListPhase::Loading
        } else if self.error.is_some() {
            ListPhase::Error
        } else if self.rows.is_empty() {
            ListPhase::Empty
        } else {
            ListPhase::Populated
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn can_prev(&self) -> bool {
        !self.loading && self.pagination.has_prev()
    }

    pub fn can_next(&self) -> bool {
        !self.loading && self.pagination.has_next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resources::WAREHOUSES;

    fn listing(rows: Vec<u64>, page: u32, total: u64, total_pages: u32) -> Listing<u64> {
        Listing {
            rows,
            total,
            page,
            limit: 10,
            total_pages,
        }
    }

    #[test]
    fn test_initial_phase_is_loading() {
        let list: ResourceList<u64, u32> = ResourceList::new(WAREHOUSES, false, 1);
        assert_eq!(list.phase(), ListPhase::Loading);
    }

    #[test]
    fn test_rows_survive_while_loading() {
        let mut list = ResourceList::new(WAREHOUSES, false, 1u32);
        let ticket = list.begin_fetch();
        list.complete(ticket, Ok(listing(vec![1, 2], 1, 2, 1)));

        list.begin_fetch();
        assert_eq!(list.phase(), ListPhase::Loading);
        assert_eq!(list.rows(), &[1, 2]);
    }

    #[test]
    fn test_sentinel_renders_empty_not_error() {
        let mut list: ResourceList<u64, u32> = ResourceList::new(WAREHOUSES, false, 1);
        let ticket = list.begin_fetch();
        list.complete(
            ticket,
            Err(ApiError::Server {
                status: 404,
                message: "Hicbir depo kaydi bulunamadi.".to_string(),
            }),
        );

        assert_eq!(list.phase(), ListPhase::Empty);
        assert_eq!(list.error(), None);
        assert_eq!(list.pagination().total, 0);
    }

    #[test]
    fn test_other_failure_renders_error() {
        let mut list = ResourceList::new(WAREHOUSES, false, 1u32);
        let ticket = list.begin_fetch();
        list.complete(ticket, Ok(listing(vec![1], 1, 1, 1)));

        let ticket = list.begin_fetch();
        list.complete(
            ticket,
            Err(ApiError::Server {
                status: 500,
                message: "Sunucu hatasi".to_string(),
            }),
        );

        assert_eq!(list.phase(), ListPhase::Error);
        assert_eq!(list.error(), Some("Sunucu hatasi"));
        assert!(list.rows().is_empty());
    }

    #[test]
    fn test_decode_failure_degrades_unless_strict() {
        let decode = || ApiError::Decode {
            path: "/getWH".to_string(),
            reason: "missing field `data`".to_string(),
        };

        let mut lenient: ResourceList<u64, u32> = ResourceList::new(WAREHOUSES, false, 1);
        let ticket = lenient.begin_fetch();
        lenient.complete(ticket, Err(decode()));
        assert_eq!(lenient.phase(), ListPhase::Empty);

        let mut strict: ResourceList<u64, u32> = ResourceList::new(WAREHOUSES, true, 1);
        let ticket = strict.begin_fetch();
        strict.complete(ticket, Err(decode()));
        assert_eq!(strict.phase(), ListPhase::Error);
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut list = ResourceList::new(WAREHOUSES, false, 1u32);
        let stale = list.begin_fetch();

        assert!(list.apply(2));
        let fresh = list.begin_fetch();

        assert_eq!(
            list.complete(fresh, Ok(listing(vec![20], 2, 11, 2))),
            FetchOutcome::Applied
        );
        assert_eq!(
            list.complete(stale, Ok(listing(vec![10], 1, 11, 2))),
            FetchOutcome::Discarded
        );
        assert_eq!(list.rows(), &[20]);
        assert_eq!(list.pagination().page, 2);
    }

    #[test]
    fn test_apply_same_key_is_not_a_change() {
        let mut list: ResourceList<u64, u32> = ResourceList::new(WAREHOUSES, false, 1);
        assert!(!list.apply(1));
        assert!(list.apply(3));
    }

    #[test]
    fn test_showing_range() {
        let pagination = Pagination {
            page: 2,
            limit: 10,
            total: 15,
            total_pages: 2,
        };
        assert_eq!(pagination.showing_range(), Some((11, 15)));
        assert!(pagination.has_prev());
        assert!(!pagination.has_next());

        let first = Pagination {
            page: 1,
            ..pagination
        };
        assert_eq!(first.showing_range(), Some((1, 10)));

        assert_eq!(Pagination::default().showing_range(), None);
    }

    #[test]
    fn test_navigation_disabled_while_loading() {
        let mut list = ResourceList::new(WAREHOUSES, false, 1u32);
        let ticket = list.begin_fetch();
        list.complete(ticket, Ok(listing(vec![1], 1, 25, 3)));
        assert!(list.can_next());
        assert!(!list.can_prev());

        list.begin_fetch();
        assert!(!list.can_next());
    }
}

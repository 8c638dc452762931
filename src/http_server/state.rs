//! Shared state injected into every handler

use crate::catalog::{BookStore, CatalogResult};
use crate::observability::MetricsRegistry;

/// The book store plus the counters that describe it
pub struct AppState {
    pub store: BookStore,
    pub metrics: MetricsRegistry,
}

impl AppState {
    /// Wrap a store, priming the book gauge with its current size
    pub fn new(store: BookStore) -> CatalogResult<Self> {
        let metrics = MetricsRegistry::new();
        metrics.set_books(store.len()? as u64);
        Ok(Self { store, metrics })
    }

    /// State over the seed records
    pub fn seeded() -> CatalogResult<Self> {
        Self::new(BookStore::seeded())
    }
}

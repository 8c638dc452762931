//! Metrics registry
//!
//! - Counters increase monotonically and reset only on process start
//! - `books` tracks the current collection size
//! - Thread-safe, lock-free

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use utoipa::ToSchema;

/// Operational counters for the catalog service
///
/// Relaxed ordering throughout; counters are independent of each other.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    requests: AtomicU64,
    books_created: AtomicU64,
    books_updated: AtomicU64,
    books_deleted: AtomicU64,
    not_found: AtomicU64,
    validation_errors: AtomicU64,
    stats_computed: AtomicU64,
    books: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_requests(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a created book and bump the current count
    pub fn record_created(&self) {
        self.books_created.fetch_add(1, Ordering::Relaxed);
        self.books.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_updated(&self) {
        self.books_updated.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a deleted book and lower the current count
    pub fn record_deleted(&self) {
        self.books_deleted.fetch_add(1, Ordering::Relaxed);
        // Saturate instead of wrapping if a delete races a set_books
        let _ = self
            .books
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1));
    }

    pub fn increment_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_validation_errors(&self) {
        self.validation_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_stats_computed(&self) {
        self.stats_computed.fetch_add(1, Ordering::Relaxed);
    }

    /// Set the current record count
    pub fn set_books(&self, count: u64) {
        self.books.store(count, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            books_created: self.books_created.load(Ordering::Relaxed),
            books_updated: self.books_updated.load(Ordering::Relaxed),
            books_deleted: self.books_deleted.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            validation_errors: self.validation_errors.load(Ordering::Relaxed),
            stats_computed: self.stats_computed.load(Ordering::Relaxed),
            books: self.books.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub books_created: u64,
    pub books_updated: u64,
    pub books_deleted: u64,
    pub not_found: u64,
    pub validation_errors: u64,
    pub stats_computed: u64,
    pub books: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_is_zeroed() {
        let snapshot = MetricsRegistry::new().snapshot();
        assert_eq!(snapshot.requests, 0);
        assert_eq!(snapshot.books, 0);
    }

    #[test]
    fn test_book_count_follows_mutations() {
        let registry = MetricsRegistry::new();
        registry.set_books(3);
        registry.record_created();
        registry.record_deleted();
        registry.record_deleted();
        registry.record_updated();

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.books, 2);
        assert_eq!(snapshot.books_created, 1);
        assert_eq!(snapshot.books_deleted, 2);
        assert_eq!(snapshot.books_updated, 1);
    }

    #[test]
    fn test_book_count_does_not_wrap() {
        let registry = MetricsRegistry::new();
        registry.record_deleted();
        assert_eq!(registry.snapshot().books, 0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let registry = MetricsRegistry::new();
        registry.increment_requests();
        registry.increment_not_found();

        let value = serde_json::to_value(registry.snapshot()).unwrap();
        assert_eq!(value["requests"], 1);
        assert_eq!(value["not_found"], 1);
        assert_eq!(value["validation_errors"], 0);
    }
}

//! # Catalog Errors
//!
//! Error types for the book catalog.

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No record carries the requested identifier
    #[error("Book doesn't exist")]
    NotFound(i64),

    /// Statistics requested over zero records
    #[error("Statistics are undefined for an empty collection")]
    EmptyCollection,

    /// A writer panicked while holding the collection lock
    #[error("Collection lock poisoned")]
    LockPoisoned,
}

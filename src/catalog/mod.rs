//! # Book Catalog
//!
//! In-memory book records with sorted listing and aggregate statistics.
//!
//! # Usage
//!
//! ```
//! use bookshelf::catalog::{aggregate, sorted, BookRequest, BookStore, SortField};
//!
//! let store = BookStore::seeded();
//! let book = store.insert(BookRequest::new("X", "Y", "Z", 2000, 100)).unwrap();
//! assert_eq!(book.id, 4);
//!
//! let by_year = sorted(store.list().unwrap(), Some(SortField::Year));
//! assert_eq!(by_year[0].year, 1873);
//!
//! let stat = aggregate(&store.list().unwrap()).unwrap();
//! assert_eq!(stat.pages.max, 500);
//! ```

mod book;
mod errors;
mod sort;
mod stats;
mod store;

pub use book::{seed_books, Book, BookRequest};
pub use errors::{CatalogError, CatalogResult};
pub use sort::{sorted, SortField};
pub use stats::{aggregate, BooksStat, Stat};
pub use store::BookStore;

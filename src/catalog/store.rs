//! # Record Store
//!
//! Ordered in-memory collection of book records.
//!
//! Lookups are linear scans in storage order, so the first matching record
//! wins. Identifiers come from a counter owned by the store and are never
//! handed out twice, even after the records carrying them are deleted.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::book::{seed_books, Book, BookRequest};
use super::errors::{CatalogError, CatalogResult};

struct Shelf {
    books: Vec<Book>,
    /// Next identifier to assign (starts at 1, never reused)
    next_id: i64,
}

impl Shelf {
    fn position(&self, id: i64) -> CatalogResult<usize> {
        self.books
            .iter()
            .position(|b| b.id == id)
            .ok_or(CatalogError::NotFound(id))
    }
}

/// Thread-safe book store
///
/// One lock guards both the records and the identifier counter, so a
/// mutation is never observed half-applied.
pub struct BookStore {
    shelf: RwLock<Shelf>,
}

impl BookStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_books(Vec::new())
    }

    /// Create a store holding the seed records
    pub fn seeded() -> Self {
        Self::with_books(seed_books())
    }

    /// Create a store holding `books` in the given order
    ///
    /// The counter starts one past the largest identifier present.
    pub fn with_books(books: Vec<Book>) -> Self {
        let next_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            shelf: RwLock::new(Shelf { books, next_id }),
        }
    }

    fn read(&self) -> CatalogResult<RwLockReadGuard<'_, Shelf>> {
        self.shelf.read().map_err(|_| CatalogError::LockPoisoned)
    }

    fn write(&self) -> CatalogResult<RwLockWriteGuard<'_, Shelf>> {
        self.shelf.write().map_err(|_| CatalogError::LockPoisoned)
    }

    /// All records in storage order
    pub fn list(&self) -> CatalogResult<Vec<Book>> {
        Ok(self.read()?.books.clone())
    }

    /// Append a new record and return it
    pub fn insert(&self, fields: BookRequest) -> CatalogResult<Book> {
        let mut shelf = self.write()?;
        let id = shelf.next_id;
        shelf.next_id += 1;

        let book = Book::from_request(id, fields);
        shelf.books.push(book.clone());
        Ok(book)
    }

    /// Fetch the record with the given identifier
    pub fn get(&self, id: i64) -> CatalogResult<Book> {
        let shelf = self.read()?;
        let index = shelf.position(id)?;
        Ok(shelf.books[index].clone())
    }

    /// Replace every field of a record except its identifier
    ///
    /// The record keeps its position in storage order.
    pub fn update(&self, id: i64, fields: BookRequest) -> CatalogResult<Book> {
        let mut shelf = self.write()?;
        let index = shelf.position(id)?;

        let book = Book::from_request(id, fields);
        shelf.books[index] = book.clone();
        Ok(book)
    }

    /// Remove a record, preserving the relative order of the rest
    pub fn delete(&self, id: i64) -> CatalogResult<Book> {
        let mut shelf = self.write()?;
        let index = shelf.position(id)?;
        Ok(shelf.books.remove(index))
    }

    /// Number of records currently stored
    pub fn len(&self) -> CatalogResult<usize> {
        Ok(self.read()?.books.len())
    }

    pub fn is_empty(&self) -> CatalogResult<bool> {
        Ok(self.read()?.books.is_empty())
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

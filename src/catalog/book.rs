//! Book record types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Writable fields of a book, as sent by clients on create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookRequest {
    pub name: String,
    pub author: String,
    pub genre: String,
    pub year: i64,
    pub pages: i64,
}

/// A stored book record
///
/// The identifier is assigned by the store and never changes; every other
/// field is replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub author: String,
    pub genre: String,
    pub year: i64,
    pub pages: i64,
}

impl Book {
    /// Build a record from request fields under the given identifier
    pub fn from_request(id: i64, fields: BookRequest) -> Self {
        Self {
            id,
            name: fields.name,
            author: fields.author,
            genre: fields.genre,
            year: fields.year,
            pages: fields.pages,
        }
    }
}

impl BookRequest {
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: i64,
        pages: i64,
    ) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            genre: genre.into(),
            year,
            pages,
        }
    }
}

/// The three records every fresh catalog starts with
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::from_request(
            1,
            BookRequest::new("War and Peace", "Tolstoy Lev Nikolaevich", "novel", 1873, 500),
        ),
        Book::from_request(
            2,
            BookRequest::new(
                "Entertaining arithmetic and mathematics",
                "Perelman Yakov Isidorovich",
                "education",
                1926,
                320,
            ),
        ),
        Book::from_request(
            3,
            BookRequest::new("Hotel", "Hailey Arthur", "novel", 1965, 200),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_json_shape() {
        let book = Book::from_request(7, BookRequest::new("X", "Y", "Z", 2000, 100));
        let value = serde_json::to_value(&book).unwrap();

        assert_eq!(
            value,
            json!({"id": 7, "name": "X", "author": "Y", "genre": "Z", "year": 2000, "pages": 100})
        );
    }

    #[test]
    fn test_request_ignores_client_id() {
        let req: BookRequest = serde_json::from_value(json!({
            "id": 42, "name": "X", "author": "Y", "genre": "Z", "year": 2000, "pages": 100
        }))
        .unwrap();

        assert_eq!(req, BookRequest::new("X", "Y", "Z", 2000, 100));
    }

    #[test]
    fn test_request_rejects_wrong_types() {
        let result = serde_json::from_value::<BookRequest>(json!({
            "name": "X", "author": "Y", "genre": "Z", "year": "two thousand", "pages": 100
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_seed_ids_are_sequential() {
        let ids: Vec<i64> = seed_books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}

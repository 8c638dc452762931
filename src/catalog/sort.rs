//! Field-ordered views of the collection

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::book::Book;

/// Fields a listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Author,
    Genre,
    Year,
    Pages,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Name,
        SortField::Author,
        SortField::Genre,
        SortField::Year,
        SortField::Pages,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Author => "author",
            SortField::Genre => "genre",
            SortField::Year => "year",
            SortField::Pages => "pages",
        }
    }

    /// Compare two records on this field's natural order
    pub fn compare(&self, a: &Book, b: &Book) -> Ordering {
        match self {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Author => a.author.cmp(&b.author),
            SortField::Genre => a.genre.cmp(&b.genre),
            SortField::Year => a.year.cmp(&b.year),
            SortField::Pages => a.pages.cmp(&b.pages),
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown sort field '{}', expected one of: name, author, genre, year, pages",
                    s
                )
            })
    }
}

/// Order `books` by `field`, keeping storage order among equal keys
///
/// With no field the input order is returned unchanged.
pub fn sorted(mut books: Vec<Book>, field: Option<SortField>) -> Vec<Book> {
    if let Some(field) = field {
        // slice::sort_by is stable
        books.sort_by(|a, b| field.compare(a, b));
    }
    books
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::book::{seed_books, BookRequest};

    fn ids(books: &[Book]) -> Vec<i64> {
        books.iter().map(|b| b.id).collect()
    }

    #[test]
    fn test_no_field_keeps_storage_order() {
        assert_eq!(ids(&sorted(seed_books(), None)), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_text_fields() {
        assert_eq!(ids(&sorted(seed_books(), Some(SortField::Name))), vec![2, 3, 1]);
        assert_eq!(ids(&sorted(seed_books(), Some(SortField::Author))), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_by_numeric_fields() {
        assert_eq!(ids(&sorted(seed_books(), Some(SortField::Year))), vec![1, 2, 3]);
        assert_eq!(ids(&sorted(seed_books(), Some(SortField::Pages))), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        // books 1 and 3 are both "novel"
        assert_eq!(ids(&sorted(seed_books(), Some(SortField::Genre))), vec![2, 1, 3]);

        let books = vec![
            Book::from_request(5, BookRequest::new("b", "a", "g", 1, 10)),
            Book::from_request(2, BookRequest::new("a", "a", "g", 1, 10)),
            Book::from_request(9, BookRequest::new("c", "a", "g", 1, 10)),
        ];
        for field in SortField::ALL.iter().filter(|f| **f != SortField::Name) {
            assert_eq!(ids(&sorted(books.clone(), Some(*field))), vec![5, 2, 9]);
        }
    }

    #[test]
    fn test_numeric_order_is_not_lexicographic() {
        let books = vec![
            Book::from_request(1, BookRequest::new("a", "a", "g", 1, 1000)),
            Book::from_request(2, BookRequest::new("b", "a", "g", 1, 99)),
        ];
        assert_eq!(ids(&sorted(books, Some(SortField::Pages))), vec![2, 1]);
    }

    #[test]
    fn test_parse_field_names() {
        for field in SortField::ALL {
            assert_eq!(field.as_str().parse::<SortField>(), Ok(field));
        }
        assert!("title".parse::<SortField>().is_err());
        assert!("Name".parse::<SortField>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let field: SortField = serde_json::from_str("\"pages\"").unwrap();
        assert_eq!(field, SortField::Pages);
        assert!(serde_json::from_str::<SortField>("\"isbn\"").is_err());
    }
}

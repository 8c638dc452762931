//! # Statistics Aggregator
//!
//! Min, max and mean of the numeric book fields, computed in a single pass.
//!
//! The mean is the exact sum divided by the record count with integer
//! division, so it truncates toward zero.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::book::Book;
use super::errors::{CatalogError, CatalogResult};

/// Min / max / mean of one numeric field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Stat {
    pub min: i64,
    pub max: i64,
    pub avg: i64,
}

/// Statistics over the whole collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BooksStat {
    pub year: Stat,
    pub pages: Stat,
}

/// Running accumulator for one field
struct Accumulator {
    min: i64,
    max: i64,
    sum: i128,
}

impl Accumulator {
    fn start(value: i64) -> Self {
        Self {
            min: value,
            max: value,
            sum: value as i128,
        }
    }

    fn push(&mut self, value: i64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += value as i128;
    }

    fn finish(self, count: i128) -> Stat {
        // |mean| <= max(|min|, |max|), so it always fits back into i64
        Stat {
            min: self.min,
            max: self.max,
            avg: (self.sum / count) as i64,
        }
    }
}

/// Compute year and page statistics over `books`
///
/// Fails with [`CatalogError::EmptyCollection`] when there is nothing to
/// aggregate.
pub fn aggregate(books: &[Book]) -> CatalogResult<BooksStat> {
    let (first, rest) = books.split_first().ok_or(CatalogError::EmptyCollection)?;

    let mut year = Accumulator::start(first.year);
    let mut pages = Accumulator::start(first.pages);
    for book in rest {
        year.push(book.year);
        pages.push(book.pages);
    }

    let count = books.len() as i128;
    Ok(BooksStat {
        year: year.finish(count),
        pages: pages.finish(count),
    })
}

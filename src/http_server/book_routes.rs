//! Book HTTP Routes
//!
//! CRUD endpoints over the catalog plus collection statistics.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::catalog::{aggregate, sorted, Book, BookRequest, BooksStat, SortField};
use crate::observability::{log_event_with_fields, Event};

use super::errors::ApiResult;
use super::state::AppState;

// ==================
// Request Types
// ==================

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListBooksQuery {
    /// Field to order the listing by; storage order when omitted
    #[serde(default)]
    pub sort_by: Option<SortField>,
}

// ==================
// Book Routes
// ==================

/// Create book routes
pub fn book_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_redirect_handler))
        .route("/books/", get(list_books).post(create_book))
        .route("/books", get(list_books).post(create_book))
        .route("/books/:id", get(get_book).put(update_book).delete(delete_book))
        .route("/books-stat", get(books_stat))
        .with_state(state)
}

async fn root_redirect_handler() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/docs")])
}

// ==================
// Collection Handlers
// ==================

/// List books, optionally ordered by one field
#[utoipa::path(
    get,
    path = "/books/",
    params(ListBooksQuery),
    responses(
        (status = 200, description = "All books", body = [Book]),
        (status = 400, description = "Unknown sort field", body = super::errors::ErrorResponse),
    ),
    tag = "books"
)]
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListBooksQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Book>>> {
    let Query(query) = query?;
    let books = state.store.list()?;
    Ok(Json(sorted(books, query.sort_by)))
}

/// Add a book; the store assigns its identifier
#[utoipa::path(
    post,
    path = "/books/",
    request_body = BookRequest,
    responses(
        (status = 200, description = "Book created"),
        (status = 400, description = "Malformed book", body = super::errors::ErrorResponse),
    ),
    tag = "books"
)]
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    body: Result<Json<BookRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(fields) = body?;
    let book = state.store.insert(fields)?;

    state.metrics.record_created();
    log_event_with_fields(Event::BookCreated, &[("id", book.id.to_string().as_str())]);

    Ok(StatusCode::OK)
}

// ==================
// Record Handlers
// ==================

#[utoipa::path(
    get,
    path = "/books/{id}",
    params(("id" = i64, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "The book", body = Book),
        (status = 404, description = "No such book", body = super::errors::ErrorResponse),
    ),
    tag = "books"
)]
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Book>> {
    let Path(id) = id?;
    Ok(Json(state.store.get(id)?))
}

/// Replace every field of a book except its identifier
#[utoipa::path(
    put,
    path = "/books/{id}",
    params(("id" = i64, Path, description = "Book identifier")),
    request_body = BookRequest,
    responses(
        (status = 200, description = "Book replaced"),
        (status = 400, description = "Malformed book", body = super::errors::ErrorResponse),
        (status = 404, description = "No such book", body = super::errors::ErrorResponse),
    ),
    tag = "books"
)]
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<BookRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    let Json(fields) = body?;
    state.store.update(id, fields)?;

    state.metrics.record_updated();
    log_event_with_fields(Event::BookUpdated, &[("id", id.to_string().as_str())]);

    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/books/{id}",
    params(("id" = i64, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book removed"),
        (status = 404, description = "No such book", body = super::errors::ErrorResponse),
    ),
    tag = "books"
)]
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    state.store.delete(id)?;

    state.metrics.record_deleted();
    log_event_with_fields(Event::BookDeleted, &[("id", id.to_string().as_str())]);

    Ok(StatusCode::OK)
}

// ==================
// Statistics Handlers
// ==================

/// Min, max and truncated mean of publication year and page count
#[utoipa::path(
    get,
    path = "/books-stat",
    responses(
        (status = 200, description = "Collection statistics", body = BooksStat),
        (status = 409, description = "Collection is empty", body = super::errors::ErrorResponse),
    ),
    tag = "books"
)]
pub async fn books_stat(State(state): State<Arc<AppState>>) -> ApiResult<Json<BooksStat>> {
    let books = state.store.list()?;
    let stat = aggregate(&books)?;

    state.metrics.increment_stats_computed();
    Ok(Json(stat))
}

//! # HTTP Server Module
//!
//! axum front end for the book catalog.
//!
//! # Endpoints
//!
//! - `/` - Redirect to `/docs`
//! - `/books/`, `/books/{id}` - Book CRUD
//! - `/books-stat` - Year and page statistics
//! - `/docs`, `/openapi.json` - API documentation
//! - `/health`, `/observability/*` - Health and metrics

pub mod book_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod openapi;
pub mod request_log;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::{build_router, HttpServer};
pub use state::AppState;

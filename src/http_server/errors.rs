//! # HTTP Errors
//!
//! Maps catalog failures and extractor rejections onto status codes.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::catalog::CatalogError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to HTTP clients
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Malformed body, path or query parameter
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Catalog(CatalogError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Catalog(CatalogError::EmptyCollection) => StatusCode::CONFLICT,
            ApiError::Catalog(CatalogError::LockPoisoned) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    pub detail: String,
    /// HTTP status code
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

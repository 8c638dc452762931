//! Observability HTTP Routes
//!
//! Health check and counter snapshot.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::observability::MetricsSnapshot;

use super::state::AppState;

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check route at root level
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Routes nested under `/observability`
pub fn observability_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "observability"
)]
pub async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

#[utoipa::path(
    get,
    path = "/observability/metrics",
    responses((status = 200, description = "Counter snapshot", body = MetricsSnapshot)),
    tag = "observability"
)]
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}

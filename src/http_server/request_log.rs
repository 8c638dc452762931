//! Per-request logging and counting middleware

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::observability::{Event, Logger, Severity};

use super::state::AppState;

/// Log one line per request and bump the request counters
pub async fn request_log(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let latency_us = started.elapsed().as_micros().to_string();
    record_status(&state, status);

    let (severity, event) = classify(status);
    Logger::log(
        severity,
        event.as_str(),
        &[
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("status", status.as_str()),
            ("latency_us", latency_us.as_str()),
        ],
    );

    response
}

fn record_status(state: &AppState, status: StatusCode) {
    state.metrics.increment_requests();
    match status {
        StatusCode::NOT_FOUND => state.metrics.increment_not_found(),
        StatusCode::BAD_REQUEST => state.metrics.increment_validation_errors(),
        _ => {}
    }
}

fn classify(status: StatusCode) -> (Severity, Event) {
    if status.is_server_error() {
        (Severity::Error, Event::RequestRejected)
    } else if status.is_client_error() {
        (Severity::Warn, Event::RequestRejected)
    } else {
        (Severity::Info, Event::RequestComplete)
    }
}

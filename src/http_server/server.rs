//! # HTTP Server
//!
//! Combines the endpoint routers into one axum server.

use std::io;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{log_event, log_event_with_fields, Event};

use super::book_routes::book_routes;
use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, observability_routes};
use super::openapi::docs_routes;
use super::request_log::request_log;
use super::state::AppState;

/// HTTP server for the book catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over `state`
    pub fn new(config: HttpServerConfig, state: Arc<AppState>) -> Self {
        let router = build_router(&config, state);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Bind and serve until Ctrl-C or SIGTERM, then drain in-flight requests
    pub async fn start(self) -> io::Result<()> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;
        let local = listener.local_addr()?.to_string();

        log_event_with_fields(Event::ServerListening, &[("addr", local.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

/// Build the combined router with all endpoints
pub fn build_router(config: &HttpServerConfig, state: Arc<AppState>) -> Router {
    let cors = if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        // Config::validate rejects unparsable origins before the server is built

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(book_routes(state.clone()))
        .merge(docs_routes())
        .merge(health_routes())
        .nest("/observability", observability_routes(state.clone()))
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(middleware::from_fn_with_state(state, request_log)),
        )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        // If the handler cannot be installed, only SIGTERM stops the server
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log_event(Event::ShutdownStart);
}

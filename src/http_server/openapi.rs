//! OpenAPI document and the `/docs` page that renders it

use axum::{response::Html, routing::get, Json, Router};
use utoipa::OpenApi;

/// OpenAPI documentation for the book catalog
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        description = "In-memory book catalog"
    ),
    paths(
        crate::http_server::book_routes::list_books,
        crate::http_server::book_routes::create_book,
        crate::http_server::book_routes::get_book,
        crate::http_server::book_routes::update_book,
        crate::http_server::book_routes::delete_book,
        crate::http_server::book_routes::books_stat,
        crate::http_server::observability_routes::health_handler,
        crate::http_server::observability_routes::metrics_handler,
    ),
    components(schemas(
        crate::catalog::Book,
        crate::catalog::BookRequest,
        crate::catalog::BooksStat,
        crate::catalog::Stat,
        crate::catalog::SortField,
        crate::observability::MetricsSnapshot,
        crate::http_server::errors::ErrorResponse,
        crate::http_server::observability_routes::HealthResponse,
    )),
    tags(
        (name = "books", description = "Book records and statistics"),
        (name = "observability", description = "Health and metrics"),
    )
)]
pub struct ApiDoc;

const DOCS_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head>
<title>Bookshelf API</title>
<link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui" });</script>
</body>
</html>
"##;

/// `/docs` and `/openapi.json`
pub fn docs_routes() -> Router {
    Router::new()
        .route("/docs", get(|| async { Html(DOCS_PAGE) }))
        .route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}

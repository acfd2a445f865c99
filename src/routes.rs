//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/usuario`                - Usuario CRUD (see [`crate::api::routes`])
//! - `GET /health`             - Storage health check
//! - `GET /api-docs/openapi.json` - OpenAPI document
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, openapi_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::usuario_routes())
        .route("/health", get(health_handler))
        .route("/api-docs/openapi.json", get(openapi_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

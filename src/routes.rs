//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`  - Store health check
//! - `POST /url`     - Create a link
//! - `GET  /{slug}`  - Redirect to the stored URL
//!
//! # Middleware
//!
//! From innermost to outermost:
//!
//! - **Panic boundary** - 500 response and graceful shutdown on handler panic
//! - **Error responder** - Adds the error stack in development mode
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{fallback_handler, health_handler};
use crate::api::middleware::{error_responder, panic_boundary, tracing as trace};
use crate::shutdown::Shutdown;
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware, without path normalization.
pub fn router(state: AppState, shutdown: Shutdown) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::link_routes())
        .fallback(fallback_handler)
        .layer(panic_boundary::layer(shutdown))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            error_responder::layer,
        ))
        .with_state(state)
        .layer(trace::layer())
}

/// Constructs the application service: [`router`] with trailing slashes trimmed.
pub fn app_router(state: AppState, shutdown: Shutdown) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, shutdown))
}

//! Link route configuration.

use crate::api::handlers::{create_link_handler, redirect_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public link routes.
///
/// # Endpoints
///
/// - `POST /url`     - Create a link
/// - `GET  /{slug}`  - Redirect to the stored URL
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(create_link_handler))
        .route("/{slug}", get(redirect_handler))
}

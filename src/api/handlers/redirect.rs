//! Handler for slug redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its stored URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Responses
///
/// - **302 Found** with `Location` set to the stored URL
/// - **404 Not Found** with `{"message": "Link not found"}`; nothing else is
///   attempted for a missing slug
///
/// # Errors
///
/// Returns 500 if the stored URL cannot be sent as a `Location` header.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.link_service.get_link_by_slug(&slug).await?;

    let location = HeaderValue::from_str(&link.url).map_err(|_| {
        AppError::Internal(format!(
            "Stored URL for '{}' is not a valid Location header",
            link.slug
        ))
    })?;

    debug!(slug = %link.slug, url = %link.url, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

//! Handler for link creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::link::{CreateLinkRequest, LinkResponse};
use crate::error::{AppError, ValidationError};
use crate::state::AppState;

/// Creates a link.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "slug": "docs", "url": "https://example.com" }
/// ```
///
/// `slug` is optional; when absent, `null` or empty a 5-character slug is
/// generated. Fields other than `slug` and `url` are ignored.
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// { "_id": 1, "slug": "docs", "url": "https://example.com" }
/// ```
///
/// # Errors
///
/// - 400 if the body is not a JSON object of this shape, or a field fails validation
/// - 409 with `"Slug is taken"` if the slug already exists
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(payload) = payload
        .map_err(|rejection| ValidationError::MalformedBody(rejection.body_text()))?;

    let link = state
        .link_service
        .create_link(payload.slug, payload.url)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

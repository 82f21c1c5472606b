//! Application error types and their HTTP mapping.
//!
//! Every handler returns [`AppError`]. Its [`IntoResponse`] impl writes the
//! `{ "message": ... }` body and attaches an [`ErrorReport`] extension; the
//! terminal responder in [`crate::api::middleware::error_responder`] decides
//! whether the report's stack is exposed to the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a single request field check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("slug must contain only letters, digits, '-' and '_'")]
    InvalidSlug,

    #[error("slug must be at most {} characters", crate::utils::slug::SLUG_MAX_LENGTH)]
    SlugTooLong,

    #[error("slug '{0}' is reserved")]
    ReservedSlug(String),

    #[error("url is a required field")]
    MissingUrl,

    #[error("url must be a valid URL")]
    InvalidUrl,

    #[error("{0}")]
    MalformedBody(String),
}

/// Error returned by services, repositories and handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error")]
    Database(#[source] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::Conflict(format!(
                "Unique constraint violation on {}",
                db.constraint().unwrap_or("unknown constraint")
            ));
        }

        AppError::Database(e)
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// Full error report carried in the response extensions until the
/// terminal error responder consumes it.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub message: String,
    pub stack: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        }

        let stack = format!("{:?}", anyhow::Error::new(self));

        let mut response = (
            status,
            Json(ErrorBody {
                message: message.clone(),
                stack: None,
            }),
        )
            .into_response();
        response
            .extensions_mut()
            .insert(ErrorReport { message, stack });

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("Link not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Conflict("Slug is taken".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Database(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_error_conversion_keeps_message() {
        let err = AppError::from(ValidationError::InvalidUrl);
        assert!(matches!(err, AppError::Validation(ref m) if m == "url must be a valid URL"));
    }

    #[test]
    fn test_non_unique_sqlx_error_is_database_error() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(err.to_string(), "Database error");
    }

    #[test]
    fn test_response_carries_report_without_stack_in_body() {
        let response = AppError::NotFound("Link not found".into()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let report = response
            .extensions()
            .get::<ErrorReport>()
            .expect("report extension");
        assert_eq!(report.message, "Link not found");
        assert!(report.stack.contains("Link not found"));
    }

    #[test]
    fn test_error_body_omits_missing_stack() {
        let body = ErrorBody {
            message: "Slug is taken".into(),
            stack: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Slug is taken" }));
    }
}

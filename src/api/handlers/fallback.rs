//! Handler for unmatched routes.

use crate::error::AppError;

/// Answers unmatched routes with the standard JSON error body.
pub async fn fallback_handler() -> AppError {
    AppError::NotFound("Not found".to_string())
}

//! Terminal error responder.
//!
//! Every [`AppError`](crate::error::AppError) response passes through here on
//! its way out. In development mode the error stack is added to the JSON
//! body; in production the body keeps only the message.
//!
//! Error responses produced by the router itself (method mismatch, path
//! extractor rejections) carry no report; their plain-text bodies are
//! rewritten into the same `{ "message": ... }` shape.

use axum::{
    Json,
    body::to_bytes,
    extract::{Request, State},
    http::header::{ALLOW, CONTENT_TYPE},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::{ErrorBody, ErrorReport};
use crate::state::AppState;

/// Middleware rewriting error bodies according to the runtime mode.
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/url", post(create_link_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), error_responder::layer));
/// ```
pub async fn layer(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let Some(report) = response.extensions_mut().remove::<ErrorReport>() else {
        return wrap_rejection(response).await;
    };

    if !state.environment.exposes_stack() {
        return response;
    }

    let status = response.status();
    (
        status,
        Json(ErrorBody {
            message: report.message,
            stack: Some(report.stack),
        }),
    )
        .into_response()
}

/// Upper bound on a rejection body read back for its message.
const MAX_REJECTION_BODY: usize = 16 * 1024;

/// Rewrites a non-JSON 4xx/5xx response into an [`ErrorBody`].
///
/// The original body text becomes the message, falling back to the status
/// reason phrase when it is empty. An `Allow` header survives the rewrite.
async fn wrap_rejection(response: Response) -> Response {
    let status = response.status();
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes().starts_with(b"application/json"));

    if !(status.is_client_error() || status.is_server_error()) || is_json {
        return response;
    }

    let (parts, body) = response.into_parts();
    let message = to_bytes(body, MAX_REJECTION_BODY)
        .await
        .ok()
        .and_then(|bytes| String::from_utf8(bytes.to_vec()).ok())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });

    let mut rewritten = (status, Json(ErrorBody { message, stack: None })).into_response();
    if let Some(allow) = parts.headers.get(ALLOW) {
        rewritten.headers_mut().insert(ALLOW, allow.clone());
    }

    rewritten
}

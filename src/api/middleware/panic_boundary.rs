//! Top-level boundary for panicking handlers.

use std::any::Any;

use axum::{
    body::Body,
    http::Response,
    response::IntoResponse,
};
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::error::AppError;
use crate::shutdown::Shutdown;

/// Converts a handler panic into a 500 response and starts a graceful shutdown.
#[derive(Clone)]
pub struct PanicBoundary {
    shutdown: Shutdown,
}

impl PanicBoundary {
    pub fn new(shutdown: Shutdown) -> Self {
        Self { shutdown }
    }
}

impl ResponseForPanic for PanicBoundary {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response<Body> {
        let detail = if let Some(s) = err.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = err.downcast_ref::<&str>() {
            s.to_string()
        } else {
            "unknown panic payload".to_string()
        };

        tracing::error!(panic = %detail, "Handler panicked");
        self.shutdown.trigger_fatal();

        AppError::Internal("Internal server error".to_string()).into_response()
    }
}

/// Creates the panic-catching layer bound to a shutdown handle.
pub fn layer(shutdown: Shutdown) -> CatchPanicLayer<PanicBoundary> {
    CatchPanicLayer::custom(PanicBoundary::new(shutdown))
}

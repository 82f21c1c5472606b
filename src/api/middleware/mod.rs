//! HTTP middleware for request processing.
//!
//! Provides observability, the terminal error responder and the panic boundary.

pub mod error_responder;
pub mod panic_boundary;
pub mod tracing;

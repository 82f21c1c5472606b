//! HTTP layer: request/response contracts, handlers and middleware.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing, error responder and panic boundary
//! - [`routes`] - Link route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

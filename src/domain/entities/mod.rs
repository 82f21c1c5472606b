//! Core domain entities.
//!
//! - [`Link`] - A stored slug to URL mapping
//! - [`NewLink`] - Insert payload for a link; carries only the slug and URL

pub mod link;

pub use link::{Link, NewLink};

//! Request field helpers.
//!
//! - [`slug`] - Slug generation and validation
//! - [`url_validator`] - Destination URL validation

pub mod slug;
pub mod url_validator;

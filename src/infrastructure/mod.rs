//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`persistence`] - Link store implementations (PostgreSQL and in-memory)

pub mod persistence;

//! Link store implementations and their lifecycle.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryLinkRepository`] - In-process storage for local runs and tests
//!
//! [`Store`] picks the backend from `DATABASE_URL`, owns the connection pool,
//! and is opened once at startup and closed on shutdown.

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;

use crate::config::Config;
use crate::domain::repositories::LinkRepository;
use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

/// Scheme selecting the in-memory backend.
pub const MEMORY_SCHEME: &str = "memory://";

/// An opened link store.
pub enum Store {
    Postgres(Arc<PgPool>),
    Memory(Arc<MemoryLinkRepository>),
}

impl Store {
    /// Opens the store described by the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the PostgreSQL pool cannot connect.
    pub async fn connect(config: &Config) -> Result<Self> {
        if config.database_url.starts_with(MEMORY_SCHEME) {
            tracing::warn!("Using in-memory link store; links are lost on exit");
            return Ok(Self::Memory(Arc::new(MemoryLinkRepository::new())));
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
            .idle_timeout(Duration::from_secs(config.db_idle_timeout))
            .max_lifetime(Duration::from_secs(config.db_max_lifetime))
            .connect(&config.database_url)
            .await
            .context("Failed to connect to database")?;
        tracing::info!("Connected to database");

        Ok(Self::Postgres(Arc::new(pool)))
    }

    /// Applies pending schema migrations. A no-op for the memory store.
    pub async fn migrate(&self) -> Result<()> {
        if let Self::Postgres(pool) = self {
            sqlx::migrate!("./migrations")
                .run(pool.as_ref())
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Migrations applied");
        }

        Ok(())
    }

    /// Returns the link repository backed by this store.
    pub fn link_repository(&self) -> Arc<dyn LinkRepository> {
        match self {
            Self::Postgres(pool) => Arc::new(PgLinkRepository::new(pool.clone())),
            Self::Memory(repo) => repo.clone(),
        }
    }

    /// Closes the connection pool, waiting for checked-out connections.
    pub async fn close(&self) {
        if let Self::Postgres(pool) = self {
            pool.close().await;
            tracing::info!("Database pool closed");
        }
    }
}

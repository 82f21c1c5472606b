//! HTTP server initialization and runtime setup.
//!
//! Handles store setup, migrations, and the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::Store;
use crate::routes::app_router;
use crate::shutdown::Shutdown;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link store (PostgreSQL pool or in-memory)
/// - Schema migrations
/// - Axum HTTP server with graceful shutdown
///
/// The store is opened once here and closed after the server has drained.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
/// - A handler panicked (after draining in-flight requests)
pub async fn run(config: Config) -> Result<()> {
    let store = Store::connect(&config).await?;
    store.migrate().await?;

    let state = AppState::new(store.link_repository(), config.environment);
    let shutdown = Shutdown::new();
    let app = app_router(state, shutdown.clone());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    let signal = shutdown.clone();
    let served = axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(async move { signal.wait().await })
    .await;

    store.close().await;
    served?;

    if shutdown.is_fatal() {
        anyhow::bail!("Server stopped after a handler panic");
    }

    tracing::info!("Server stopped");
    Ok(())
}

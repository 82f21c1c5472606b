//! Process shutdown coordination.
//!
//! The server drains in-flight requests when either an OS signal arrives or a
//! handler panics. A panic is treated as fatal: the process exits non-zero
//! once the drain completes.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;

/// Cloneable handle used to request and await shutdown.
#[derive(Clone, Default)]
pub struct Shutdown {
    notify: Arc<Notify>,
    fatal: Arc<AtomicBool>,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a graceful shutdown after an unrecoverable failure.
    pub fn trigger_fatal(&self) {
        self.fatal.store(true, Ordering::SeqCst);
        self.notify.notify_one();
    }

    /// Whether shutdown was caused by an unrecoverable failure.
    pub fn is_fatal(&self) -> bool {
        self.fatal.load(Ordering::SeqCst)
    }

    /// Resolves on SIGINT, SIGTERM, or [`Self::trigger_fatal`].
    pub async fn wait(&self) {
        tokio::select! {
            () = signal() => tracing::info!("Shutdown signal received, draining connections"),
            () = self.notify.notified() => tracing::warn!("Fatal error, draining connections"),
        }
    }
}

/// Resolves on the first termination signal the process receives.
///
/// On Unix this listens for both SIGTERM and SIGINT; elsewhere only Ctrl-C.
async fn signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = sigterm => {}
    }
}

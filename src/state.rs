//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::config::Environment;
use crate::domain::repositories::LinkRepository;

/// State cloned into every request handler.
///
/// Holds the link service built over the store opened at startup; there are
/// no process-wide globals.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    pub environment: Environment,
}

impl AppState {
    pub fn new(link_repository: Arc<dyn LinkRepository>, environment: Environment) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            environment,
        }
    }
}

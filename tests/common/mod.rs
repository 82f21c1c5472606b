#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use slug_redirect::config::Environment;
use slug_redirect::domain::entities::{Link, NewLink};
use slug_redirect::domain::repositories::LinkRepository;
use slug_redirect::error::AppError;
use slug_redirect::infrastructure::persistence::MemoryLinkRepository;
use slug_redirect::routes::{app_router, router};
use slug_redirect::shutdown::Shutdown;
use slug_redirect::state::AppState;
use std::sync::Arc;

/// Store whose every call fails as if the database were unreachable.
pub struct UnreachableLinkRepository;

#[async_trait]
impl LinkRepository for UnreachableLinkRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Link, AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_slug(&self, _slug: &str) -> Result<Option<Link>, AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}

pub fn create_test_server_with(
    repository: Arc<dyn LinkRepository>,
    environment: Environment,
) -> TestServer {
    let state = AppState::new(repository, environment);
    TestServer::new(router(state, Shutdown::new())).unwrap()
}

pub fn create_test_server(environment: Environment) -> (TestServer, Arc<MemoryLinkRepository>) {
    let repository = Arc::new(MemoryLinkRepository::new());
    let server = create_test_server_with(repository.clone(), environment);
    (server, repository)
}

/// Serves the full application stack, trailing-slash normalization included.
pub fn create_app_test_server(environment: Environment) -> (TestServer, Arc<MemoryLinkRepository>) {
    let repository = Arc::new(MemoryLinkRepository::new());
    let state = AppState::new(repository.clone(), environment);
    let app = app_router(state, Shutdown::new());
    let server = TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap();
    (server, repository)
}

pub async fn create_test_link(repository: &MemoryLinkRepository, slug: &str, url: &str) -> Link {
    repository
        .create(NewLink {
            slug: slug.to_string(),
            url: url.to_string(),
        })
        .await
        .unwrap()
}

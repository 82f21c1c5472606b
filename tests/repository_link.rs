//! PostgreSQL repository tests. Run with a live database:
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo test --test repository_link -- --ignored
//! ```

use slug_redirect::domain::entities::NewLink;
use slug_redirect::domain::repositories::LinkRepository;
use slug_redirect::error::AppError;
use slug_redirect::infrastructure::persistence::PgLinkRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_link(slug: &str, url: &str) -> NewLink {
    NewLink {
        slug: slug.to_string(),
        url: url.to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo
        .create(new_link("test123", "https://example.com"))
        .await
        .unwrap();

    assert_eq!(link.slug, "test123");
    assert_eq!(link.url, "https://example.com");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_slug(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    let created = repo
        .create(new_link("abc123", "https://example.com/a"))
        .await
        .unwrap();

    let found = repo.find_by_slug("abc123").await.unwrap();

    assert_eq!(found, Some(created));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_slug_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.find_by_slug("notfound").await.unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_slug_is_conflict(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.create(new_link("dup", "https://first.com"))
        .await
        .unwrap();

    let result = repo.create(new_link("dup", "https://second.com")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    let kept = repo.find_by_slug("dup").await.unwrap().unwrap();
    assert_eq!(kept.url, "https://first.com");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_ping(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    assert!(repo.ping().await.is_ok());
}

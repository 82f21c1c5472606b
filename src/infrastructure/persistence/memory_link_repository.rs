//! In-memory implementation of the link repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Link store kept in process memory.
///
/// The slug check and the insert happen under one write lock, so the
/// uniqueness guarantee matches the PostgreSQL constraint.
#[derive(Default)]
pub struct MemoryLinkRepository {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    links: HashMap<String, Link>,
    last_id: i64,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub async fn len(&self) -> usize {
        self.inner.read().await.links.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut guard = self.inner.write().await;
        let Inner { links, last_id } = &mut *guard;

        match links.entry(new_link.slug.clone()) {
            Entry::Occupied(_) => Err(AppError::Conflict(format!(
                "Unique constraint violation on slug '{}'",
                new_link.slug
            ))),
            Entry::Vacant(slot) => {
                *last_id += 1;
                Ok(slot.insert(new_link.into_link(*last_id)).clone())
            }
        }
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        Ok(self.inner.read().await.links.get(slug).cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

//! Link creation and slug resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::slug::{generate_slug, validate_slug};
use crate::utils::url_validator::validate_url;
use tracing::{debug, info, warn};

/// Message returned when a slug is already stored.
pub const SLUG_TAKEN: &str = "Slug is taken";

/// Message returned when a slug does not resolve.
pub const LINK_NOT_FOUND: &str = "Link not found";

/// Service for creating links and resolving slugs.
///
/// Holds no link data of its own; every read and write goes to the repository.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a link from raw request fields.
    ///
    /// # Flow
    ///
    /// 1. An absent or empty `slug` is replaced by a generated one
    /// 2. The slug is trimmed, lowercased and validated
    /// 3. The URL is validated
    /// 4. Only the slug and URL are handed to the repository
    ///
    /// Generated slugs are not checked for uniqueness up front; a collision is
    /// reported by the store and surfaces as a conflict.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the slug or URL is invalid.
    /// Returns [`AppError::Conflict`] with [`SLUG_TAKEN`] if the slug exists.
    pub async fn create_link(
        &self,
        slug: Option<String>,
        url: Option<String>,
    ) -> Result<Link, AppError> {
        let slug = match slug.filter(|s| !s.is_empty()) {
            Some(custom) => custom,
            None => generate_slug(),
        };

        let slug = validate_slug(&slug)?;
        let url = validate_url(url.as_deref())?;

        match self.link_repository.create(NewLink { slug, url }).await {
            Ok(link) => {
                info!(slug = %link.slug, id = link.id, "Link created");
                Ok(link)
            }
            Err(AppError::Conflict(reason)) => {
                warn!(%reason, "Slug conflict");
                Err(AppError::Conflict(SLUG_TAKEN.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    /// Resolves a slug to its stored link.
    ///
    /// The lookup key is lowercased, matching how slugs are stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] with [`LINK_NOT_FOUND`] on a miss.
    pub async fn get_link_by_slug(&self, slug: &str) -> Result<Link, AppError> {
        let slug = slug.to_lowercase();

        let Some(link) = self.link_repository.find_by_slug(&slug).await? else {
            debug!(%slug, "Slug miss");
            return Err(AppError::NotFound(LINK_NOT_FOUND.to_string()));
        };

        Ok(link)
    }

    /// Checks that the underlying store answers.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}

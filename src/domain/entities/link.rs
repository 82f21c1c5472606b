//! Link entity representing a slug to URL mapping.

/// A stored link.
///
/// Links are created once and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub slug: String,
    pub url: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, slug: String, url: String) -> Self {
        Self { id, slug, url }
    }
}

/// Input data for creating a new link.
///
/// `slug` is expected to be validated and lowercased already.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub slug: String,
    pub url: String,
}

impl NewLink {
    /// Builds the stored record once the store has assigned an id.
    pub fn into_link(self, id: i64) -> Link {
        Link::new(id, self.slug, self.url)
    }
}

//! Slug generation and validation utilities.
//!
//! Generated slugs are short and drawn from an alphabet without look-alike
//! characters (`0`/`o`, `1`/`l`/`i`). User-provided slugs are trimmed,
//! lowercased and checked against the URL-safe character class.

use crate::error::ValidationError;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// Characters used for generated slugs.
pub const SLUG_ALPHABET: &[u8] = b"23456789abcdefghjkmnpqrstuvwxyz";

/// Length of a generated slug.
pub const SLUG_LENGTH: usize = 5;

/// Maximum length of a user-provided slug.
pub const SLUG_MAX_LENGTH: usize = 64;

/// Slugs that collide with service routes.
const RESERVED_SLUGS: &[&str] = &["health", "url"];

static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9_-]+$").expect("slug pattern is a valid regex")
});

/// Generates a random slug of [`SLUG_LENGTH`] characters from [`SLUG_ALPHABET`].
///
/// Uniqueness is not checked here; a collision surfaces as a conflict when
/// the link is stored.
pub fn generate_slug() -> String {
    let mut rng = rand::rng();

    (0..SLUG_LENGTH)
        .map(|_| SLUG_ALPHABET[rng.random_range(0..SLUG_ALPHABET.len())] as char)
        .collect()
}

/// Normalizes and validates a slug.
///
/// # Rules
///
/// - Surrounding whitespace is trimmed
/// - Letters are lowercased
/// - At most [`SLUG_MAX_LENGTH`] characters
/// - Remaining characters must be ASCII letters, digits, `-` or `_`
/// - Route names (`health`, `url`) are rejected
///
/// # Errors
///
/// Returns [`ValidationError::SlugTooLong`], [`ValidationError::InvalidSlug`]
/// or [`ValidationError::ReservedSlug`].
pub fn validate_slug(raw: &str) -> Result<String, ValidationError> {
    let slug = raw.trim().to_lowercase();

    if slug.chars().count() > SLUG_MAX_LENGTH {
        return Err(ValidationError::SlugTooLong);
    }

    if !SLUG_REGEX.is_match(&slug) {
        return Err(ValidationError::InvalidSlug);
    }

    if RESERVED_SLUGS.contains(&slug.as_str()) {
        return Err(ValidationError::ReservedSlug(slug));
    }

    Ok(slug)
}

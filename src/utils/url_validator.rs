//! Destination URL validation.

use crate::error::ValidationError;
use url::Url;

/// Schemes accepted for destination URLs.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// Validates a destination URL and returns it unchanged.
///
/// The URL must be absolute, use one of [`ALLOWED_SCHEMES`], name a host, and
/// contain no whitespace or control characters. The original string is kept
/// as submitted so a redirect points at exactly what the client sent.
///
/// # Errors
///
/// - [`ValidationError::MissingUrl`] when the value is absent or empty
/// - [`ValidationError::InvalidUrl`] otherwise
pub fn validate_url(raw: Option<&str>) -> Result<String, ValidationError> {
    let raw = match raw {
        Some(value) if !value.is_empty() => value,
        _ => return Err(ValidationError::MissingUrl),
    };

    if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ValidationError::InvalidUrl);
    }

    let parsed = Url::parse(raw).map_err(|_| ValidationError::InvalidUrl)?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(ValidationError::InvalidUrl);
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(raw.to_string()),
        _ => Err(ValidationError::InvalidUrl),
    }
}

//! DTOs for link creation and the stored link record.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Body of `POST /url`.
///
/// Both fields are optional at the serde level so that a missing `url` is
/// reported by the URL validator rather than as a deserialization failure.
/// Unknown fields are ignored and never reach the store.
#[derive(Debug, Default, Deserialize)]
pub struct CreateLinkRequest {
    pub slug: Option<String>,
    pub url: Option<String>,
}

/// A stored link as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub slug: String,
    pub url: String,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            slug: link.slug,
            url: link.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_ignores_unknown_fields() {
        let request: CreateLinkRequest = serde_json::from_value(json!({
            "slug": "x",
            "url": "https://a.com",
            "foo": "bar"
        }))
        .unwrap();

        assert_eq!(request.slug.as_deref(), Some("x"));
        assert_eq!(request.url.as_deref(), Some("https://a.com"));
    }

    #[test]
    fn test_request_accepts_null_slug() {
        let request: CreateLinkRequest =
            serde_json::from_value(json!({ "slug": null, "url": "https://a.com" })).unwrap();

        assert!(request.slug.is_none());
    }

    #[test]
    fn test_response_uses_underscore_id() {
        let response = LinkResponse::from(Link::new(
            9,
            "abc".to_string(),
            "https://a.com".to_string(),
        ));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "_id": 9, "slug": "abc", "url": "https://a.com" })
        );
    }
}

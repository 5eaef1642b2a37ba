use chrono::{DateTime, Utc};
use url::Url;

use crate::error::DomainError;

/// Schemes accepted for `image_url`.
const IMAGE_URL_SCHEMES: [&str; 6] = ["http", "https", "ftp", "file", "jar", "mailto"];

pub(crate) const INVALID_IMAGE_URL: &str = "imageUrl must be a valid URL";

/// Post entity - a single entry on the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Post {
    /// Attach a store-assigned id to a not yet persisted post.
    pub fn from_new(id: i64, post: NewPost) -> Self {
        Self {
            id,
            author: post.author,
            content: post.content,
            image_url: post.image_url,
            created_at: post.created_at,
            modified_at: post.modified_at,
        }
    }

    /// Refresh `modified_at`. Never moves it before `created_at`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.modified_at = now.max(self.created_at);
    }
}

/// A validated post that has no id yet. The store assigns one on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub author: String,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl NewPost {
    /// Create a new post stamped at `now`.
    pub fn new(
        author: String,
        content: String,
        image_url: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            author,
            content,
            image_url,
            created_at: now,
            modified_at: now,
        }
    }
}

/// Raw fields of a create request, before validation.
///
/// `id` is whatever the client sent; it is never used.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub id: Option<i64>,
    pub author: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
}

/// Partial update. `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub author: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.content.is_none() && self.image_url.is_none()
    }
}

/// Trim an image URL and validate it.
///
/// Blank input means "no image" and yields `Ok(None)`.
pub fn normalize_image_url(raw: &str) -> Result<Option<String>, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match Url::parse(trimmed) {
        Ok(url) if IMAGE_URL_SCHEMES.contains(&url.scheme()) => Ok(Some(trimmed.to_string())),
        _ => Err(DomainError::validation(INVALID_IMAGE_URL)),
    }
}

/// Require a field that is present and not blank. The value is returned as given.
pub(crate) fn require_text(value: Option<String>, message: &str) -> Result<String, DomainError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(DomainError::validation(message)),
    }
}

/// Trim a provided field and reject it if nothing is left.
pub(crate) fn trimmed_non_empty(value: &str, message: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(message));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    #[test]
    fn test_image_url_blank_is_absent() {
        assert_eq!(normalize_image_url("").unwrap(), None);
        assert_eq!(normalize_image_url("   \t").unwrap(), None);
    }

    #[test]
    fn test_image_url_is_trimmed() {
        let url = normalize_image_url("  https://example.com/a.png \n").unwrap();
        assert_eq!(url.as_deref(), Some("https://example.com/a.png"));
    }

    #[test]
    fn test_image_url_rejects_garbage() {
        for raw in ["not-a-url", "example.com/a.png", "/relative/path.png"] {
            match normalize_image_url(raw) {
                Err(DomainError::Validation(msg)) => assert_eq!(msg, INVALID_IMAGE_URL),
                other => panic!("expected validation error for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_image_url_rejects_unknown_scheme() {
        assert!(normalize_image_url("javascript:alert(1)").is_err());
        assert!(normalize_image_url("data:image/png;base64,AAAA").is_err());
    }

    #[test]
    fn test_image_url_accepts_every_supported_scheme() {
        for raw in [
            "http://example.com/a.png",
            "https://example.com/a.png",
            "ftp://files.example.com/pic.jpg",
            "file:///tmp/pic.jpg",
            "jar:file:/tmp/a.jar!/img.png",
            "mailto:someone@example.com",
        ] {
            assert_eq!(
                normalize_image_url(raw).unwrap().as_deref(),
                Some(raw),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_require_text_keeps_value_as_given() {
        let value = require_text(Some(" Alice ".to_string()), "author").unwrap();
        assert_eq!(value, " Alice ");
        assert!(require_text(Some("   ".to_string()), "author").is_err());
        assert!(require_text(None, "author").is_err());
    }

    #[test]
    fn test_trimmed_non_empty() {
        assert_eq!(trimmed_non_empty("  Bob ", "author").unwrap(), "Bob");
        assert!(trimmed_non_empty(" ", "author").is_err());
    }

    #[test]
    fn test_touch_never_precedes_created_at() {
        let created = Utc::now();
        let mut post = Post::from_new(
            1,
            NewPost::new("a".into(), "c".into(), None, created),
        );

        post.touch(created - Duration::seconds(5));
        assert_eq!(post.modified_at, created);

        let later = created + Duration::seconds(5);
        post.touch(later);
        assert_eq!(post.modified_at, later);
        assert_eq!(post.created_at, created);
    }
}

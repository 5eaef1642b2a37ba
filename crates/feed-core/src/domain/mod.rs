//! Domain entities - the core business objects.

mod post;

pub use post::{NewPost, Post, PostDraft, PostPatch, normalize_image_url};

pub(crate) use post::{require_text, trimmed_non_empty};

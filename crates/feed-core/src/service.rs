//! Post service - validation and orchestration on top of the post store.

use std::sync::Arc;

use crate::domain::{NewPost, Post, PostDraft, PostPatch, normalize_image_url};
use crate::domain::{require_text, trimmed_non_empty};
use crate::error::{DomainError, RepoError};
use crate::ports::{Clock, PostRepository, SystemClock};

const BODY_REQUIRED: &str = "Request body is required";

/// Post operations exposed to the HTTP layer.
///
/// Every operation validates its input completely before touching the store,
/// and each mutation is a single store call.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    clock: Arc<dyn Clock>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { posts, clock }
    }

    /// Service stamping posts with the wall clock.
    pub fn with_system_clock(posts: Arc<dyn PostRepository>) -> Self {
        Self::new(posts, Arc::new(SystemClock))
    }

    /// All posts, most recent first.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.posts.find_all_by_created_desc().await?;
        tracing::debug!(count = posts.len(), "Listed posts");
        Ok(posts)
    }

    pub async fn get(&self, id: i64) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// Validate a draft and store it as a new post.
    pub async fn create(&self, draft: Option<PostDraft>) -> Result<Post, DomainError> {
        let draft = draft.ok_or_else(|| DomainError::validation(BODY_REQUIRED))?;

        let author = require_text(draft.author, "author is required and cannot be empty")?;
        let content = require_text(draft.content, "content is required and cannot be empty")?;
        let image_url = match draft.image_url {
            Some(raw) => normalize_image_url(&raw)?,
            None => None,
        };

        if let Some(client_id) = draft.id {
            tracing::debug!(client_id, "Ignoring client-supplied post id");
        }

        let post = self
            .posts
            .insert(NewPost::new(author, content, image_url, self.clock.now()))
            .await?;

        tracing::info!(post_id = post.id, "Post created");
        Ok(post)
    }

    /// Apply a partial update to an existing post.
    pub async fn update(&self, id: i64, patch: Option<PostPatch>) -> Result<Post, DomainError> {
        let mut post = self.get(id).await?;
        let patch = patch.ok_or_else(|| DomainError::validation(BODY_REQUIRED))?;

        if patch.is_empty() {
            tracing::debug!(post_id = id, "Empty patch, only refreshing modification time");
        }

        if let Some(author) = patch.author {
            post.author = trimmed_non_empty(&author, "author cannot be empty")?;
        }
        if let Some(content) = patch.content {
            post.content = trimmed_non_empty(&content, "content cannot be empty")?;
        }
        if let Some(raw) = patch.image_url {
            post.image_url = normalize_image_url(&raw)?;
        }

        post.touch(self.clock.now());

        let post = self.posts.update(post).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::post_not_found(id),
            other => other.into(),
        })?;

        tracing::info!(post_id = id, "Post updated");
        Ok(post)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.posts.delete_by_id(id).await? {
            return Err(DomainError::post_not_found(id));
        }

        tracing::info!(post_id = id, "Post deleted");
        Ok(())
    }
}

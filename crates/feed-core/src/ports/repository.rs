use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Durable mapping from post id to post.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post under a freshly assigned id.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// All posts, newest `created_at` first. Equal timestamps are ordered by id, highest first.
    async fn find_all_by_created_desc(&self) -> Result<Vec<Post>, RepoError>;

    /// Remove a post. Returns whether it existed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, RepoError>;

    /// Write back the mutable fields of an existing post.
    ///
    /// `created_at` is never written. Returns `RepoError::NotFound` if the row is gone.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;
}

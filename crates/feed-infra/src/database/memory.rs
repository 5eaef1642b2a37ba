//! In-memory post store - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use feed_core::domain::{NewPost, Post};
use feed_core::error::RepoError;
use feed_core::ports::PostRepository;

#[derive(Default)]
struct Rows {
    posts: BTreeMap<i64, Post>,
    last_id: i64,
}

/// Post store using a map behind an async RwLock.
///
/// Ids are never reused, even after a delete.
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    rows: RwLock<Rows>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut rows = self.rows.write().await;
        rows.last_id += 1;

        let post = Post::from_new(rows.last_id, post);
        rows.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        Ok(self.rows.read().await.posts.get(&id).cloned())
    }

    async fn find_all_by_created_desc(&self) -> Result<Vec<Post>, RepoError> {
        let rows = self.rows.read().await;

        let mut posts: Vec<Post> = rows.posts.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(posts)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, RepoError> {
        Ok(self.rows.write().await.posts.remove(&id).is_some())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut rows = self.rows.write().await;
        let stored = rows.posts.get_mut(&post.id).ok_or(RepoError::NotFound)?;

        stored.author = post.author;
        stored.content = post.content;
        stored.image_url = post.image_url;
        stored.modified_at = post.modified_at;
        Ok(stored.clone())
    }
}

//! In-memory post store - used when no database is configured and as a
//! test double. Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use folio_core::StoreError;
use folio_core::domain::{BlogPost, PostPatch};
use folio_core::ports::PostStore;

/// Post store backed by a `Vec` behind an async RwLock.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    /// Pre-seeded store, mostly for tests.
    pub fn with_posts(posts: Vec<BlogPost>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list_all(&self) -> Result<Vec<BlogPost>, StoreError> {
        let posts = self.posts.read().await;
        let mut ordered = posts.clone();
        ordered.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(ordered)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn insert(&self, post: BlogPost) -> Result<BlogPost, StoreError> {
        let mut posts = self.posts.write().await;
        if posts.iter().any(|p| p.slug == post.slug) {
            return Err(StoreError::Constraint(format!(
                "slug '{}' already exists",
                post.slug
            )));
        }
        posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<BlogPost>, StoreError> {
        let mut posts = self.posts.write().await;
        match posts.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                patch.apply(post);
                Ok(Some(post.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        Ok(posts.len() < before)
    }
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, PostPatch};
use crate::error::StoreError;

/// Remote post store: the single source of truth when reachable.
///
/// Adapters report failure through `StoreError`; the fallback and sentinel
/// semantics live one layer up in [`crate::repository::PostRepository`].
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, ordered by `published_at` descending.
    async fn list_all(&self) -> Result<Vec<BlogPost>, StoreError>;

    /// Exact, case-sensitive slug lookup. `Ok(None)` means the store
    /// answered and genuinely has no such post.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, StoreError>;

    /// Insert a fully materialized post and return the stored row.
    async fn insert(&self, post: BlogPost) -> Result<BlogPost, StoreError>;

    /// Apply a partial update to the post with the given id, stamping
    /// `updated_at` as part of the write. `Ok(None)` when no such post.
    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<BlogPost>, StoreError>;

    /// Hard delete. `Ok(false)` when no such post existed.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// Binary object store for uploaded assets (post images).
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Store `bytes` under `key`, overwriting any existing object.
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;

    /// Publicly resolvable URL for a stored key.
    fn public_url(&self, key: &str) -> String;
}

//! Post repository - mediates all reads and writes against the injected
//! stores, with deterministic fallback behavior.
//!
//! Reads never fail visibly: a store error or an empty store degrades to
//! the fixed fallback collection. Writes signal failure through `None` /
//! `false` sentinels only, with no retries.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{BlogPost, PostDraft, PostPatch};
use crate::fallback::fallback_posts;
use crate::ports::{AssetStore, PostStore};

/// Service wrapping a [`PostStore`] and an [`AssetStore`].
///
/// Explicitly constructed and injected (no module-level singleton), so
/// tests can substitute stub stores.
#[derive(Clone)]
pub struct PostRepository {
    posts: Arc<dyn PostStore>,
    assets: Arc<dyn AssetStore>,
}

impl PostRepository {
    pub fn new(posts: Arc<dyn PostStore>, assets: Arc<dyn AssetStore>) -> Self {
        Self { posts, assets }
    }

    /// All posts, newest first. Total: never fails and never empty.
    ///
    /// A store error or a configured-but-empty store both yield the
    /// fallback collection, so the listing page always has content.
    pub async fn list_all(&self) -> Vec<BlogPost> {
        match self.posts.list_all().await {
            Ok(posts) if !posts.is_empty() => posts,
            Ok(_) => {
                tracing::debug!("Store is empty, serving fallback posts");
                fallback_posts()
            }
            Err(e) => {
                tracing::warn!("Store unavailable, serving fallback posts: {e}");
                fallback_posts()
            }
        }
    }

    /// Exact, case-sensitive slug lookup; searches the fallback collection
    /// when the store errors or has no match. `None` only when the slug is
    /// absent everywhere.
    pub async fn get_by_slug(&self, slug: &str) -> Option<BlogPost> {
        match self.posts.find_by_slug(slug).await {
            Ok(Some(post)) => Some(post),
            Ok(None) => fallback_posts().into_iter().find(|p| p.slug == slug),
            Err(e) => {
                tracing::warn!("Store unavailable, searching fallback posts: {e}");
                fallback_posts().into_iter().find(|p| p.slug == slug)
            }
        }
    }

    /// Persist a new post. The slug defaults to `create_slug(title)` and
    /// `id`/`created_at`/`updated_at` are assigned at insert time.
    /// `None` when the store rejects the write.
    pub async fn create(&self, draft: PostDraft) -> Option<BlogPost> {
        let post = BlogPost::from_draft(draft);
        match self.posts.insert(post).await {
            Ok(stored) => Some(stored),
            Err(e) => {
                tracing::error!("Failed to create post: {e}");
                None
            }
        }
    }

    /// Partial update; `updated_at` is stamped to now as part of the
    /// write, overriding any caller intent. `None` on not-found or store
    /// error (not distinguished).
    pub async fn update(&self, id: Uuid, patch: PostPatch) -> Option<BlogPost> {
        match self.posts.update(id, patch).await {
            Ok(updated) => updated,
            Err(e) => {
                tracing::error!("Failed to update post {id}: {e}");
                None
            }
        }
    }

    /// Hard delete. `false` on any failure, including not-found.
    pub async fn delete(&self, id: Uuid) -> bool {
        match self.posts.delete(id).await {
            Ok(deleted) => deleted,
            Err(e) => {
                tracing::error!("Failed to delete post {id}: {e}");
                false
            }
        }
    }

    /// Store an uploaded binary under `folder/<random>.<ext>` and return
    /// its public URL, or `None` on failure.
    ///
    /// The key is a fresh UUID rather than the original filename, so two
    /// uploads in the same folder can never overwrite each other.
    pub async fn upload_asset(
        &self,
        bytes: &[u8],
        original_filename: &str,
        folder: &str,
    ) -> Option<String> {
        let key = match original_filename.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => format!("{folder}/{}.{ext}", Uuid::new_v4()),
            _ => format!("{folder}/{}", Uuid::new_v4()),
        };
        match self.assets.put(&key, bytes).await {
            Ok(()) => Some(self.assets.public_url(&key)),
            Err(e) => {
                tracing::error!("Failed to upload asset to {key}: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use async_trait::async_trait;
    use chrono::Utc;

    /// Stub store: serves a fixed post list, or errors on everything.
    struct StubStore {
        posts: Vec<BlogPost>,
        fail: bool,
    }

    impl StubStore {
        fn failing() -> Self {
            Self {
                posts: vec![],
                fail: true,
            }
        }

        fn with(posts: Vec<BlogPost>) -> Self {
            Self { posts, fail: false }
        }
    }

    #[async_trait]
    impl PostStore for StubStore {
        async fn list_all(&self) -> Result<Vec<BlogPost>, StoreError> {
            if self.fail {
                return Err(StoreError::Connection("stub down".to_string()));
            }
            Ok(self.posts.clone())
        }

        async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, StoreError> {
            if self.fail {
                return Err(StoreError::Connection("stub down".to_string()));
            }
            Ok(self.posts.iter().find(|p| p.slug == slug).cloned())
        }

        async fn insert(&self, post: BlogPost) -> Result<BlogPost, StoreError> {
            if self.fail {
                return Err(StoreError::Query("stub rejected insert".to_string()));
            }
            Ok(post)
        }

        async fn update(
            &self,
            id: Uuid,
            patch: PostPatch,
        ) -> Result<Option<BlogPost>, StoreError> {
            if self.fail {
                return Err(StoreError::Query("stub rejected update".to_string()));
            }
            Ok(self.posts.iter().find(|p| p.id == id).cloned().map(|mut p| {
                patch.apply(&mut p);
                p
            }))
        }

        async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
            if self.fail {
                return Err(StoreError::Query("stub rejected delete".to_string()));
            }
            Ok(self.posts.iter().any(|p| p.id == id))
        }
    }

    /// Asset stub recording nothing; optionally fails every put.
    struct StubAssets {
        fail: bool,
    }

    #[async_trait]
    impl AssetStore for StubAssets {
        async fn put(&self, _key: &str, _bytes: &[u8]) -> Result<(), StoreError> {
            if self.fail {
                return Err(StoreError::Connection("stub down".to_string()));
            }
            Ok(())
        }

        fn public_url(&self, key: &str) -> String {
            format!("https://assets.example.com/{key}")
        }
    }

    fn repo(store: StubStore) -> PostRepository {
        PostRepository::new(Arc::new(store), Arc::new(StubAssets { fail: false }))
    }

    fn sample_post(slug: &str) -> BlogPost {
        BlogPost::from_draft(PostDraft {
            title: slug.replace('-', " "),
            content: "body".to_string(),
            excerpt: "summary".to_string(),
            image_url: None,
            published_at: Utc::now(),
            slug: Some(slug.to_string()),
            tags: vec![],
        })
    }

    #[tokio::test]
    async fn list_all_is_total_under_store_failure() {
        let posts = repo(StubStore::failing()).list_all().await;
        assert!(!posts.is_empty());
        assert_eq!(
            posts.iter().map(|p| p.id).collect::<Vec<_>>(),
            fallback_posts().iter().map(|p| p.id).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn list_all_falls_back_for_empty_store() {
        let posts = repo(StubStore::with(vec![])).list_all().await;
        assert_eq!(posts.len(), fallback_posts().len());
    }

    #[tokio::test]
    async fn list_all_prefers_store_content() {
        let stored = sample_post("from-the-store");
        let posts = repo(StubStore::with(vec![stored.clone()])).list_all().await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, stored.id);
    }

    #[tokio::test]
    async fn get_by_slug_hits_store_first() {
        let stored = sample_post("a-real-post");
        let found = repo(StubStore::with(vec![stored.clone()]))
            .get_by_slug("a-real-post")
            .await;
        assert_eq!(found.map(|p| p.id), Some(stored.id));
    }

    #[tokio::test]
    async fn get_by_slug_searches_fallback_on_store_error() {
        let fallback_slug = fallback_posts()[0].slug.clone();
        let found = repo(StubStore::failing()).get_by_slug(&fallback_slug).await;
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn get_by_slug_is_none_when_absent_everywhere() {
        assert!(
            repo(StubStore::failing())
                .get_by_slug("no-such-post")
                .await
                .is_none()
        );
        assert!(
            repo(StubStore::with(vec![]))
                .get_by_slug("no-such-post")
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn get_by_slug_is_case_sensitive() {
        let stored = sample_post("exact-slug");
        let repo = repo(StubStore::with(vec![stored]));
        assert!(repo.get_by_slug("Exact-Slug").await.is_none());
        assert!(repo.get_by_slug("exact-slug").await.is_some());
    }

    #[tokio::test]
    async fn create_derives_slug_and_returns_stored_post() {
        let created = repo(StubStore::with(vec![]))
            .create(PostDraft {
                title: "Hello, World!".to_string(),
                content: "body".to_string(),
                excerpt: "summary".to_string(),
                image_url: None,
                published_at: Utc::now(),
                slug: None,
                tags: vec!["rust".to_string()],
            })
            .await;
        let created = created.expect("store accepted the write");
        assert_eq!(created.slug, "hello-world");
    }

    #[tokio::test]
    async fn write_failures_yield_sentinels_not_panics() {
        let repo = repo(StubStore::failing());

        let draft = PostDraft {
            title: "Doomed".to_string(),
            content: "body".to_string(),
            excerpt: "summary".to_string(),
            image_url: None,
            published_at: Utc::now(),
            slug: None,
            tags: vec![],
        };
        assert!(repo.create(draft).await.is_none());
        assert!(
            repo.update(Uuid::new_v4(), PostPatch::default())
                .await
                .is_none()
        );
        assert!(!repo.delete(Uuid::new_v4()).await);
    }

    #[tokio::test]
    async fn update_of_missing_post_is_none() {
        let result = repo(StubStore::with(vec![]))
            .update(Uuid::new_v4(), PostPatch::default())
            .await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn upload_namespaces_key_and_keeps_extension() {
        let repo = repo(StubStore::with(vec![]));
        let url = repo
            .upload_asset(b"png bytes", "cover photo.png", "posts")
            .await
            .expect("upload succeeds");
        assert!(url.starts_with("https://assets.example.com/posts/"));
        assert!(url.ends_with(".png"));
        // Key is random, not derived from the filename.
        assert!(!url.contains("cover"));

        let other = repo
            .upload_asset(b"png bytes", "cover photo.png", "posts")
            .await
            .expect("upload succeeds");
        assert_ne!(url, other);
    }

    #[tokio::test]
    async fn upload_failure_is_none() {
        let repo = PostRepository::new(
            Arc::new(StubStore::with(vec![])),
            Arc::new(StubAssets { fail: true }),
        );
        assert!(repo.upload_asset(b"x", "a.png", "posts").await.is_none());
    }
}

//! Filesystem-backed asset store.
//!
//! Objects land under a local root directory and are served by whatever
//! static file host fronts that directory; `public_url` joins the key onto
//! the configured public base.

use std::path::PathBuf;

use async_trait::async_trait;

use folio_core::StoreError;
use folio_core::ports::AssetStore;

pub struct FsAssetStore {
    root: PathBuf,
    public_base: String,
}

impl FsAssetStore {
    pub fn new(root: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        let public_base = public_base.into();
        Self {
            root: root.into(),
            public_base: public_base.trim_end_matches('/').to_string(),
        }
    }

    fn resolve(&self, key: &str) -> Result<PathBuf, StoreError> {
        // Keys come from the repository layer (folder/<uuid>.<ext>), but
        // refuse anything that could escape the root.
        if key.split('/').any(|part| part.is_empty() || part == "..") {
            return Err(StoreError::Constraint(format!("invalid asset key '{key}'")));
        }
        Ok(key.split('/').fold(self.root.clone(), |p, part| p.join(part)))
    }
}

#[async_trait]
impl AssetStore for FsAssetStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.resolve(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Connection(e.to_string()))?;
        }
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        tracing::debug!(asset_key = %key, size = bytes.len(), "Stored asset");
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{key}", self.public_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_writes_under_root_and_url_joins_base() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::new(dir.path(), "https://cdn.example.com/blog-images/");

        store.put("posts/abc123.png", b"bytes").await.unwrap();

        let written = dir.path().join("posts").join("abc123.png");
        assert_eq!(std::fs::read(written).unwrap(), b"bytes");
        assert_eq!(
            store.public_url("posts/abc123.png"),
            "https://cdn.example.com/blog-images/posts/abc123.png"
        );
    }

    #[tokio::test]
    async fn put_overwrites_existing_object() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::new(dir.path(), "https://cdn.example.com");

        store.put("posts/k.bin", b"one").await.unwrap();
        store.put("posts/k.bin", b"two").await.unwrap();

        let written = dir.path().join("posts").join("k.bin");
        assert_eq!(std::fs::read(written).unwrap(), b"two");
    }

    #[tokio::test]
    async fn traversal_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::new(dir.path(), "https://cdn.example.com");

        for key in ["../escape.png", "posts/../../etc/passwd", "/absolute", ""] {
            assert!(store.put(key, b"x").await.is_err(), "key {key:?}");
        }
    }
}

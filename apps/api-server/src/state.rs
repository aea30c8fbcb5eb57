//! Application state - shared across all handlers.

use std::sync::Arc;

use folio_core::PostRepository;
use folio_core::chat::ChatResponder;
use folio_core::ports::{AssetStore, PostStore};
use folio_infra::memory::InMemoryPostStore;
use folio_infra::storage::FsAssetStore;

#[cfg(feature = "postgres")]
use folio_infra::database::{self, PostgresPostStore};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostRepository,
    pub responder: Arc<ChatResponder>,
    /// Which post store backs the repository ("postgres" or "memory");
    /// surfaced by the health endpoint so a degraded start is visible.
    pub store_backend: &'static str,
}

impl AppState {
    /// Build the application state with appropriate store implementations.
    ///
    /// Total by design: a missing or unreachable database degrades to the
    /// in-memory store, which in turn means reads serve the fallback
    /// collection. The server always comes up.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let (store, store_backend): (Arc<dyn PostStore>, &'static str) = match &config.database {
            Some(db_config) => match database::connect(db_config).await {
                Ok(conn) => (Arc::new(PostgresPostStore::new(conn)), "postgres"),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory store.",
                        e
                    );
                    (Arc::new(InMemoryPostStore::new()), "memory")
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running with the in-memory store.");
                (Arc::new(InMemoryPostStore::new()), "memory")
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (store, store_backend): (Arc<dyn PostStore>, &'static str) = {
            tracing::info!("Built without the postgres feature - using the in-memory store");
            (Arc::new(InMemoryPostStore::new()), "memory")
        };

        let assets: Arc<dyn AssetStore> = Arc::new(FsAssetStore::new(
            config.assets.root.clone(),
            config.assets.public_base.clone(),
        ));

        tracing::info!("Application state initialized");

        Self {
            posts: PostRepository::new(store, assets),
            responder: Arc::new(ChatResponder::default()),
            store_backend,
        }
    }
}

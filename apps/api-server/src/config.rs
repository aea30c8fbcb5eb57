//! Application configuration loaded from environment variables.

use std::env;

#[cfg(feature = "postgres")]
use folio_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    #[cfg(feature = "postgres")]
    pub database: Option<DatabaseConfig>,
    pub assets: AssetConfig,
}

/// Where uploaded assets land on disk and where clients fetch them from.
#[derive(Debug, Clone)]
pub struct AssetConfig {
    pub root: String,
    pub public_base: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        #[cfg(feature = "postgres")]
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
        });

        let assets = AssetConfig {
            root: env::var("ASSET_ROOT").unwrap_or_else(|_| "./uploads".to_string()),
            public_base: env::var("ASSET_PUBLIC_BASE")
                .unwrap_or_else(|_| "http://127.0.0.1:8080/uploads".to_string()),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            #[cfg(feature = "postgres")]
            database,
            assets,
        }
    }
}

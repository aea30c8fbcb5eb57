//! # Folio Infrastructure
//!
//! Concrete implementations of the ports defined in `folio-core`:
//! the SeaORM/Postgres post store, an in-memory post store for
//! database-less runs and tests, and a filesystem-backed asset store.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL post store via SeaORM

pub mod database;
pub mod memory;
pub mod storage;

pub use memory::InMemoryPostStore;
pub use storage::FsAssetStore;

#[cfg(feature = "postgres")]
pub use database::PostgresPostStore;

//! Store-level error types.

use thiserror::Error;

/// Errors surfaced by the post and asset store adapters.
///
/// These never cross the `PostRepository` boundary: reads degrade to the
/// fallback collection and writes collapse to `None`/`false` sentinels.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

//! Ports - the traits infrastructure adapters implement.

mod store;

pub use store::{AssetStore, PostStore};

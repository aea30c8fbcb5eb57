//! # Folio Core
//!
//! The domain layer of the Folio blog backend.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the `BlogPost` entity, the listing engine, the fallback dataset, and the
//! `PostRepository` service that mediates all store access.

pub mod chat;
pub mod content;
pub mod domain;
pub mod error;
pub mod fallback;
pub mod listing;
pub mod ports;
pub mod repository;

pub use error::StoreError;
pub use repository::PostRepository;

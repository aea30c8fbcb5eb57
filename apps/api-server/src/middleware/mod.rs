//! Middleware and handler-level error plumbing.

pub mod error;

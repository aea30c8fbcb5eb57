//! Domain entities - the core business objects.

mod post;

pub use post::{BlogPost, PostDraft, PostPatch, create_slug};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// BlogPost entity - a single article on the site.
///
/// `published_at` is author-controlled and may point into the past or
/// future; `created_at`/`updated_at` are maintained by the repository layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// URL-safe public lookup key, unique across all posts.
    pub slug: String,
    /// Free-text labels; insertion order kept, set semantics when filtering.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BlogPost {
    /// Materialize a draft into a full post, assigning the server-side
    /// fields (`id`, `slug` when absent, creation timestamps).
    pub fn from_draft(draft: PostDraft) -> Self {
        let now = Utc::now();
        let slug = draft
            .slug
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| create_slug(&draft.title));
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            content: draft.content,
            excerpt: draft.excerpt,
            image_url: draft.image_url,
            published_at: draft.published_at,
            created_at: now,
            updated_at: now,
            slug,
            tags: draft.tags,
        }
    }
}

/// Author-supplied fields for a new post. Everything the store assigns
/// (`id`, `created_at`, `updated_at`) is absent by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    /// Derived from `title` when omitted or empty.
    pub slug: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update for an existing post. `None` fields are left unchanged.
///
/// `updated_at` is deliberately not representable here: the write path
/// stamps it to the current time on every update, overriding callers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub slug: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl PostPatch {
    /// Apply this patch to `post` and refresh `updated_at`.
    /// Store adapters call this as part of the write.
    pub fn apply(&self, post: &mut BlogPost) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(content) = &self.content {
            post.content = content.clone();
        }
        if let Some(excerpt) = &self.excerpt {
            post.excerpt = excerpt.clone();
        }
        if let Some(image_url) = &self.image_url {
            post.image_url = Some(image_url.clone());
        }
        if let Some(published_at) = self.published_at {
            post.published_at = published_at;
        }
        if let Some(slug) = &self.slug {
            post.slug = slug.clone();
        }
        if let Some(tags) = &self.tags {
            post.tags = tags.clone();
        }
        post.updated_at = Utc::now();
    }
}

/// Derive a URL-safe slug from a post title.
///
/// Lowercases, strips everything but `a-z0-9`, spaces and hyphens,
/// collapses whitespace and hyphen runs to single hyphens, and trims
/// leading/trailing hyphens. Idempotent.
pub fn create_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ' || *c == '-')
        .collect();

    // Spaces and hyphens both become a single hyphen; runs collapse.
    let mut slug = String::with_capacity(kept.len());
    let mut prev_hyphen = true;
    for c in kept.chars() {
        if c == ' ' || c == '-' {
            if !prev_hyphen {
                slug.push('-');
                prev_hyphen = true;
            }
        } else {
            slug.push(c);
            prev_hyphen = false;
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_strips_punctuation() {
        assert_eq!(create_slug("Hello, World!"), "hello-world");
    }

    #[test]
    fn slug_collapses_whitespace() {
        assert_eq!(create_slug("  Multiple   Spaces  "), "multiple-spaces");
    }

    #[test]
    fn slug_keeps_existing_hyphens() {
        assert_eq!(create_slug("Already-slugged"), "already-slugged");
    }

    #[test]
    fn slug_collapses_hyphen_runs() {
        assert_eq!(create_slug("a -- b"), "a-b");
        assert_eq!(create_slug("--edge--"), "edge");
    }

    #[test]
    fn slug_is_idempotent() {
        for title in [
            "Hello, World!",
            "  Multiple   Spaces  ",
            "Rust & WebAssembly: 2024 edition",
            "---",
            "",
        ] {
            let once = create_slug(title);
            assert_eq!(create_slug(&once), once);
        }
    }

    #[test]
    fn draft_derives_slug_when_missing() {
        let draft = PostDraft {
            title: "My First Post".to_string(),
            content: "body".to_string(),
            excerpt: "summary".to_string(),
            image_url: None,
            published_at: Utc::now(),
            slug: None,
            tags: vec![],
        };
        let post = BlogPost::from_draft(draft);
        assert_eq!(post.slug, "my-first-post");
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn draft_keeps_explicit_slug() {
        let draft = PostDraft {
            title: "My First Post".to_string(),
            content: "body".to_string(),
            excerpt: "summary".to_string(),
            image_url: None,
            published_at: Utc::now(),
            slug: Some("custom-slug".to_string()),
            tags: vec![],
        };
        assert_eq!(BlogPost::from_draft(draft).slug, "custom-slug");
    }

    #[test]
    fn patch_refreshes_updated_at_only() {
        let mut post = BlogPost::from_draft(PostDraft {
            title: "Title".to_string(),
            content: "body".to_string(),
            excerpt: "summary".to_string(),
            image_url: None,
            published_at: Utc::now(),
            slug: None,
            tags: vec!["rust".to_string()],
        });
        let created = post.created_at;
        let before = post.updated_at;

        let patch = PostPatch {
            excerpt: Some("new summary".to_string()),
            ..Default::default()
        };
        patch.apply(&mut post);

        assert_eq!(post.excerpt, "new summary");
        assert_eq!(post.title, "Title");
        assert_eq!(post.tags, vec!["rust".to_string()]);
        assert_eq!(post.created_at, created);
        assert!(post.updated_at >= before);
    }
}

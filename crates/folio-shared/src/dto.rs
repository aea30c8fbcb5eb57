//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use folio_core::content;
use folio_core::domain::BlogPost;
use folio_core::listing::SortMode;

/// Query parameters accepted by the listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    /// Free-text search query.
    #[serde(default)]
    pub q: String,
    /// Comma-separated tag selection.
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub sort: SortMode,
}

impl ListingParams {
    /// Split the comma-separated tag selection, dropping empty segments.
    pub fn selected_tags(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Request body for creating a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub slug: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request body for a partial post update. Absent fields are unchanged;
/// `updated_at` is server-stamped and not accepted from clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub slug: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// A post as returned by the API, with the derived display fields the
/// pages need (reading time, formatted date).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub slug: String,
    pub tags: Vec<String>,
    pub reading_time_minutes: u32,
    pub display_date: String,
}

impl From<BlogPost> for PostResponse {
    fn from(post: BlogPost) -> Self {
        let reading_time_minutes = content::reading_time_minutes(&post.content);
        let display_date = content::format_display_date(post.published_at);
        Self {
            id: post.id.to_string(),
            title: post.title,
            content: post.content,
            excerpt: post.excerpt,
            image_url: post.image_url,
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
            slug: post.slug,
            tags: post.tags,
            reading_time_minutes,
            display_date,
        }
    }
}

/// Listing page payload: the visible posts plus the tag vocabulary for
/// the filter controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingResponse {
    pub posts: Vec<PostResponse>,
    pub available_tags: Vec<String>,
    pub total: usize,
}

/// One table-of-contents entry on the detail page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineEntry {
    pub level: u8,
    pub text: String,
    pub line: usize,
}

impl From<content::Heading> for OutlineEntry {
    fn from(h: content::Heading) -> Self {
        Self {
            level: h.level,
            text: h.text,
            line: h.line,
        }
    }
}

/// Detail page payload: the post itself, its heading outline for the
/// table of contents, and a handful of related posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailResponse {
    pub post: PostResponse,
    pub outline: Vec<OutlineEntry>,
    pub related: Vec<PostResponse>,
}

/// Response for a stored upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

/// A visitor message for the chat widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// The widget's canned reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

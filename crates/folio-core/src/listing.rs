//! Listing engine - pure filter/search/sort over an in-memory post collection.
//!
//! No I/O and no error conditions: empty collections and empty filters are
//! valid inputs. For fixed inputs the output is always identical.

use serde::{Deserialize, Serialize};

use crate::domain::BlogPost;

/// Ordering applied to the filtered result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Descending by `published_at`, most recent first.
    #[default]
    Newest,
    /// Ascending by `published_at`.
    Oldest,
    /// Ascending case-insensitive lexicographic by `title`.
    Title,
}

/// Current UI filter state: free-text query, selected tags, sort mode.
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    pub search_query: String,
    pub selected_tags: Vec<String>,
    pub sort: SortMode,
}

/// Compute the visible, ordered subset of `posts` for the given filter.
///
/// A post is retained when the query is empty or a case-insensitive
/// substring of its title, excerpt or content, AND the tag selection is
/// empty or shares at least one tag with the post (OR across selected
/// tags - selecting more tags widens the result). The sort is stable:
/// posts with equal keys keep their relative input order.
pub fn filter_and_sort(posts: &[BlogPost], filter: &ListingFilter) -> Vec<BlogPost> {
    let query = filter.search_query.to_lowercase();

    let mut visible: Vec<BlogPost> = posts
        .iter()
        .filter(|post| {
            let matches_search = query.is_empty()
                || post.title.to_lowercase().contains(&query)
                || post.excerpt.to_lowercase().contains(&query)
                || post.content.to_lowercase().contains(&query);

            let matches_tags = filter.selected_tags.is_empty()
                || filter
                    .selected_tags
                    .iter()
                    .any(|tag| post.tags.iter().any(|t| t == tag));

            matches_search && matches_tags
        })
        .cloned()
        .collect();

    match filter.sort {
        SortMode::Newest => visible.sort_by(|a, b| b.published_at.cmp(&a.published_at)),
        SortMode::Oldest => visible.sort_by(|a, b| a.published_at.cmp(&b.published_at)),
        SortMode::Title => {
            visible.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
    }

    visible
}

/// Distinct tags across all posts, alphabetically sorted.
/// Recomputed on every call; used to populate the tag filter controls.
pub fn tag_vocabulary(posts: &[BlogPost]) -> Vec<String> {
    let mut tags: Vec<String> = posts
        .iter()
        .flat_map(|post| post.tags.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

//! Public blog endpoints: listing, detail, tag vocabulary.

use actix_web::{HttpResponse, web};

use folio_core::{content, listing};
use folio_shared::ApiResponse;
use folio_shared::dto::{
    ListingParams, ListingResponse, PostDetailResponse, PostResponse,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const RELATED_LIMIT: usize = 3;

/// GET /api/posts?q=...&tags=a,b&sort=newest|oldest|title
///
/// The filter/sort runs server-side over the fully resolved collection;
/// `available_tags` always reflects the unfiltered collection so the UI
/// can render every filter option.
pub async fn list(
    state: web::Data<AppState>,
    params: web::Query<ListingParams>,
) -> AppResult<HttpResponse> {
    let params = params.into_inner();
    let all = state.posts.list_all().await;

    let filter = listing::ListingFilter {
        search_query: params.q.clone(),
        selected_tags: params.selected_tags(),
        sort: params.sort,
    };
    let visible = listing::filter_and_sort(&all, &filter);

    let response = ListingResponse {
        total: visible.len(),
        available_tags: listing::tag_vocabulary(&all),
        posts: visible.into_iter().map(PostResponse::from).collect(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok(response)))
}

/// GET /api/posts/{slug}
pub async fn detail(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = slug.into_inner();
    let post = state
        .posts
        .get_by_slug(&slug)
        .await
        .ok_or_else(|| AppError::NotFound(format!("no post with slug '{slug}'")))?;

    let all = state.posts.list_all().await;
    let related = content::related_posts(&post, &all, RELATED_LIMIT);

    let response = PostDetailResponse {
        outline: content::outline(&post.content)
            .into_iter()
            .map(Into::into)
            .collect(),
        related: related.into_iter().map(PostResponse::from).collect(),
        post: post.into(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok(response)))
}

/// GET /api/posts/tags - the alphabetical tag vocabulary.
pub async fn tags(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let all = state.posts.list_all().await;
    let tags = listing::tag_vocabulary(&all);
    Ok(HttpResponse::Ok().json(ApiResponse::ok(tags)))
}

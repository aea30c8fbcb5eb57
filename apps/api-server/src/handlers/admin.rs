//! Admin CRUD and upload endpoints.
//!
//! Write failures arrive from the repository as sentinels (`None` /
//! `false`); they surface here as a generic write-rejected response, since
//! the store does not distinguish not-found from transport failure.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use folio_core::domain::{PostDraft, PostPatch};
use folio_shared::ApiResponse;
use folio_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest, UploadResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/admin/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".to_string()));
    }

    let draft = PostDraft {
        title: req.title,
        content: req.content,
        excerpt: req.excerpt,
        image_url: req.image_url,
        published_at: req.published_at,
        slug: req.slug,
        tags: req.tags,
    };

    let created = state
        .posts
        .create(draft)
        .await
        .ok_or_else(|| AppError::WriteRejected("post was not created".to_string()))?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(PostResponse::from(created))))
}

/// PUT /api/admin/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let patch = PostPatch {
        title: req.title,
        content: req.content,
        excerpt: req.excerpt,
        image_url: req.image_url,
        published_at: req.published_at,
        slug: req.slug,
        tags: req.tags,
    };

    let updated = state
        .posts
        .update(id.into_inner(), patch)
        .await
        .ok_or_else(|| AppError::WriteRejected("post was not updated".to_string()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostResponse::from(updated))))
}

/// DELETE /api/admin/posts/{id}
pub async fn delete(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    if state.posts.delete(id.into_inner()).await {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::WriteRejected("post was not deleted".to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub struct UploadParams {
    pub filename: String,
    #[serde(default = "default_folder")]
    pub folder: String,
}

fn default_folder() -> String {
    "posts".to_string()
}

/// POST /api/admin/assets?filename=cover.png&folder=posts
///
/// Raw body upload; the stored key is a fresh UUID so concurrent uploads
/// of identically named files cannot clobber each other.
pub async fn upload(
    state: web::Data<AppState>,
    params: web::Query<UploadParams>,
    bytes: web::Bytes,
) -> AppResult<HttpResponse> {
    if bytes.is_empty() {
        return Err(AppError::BadRequest("empty upload body".to_string()));
    }

    let url = state
        .posts
        .upload_asset(&bytes, &params.filename, &params.folder)
        .await
        .ok_or_else(|| AppError::WriteRejected("asset was not stored".to_string()))?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(UploadResponse { url })))
}

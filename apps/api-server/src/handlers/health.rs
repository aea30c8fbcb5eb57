//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Which post store backs the repository: "postgres" or "memory".
    /// A "memory" value on a database deployment means the server came up
    /// degraded and reads are serving the fallback collection.
    pub store: &'static str,
    /// Posts the repository currently resolves. Never zero: an empty or
    /// unreachable store still yields the fallback collection.
    pub posts_available: usize,
    pub timestamp: String,
}

/// Health check endpoint - returns server status and store health.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        store: state.store_backend,
        posts_available: state.posts.list_all().await.len(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}

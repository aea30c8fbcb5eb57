//! Chat widget endpoint.

use actix_web::{HttpResponse, web};

use folio_shared::ApiResponse;
use folio_shared::dto::{ChatRequest, ChatResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/chat - canned reply for a visitor message.
pub async fn reply(
    state: web::Data<AppState>,
    body: web::Json<ChatRequest>,
) -> AppResult<HttpResponse> {
    let reply = state.responder.reply(&body.message).to_string();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(ChatResponse { reply })))
}

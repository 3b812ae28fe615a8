//! Content generation and assistant handlers

use crate::api::dto::{ApiJson, ChatRequest, ChatResponse, GenerateRequest, GenerateResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::core::generation::chat::{self, SUGGESTIONS};
use crate::core::generation::{resolve_context, EngineStatus};
use crate::domain::CourseId;
use axum::extract::State;
use axum::Json;

/// `POST /api/ai/generate`
///
/// An unknown `course_id` is not an error: the stored course only supplies
/// fallback context.
pub async fn generate(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateRequest>,
) -> ApiResult<Json<GenerateResponse>> {
    let course = match CourseId::new(&request.course_id) {
        Ok(id) => state.repository.get(&id).await?,
        Err(_) => None,
    };

    let ctx = resolve_context(request.context.as_deref(), course.as_ref());

    let response = match state.engine.generate_named(&ctx, &request.generation_type) {
        Ok(content) => {
            tracing::info!(
                course_id = %request.course_id,
                generation_type = %request.generation_type,
                "Content generated"
            );
            GenerateResponse::generated(content)
        }
        Err(e) => {
            tracing::warn!(generation_type = %request.generation_type, "Unknown generation type");
            GenerateResponse::failed(e.to_string())
        }
    };

    Ok(Json(response))
}

/// `POST /api/ai/chat`
pub async fn chat(ApiJson(request): ApiJson<ChatRequest>) -> Json<ChatResponse> {
    let message = chat::reply(&request.message, request.course_context.as_ref());
    Json(ChatResponse {
        message,
        suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    })
}

/// `GET /api/ai/status`
pub async fn status(State(state): State<AppState>) -> Json<EngineStatus> {
    Json(state.engine.status())
}

//! Reference data handlers

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

pub async fn lexicon(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    Ok(Json(state.lexicon.document().await?))
}

pub async fn levels(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    Ok(Json(state.lexicon.levels().await?))
}

pub async fn thematics(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    Ok(Json(state.lexicon.thematics().await?))
}

pub async fn placeholders(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    Ok(Json(state.lexicon.placeholders().await?))
}

pub async fn templates(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    Ok(Json(state.lexicon.templates().await?))
}

pub async fn status_codes(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    Ok(Json(state.lexicon.status_codes().await?))
}

pub async fn verbs(
    State(state): State<AppState>,
    Path(level): Path<String>,
) -> ApiResult<Json<Value>> {
    state
        .lexicon
        .verbs(&level)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("No verbs found for level: {}", level)))
}

//! Service identity and health handlers

use crate::api::dto::{HealthResponse, RootResponse, ServiceHealth};
use crate::api::state::AppState;
use axum::extract::State;
use axum::Json;

pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        name: state.config.application.name.clone(),
        version: env!("CARGO_PKG_VERSION"),
        status: "online",
    })
}

/// `GET /api/health`
///
/// Storage reports `degraded` when the collection file cannot be read.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let storage = match state.repository.health_check().await {
        Ok(()) => "online",
        Err(e) => {
            tracing::warn!(error = %e, "Storage health check failed");
            "degraded"
        }
    };

    Json(HealthResponse {
        status: "healthy",
        services: ServiceHealth {
            api: "online",
            storage,
            ai_engine: "ready",
        },
    })
}

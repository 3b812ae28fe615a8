//! Route table and middleware

use super::handlers::{courses, export, generation, lexicon, system};
use super::state::AppState;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the application router
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server.cors_origins);

    Router::new()
        .route("/", get(system::root))
        .route("/api/health", get(system::health))
        .route(
            "/api/courses",
            get(courses::list_courses).post(courses::create_course),
        )
        .route(
            "/api/courses/:id",
            get(courses::get_course)
                .put(courses::update_course)
                .delete(courses::delete_course),
        )
        .route("/api/courses/:id/duplicate", post(courses::duplicate_course))
        .route("/api/ai/generate", post(generation::generate))
        .route("/api/ai/chat", post(generation::chat))
        .route("/api/ai/status", get(generation::status))
        .route("/api/export", post(export::export_course))
        .route("/api/export/download/:filename", get(export::download))
        .route("/api/export/formats", get(export::formats))
        .route("/api/lexicon", get(lexicon::lexicon))
        .route("/api/lexicon/levels", get(lexicon::levels))
        .route("/api/lexicon/thematics", get(lexicon::thematics))
        .route("/api/lexicon/placeholders", get(lexicon::placeholders))
        .route("/api/lexicon/templates", get(lexicon::templates))
        .route("/api/lexicon/status-codes", get(lexicon::status_codes))
        .route("/api/lexicon/verbs/:level", get(lexicon::verbs))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Skipping invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

//! Export handlers

use crate::api::dto::{ApiJson, ExportRequest, ExportResponse, FormatsResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::core::export::{catalogue, ExportFormat};
use crate::domain::CourseId;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;

/// `POST /api/export`
///
/// The course must exist before the format is checked.
pub async fn export_course(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ExportRequest>,
) -> ApiResult<Json<ExportResponse>> {
    let id = CourseId::new(&request.course_id).map_err(|_| ApiError::course_not_found())?;
    let course = state
        .repository
        .get(&id)
        .await?
        .ok_or_else(ApiError::course_not_found)?;

    let format: ExportFormat = request.format.parse()?;

    let exported = state
        .exporter
        .export(&course, format, request.include_metadata)
        .await?;

    Ok(Json(ExportResponse {
        success: true,
        download_url: Some(exported.download_url()),
        message: None,
    }))
}

/// `GET /api/export/download/{filename}`
pub async fn download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let download = state
        .exporter
        .load_download(&filename)
        .await?
        .ok_or_else(|| ApiError::not_found("File not found"))?;

    let disposition = format!("attachment; filename=\"{}\"", download.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, download.media_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        download.bytes,
    ))
}

/// `GET /api/export/formats`
pub async fn formats() -> Json<FormatsResponse> {
    Json(FormatsResponse {
        formats: catalogue(),
    })
}

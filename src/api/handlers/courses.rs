//! Course CRUD handlers

use crate::adapters::storage::CourseFilter;
use crate::api::dto::{ApiJson, ApiQuery};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::domain::{Course, CourseId, CourseUpdate, NewCourse};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

fn parse_id(raw: &str) -> ApiResult<CourseId> {
    CourseId::new(raw).map_err(|_| ApiError::course_not_found())
}

/// `GET /api/courses`, filtered when any search parameter is present
pub async fn list_courses(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<CourseFilter>,
) -> ApiResult<Json<Vec<Course>>> {
    let filter = filter.normalized();
    let courses = if filter.is_empty() {
        state.repository.list().await?
    } else {
        state.repository.search(&filter).await?
    };
    Ok(Json(courses))
}

pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Course>> {
    let id = parse_id(&id)?;
    state
        .repository
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(ApiError::course_not_found)
}

pub async fn create_course(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewCourse>,
) -> ApiResult<(StatusCode, Json<Course>)> {
    let course = state.repository.create(payload).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(update): ApiJson<CourseUpdate>,
) -> ApiResult<Json<Course>> {
    let id = parse_id(&id)?;
    state
        .repository
        .update(&id, update)
        .await?
        .map(Json)
        .ok_or_else(ApiError::course_not_found)
}

pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    if state.repository.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::course_not_found())
    }
}

pub async fn duplicate_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<(StatusCode, Json<Course>)> {
    let id = parse_id(&id)?;
    let copy = state
        .repository
        .duplicate(&id)
        .await?
        .ok_or_else(ApiError::course_not_found)?;
    Ok((StatusCode::CREATED, Json(copy)))
}

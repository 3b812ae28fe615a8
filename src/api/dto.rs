//! Request and response bodies
//!
//! Course payloads use the domain types directly; the types here cover the
//! generation, chat, export and system endpoints.

use super::error::ApiError;
use crate::core::export::FormatInfo;
use crate::core::generation::GeneratedContent;
use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON body extractor that reports every rejection as a 422 `{detail}`
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Query string extractor that reports every rejection as a 422 `{detail}`
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub course_id: String,
    pub generation_type: String,
    /// JSON-encoded context object
    #[serde(default)]
    pub context: Option<String>,
    /// Accepted and currently ignored by the template engine
    #[serde(default)]
    pub preferences: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub data: Option<GeneratedContent>,
    pub message: Option<String>,
    pub tokens_used: Option<u32>,
}

impl GenerateResponse {
    pub fn generated(data: GeneratedContent) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            tokens_used: Some(0),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            tokens_used: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub course_context: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportRequest {
    pub course_id: String,
    pub format: String,
    #[serde(default = "default_include_metadata")]
    pub include_metadata: bool,
}

fn default_include_metadata() -> bool {
    true
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportResponse {
    pub success: bool,
    pub download_url: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormatsResponse {
    pub formats: Vec<FormatInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub services: ServiceHealth,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceHealth {
    pub api: &'static str,
    pub storage: &'static str,
    pub ai_engine: &'static str,
}

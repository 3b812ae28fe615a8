//! Reference data for course authoring
//!
//! The lexicon is a JSON document listing course levels, thematics, status
//! codes, authoring templates and template placeholders. The built-in
//! document is generated from the domain enums; a configured file replaces
//! it wholesale and is re-read on every request.

pub mod builtin;

use crate::config::LexiconConfig;
use crate::domain::{PrometheusError, Result};
use serde_json::{json, Value};
use std::path::PathBuf;

/// Source of the lexicon document
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    path: Option<PathBuf>,
}

impl Lexicon {
    pub fn new(config: &LexiconConfig) -> Self {
        Self {
            path: config.path.as_ref().map(PathBuf::from),
        }
    }

    /// Lexicon served from a JSON file
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// The whole document
    ///
    /// # Errors
    ///
    /// Returns [`PrometheusError::Lexicon`] if a configured file cannot be
    /// read or is not a JSON object
    pub async fn document(&self) -> Result<Value> {
        let Some(path) = &self.path else {
            return Ok(builtin::document());
        };

        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            PrometheusError::Lexicon(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let document: Value = serde_json::from_str(&contents).map_err(|e| {
            PrometheusError::Lexicon(format!("Invalid lexicon JSON in {}: {}", path.display(), e))
        })?;

        if !document.is_object() {
            return Err(PrometheusError::Lexicon(format!(
                "Lexicon in {} must be a JSON object",
                path.display()
            )));
        }

        Ok(document)
    }

    pub async fn levels(&self) -> Result<Value> {
        let doc = self.document().await?;
        Ok(json!({ "levels": section(&doc, "courseLevels", json!([])) }))
    }

    pub async fn thematics(&self) -> Result<Value> {
        let doc = self.document().await?;
        Ok(json!({ "thematics": section(&doc, "courseThematics", json!([])) }))
    }

    pub async fn placeholders(&self) -> Result<Value> {
        let doc = self.document().await?;
        Ok(json!({ "placeholders": section(&doc, "placeholders", json!({})) }))
    }

    pub async fn templates(&self) -> Result<Value> {
        let doc = self.document().await?;
        Ok(json!({ "templates": section(&doc, "templates", json!({})) }))
    }

    pub async fn status_codes(&self) -> Result<Value> {
        let doc = self.document().await?;
        Ok(json!({ "statusCodes": section(&doc, "statusCodes", json!({})) }))
    }

    /// Recommended objective verbs for a level
    ///
    /// Returns `Ok(None)` when the document has no verbs for `level`.
    pub async fn verbs(&self, level: &str) -> Result<Option<Value>> {
        let doc = self.document().await?;
        let verbs = doc
            .get("templates")
            .and_then(|t| t.get("objectiveVerbs"))
            .and_then(|v| v.get(level))
            .cloned();

        Ok(verbs.map(|verbs| json!({ "level": level, "verbs": verbs })))
    }
}

fn section(doc: &Value, key: &str, empty: Value) -> Value {
    doc.get(key).cloned().unwrap_or(empty)
}

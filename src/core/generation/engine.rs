//! Template generation engine
//!
//! Expands a [`GenerationContext`] into course content for one of the
//! supported generation types.

use super::context::GenerationContext;
use super::templates;
use crate::config::GeneratorConfig;
use crate::domain::{Assessment, GenerationError, LearningObjective, Module};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// What to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationType {
    Objectives,
    Modules,
    Assessments,
    Description,
    Full,
}

impl GenerationType {
    pub const ALL: [GenerationType; 5] = [
        GenerationType::Objectives,
        GenerationType::Modules,
        GenerationType::Assessments,
        GenerationType::Description,
        GenerationType::Full,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationType::Objectives => "objectives",
            GenerationType::Modules => "modules",
            GenerationType::Assessments => "assessments",
            GenerationType::Description => "description",
            GenerationType::Full => "full",
        }
    }

    /// Capability name reported by the status endpoint
    pub fn capability(&self) -> &'static str {
        match self {
            GenerationType::Objectives => "objectives_generation",
            GenerationType::Modules => "modules_generation",
            GenerationType::Assessments => "assessments_generation",
            GenerationType::Description => "description_generation",
            GenerationType::Full => "full_course_generation",
        }
    }
}

impl fmt::Display for GenerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationType {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GenerationType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| GenerationError::UnknownType(s.to_string()))
    }
}

/// Generated content, keyed by the course fields it fills
///
/// Only the parts produced by the requested type are present, so the
/// serialized value can be sent back as a course update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeneratedContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_objectives: Option<Vec<LearningObjective>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<Module>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessments: Option<Vec<Assessment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Engine readiness report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineStatus {
    pub status: &'static str,
    pub model: String,
    pub capabilities: Vec<&'static str>,
    pub note: &'static str,
}

/// Deterministic content generator
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    model: String,
}

impl TemplateEngine {
    /// Builds an engine that reports `generator.model` in its status
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            model: config.model.clone(),
        }
    }

    /// Generates content for a type name
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::UnknownType`] for names outside
    /// [`GenerationType::ALL`].
    pub fn generate_named(
        &self,
        ctx: &GenerationContext,
        generation_type: &str,
    ) -> Result<GeneratedContent, GenerationError> {
        let generation_type = generation_type.parse::<GenerationType>()?;
        Ok(self.generate(ctx, generation_type))
    }

    pub fn generate(&self, ctx: &GenerationContext, generation_type: GenerationType) -> GeneratedContent {
        tracing::debug!(
            generation_type = %generation_type,
            title = %ctx.title,
            level = %ctx.level,
            "Generating course content"
        );

        let wants = |part: GenerationType| generation_type == part || generation_type == GenerationType::Full;

        let mut content = GeneratedContent::default();
        if wants(GenerationType::Objectives) {
            content.learning_objectives = Some(templates::objectives(ctx));
        }
        if wants(GenerationType::Modules) {
            content.modules = Some(templates::modules(ctx));
        }
        if wants(GenerationType::Assessments) {
            content.assessments = Some(templates::assessments(ctx));
        }
        if wants(GenerationType::Description) {
            content.overview = Some(templates::overview(ctx));
            content.description = Some(templates::description(ctx));
        }
        content
    }

    pub fn status(&self) -> EngineStatus {
        let mut capabilities: Vec<&'static str> =
            GenerationType::ALL.iter().map(|t| t.capability()).collect();
        capabilities.push("chat");

        EngineStatus {
            status: "ready",
            model: self.model.clone(),
            capabilities,
            note: "This is a placeholder AI engine. Configure your API keys for full functionality.",
        }
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}

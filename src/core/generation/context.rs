//! Generation context resolution
//!
//! The context names the course the templates are filled for. Values come
//! from the request's JSON context first, then from the stored course, then
//! from fixed defaults.

use crate::domain::Course;
use serde::Serialize;

pub const DEFAULT_TITLE: &str = "Untitled Course";
pub const DEFAULT_LEVEL: &str = "basic";
pub const DEFAULT_THEMATIC: &str = "personal-skills";
pub const DEFAULT_TARGET_AUDIENCE: &str = "Professionals";

/// Fully resolved template inputs
///
/// `level` and `thematic` stay plain strings: templates fall back to the
/// `basic` tables for values they do not recognize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationContext {
    pub title: String,
    pub level: String,
    pub thematic: String,
    pub target_audience: String,
}

impl Default for GenerationContext {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            level: DEFAULT_LEVEL.to_string(),
            thematic: DEFAULT_THEMATIC.to_string(),
            target_audience: DEFAULT_TARGET_AUDIENCE.to_string(),
        }
    }
}

/// Context fields as sent by a client; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialContext {
    pub title: Option<String>,
    pub level: Option<String>,
    pub thematic: Option<String>,
    pub target_audience: Option<String>,
}

impl PartialContext {
    /// Parses a JSON-encoded context string
    ///
    /// `targetAudience` is accepted as an alias of `target_audience`.
    /// Anything other than a JSON object yields `None`. Fields with an
    /// unexpected type are ignored rather than rejecting the whole object.
    pub fn parse(raw: &str) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_str(raw).ok()?;
        let object = value.as_object()?;

        let field = |name: &str| -> Option<String> {
            object
                .get(name)
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };

        Some(Self {
            title: field("title"),
            level: field("level"),
            thematic: field("thematic"),
            target_audience: field("target_audience").or_else(|| field("targetAudience")),
        })
    }

    /// Context carried by a stored course
    ///
    /// Empty strings are treated as absent.
    pub fn from_course(course: &Course) -> Self {
        let non_empty = |s: &str| (!s.trim().is_empty()).then(|| s.to_string());

        Self {
            title: non_empty(&course.title),
            level: course.level.map(|l| l.as_str().to_string()),
            thematic: course.thematic.map(|t| t.as_str().to_string()),
            target_audience: non_empty(&course.target_audience),
        }
    }

    /// Fills gaps in `self` from `fallback`
    pub fn or(self, fallback: PartialContext) -> Self {
        Self {
            title: self.title.or(fallback.title),
            level: self.level.or(fallback.level),
            thematic: self.thematic.or(fallback.thematic),
            target_audience: self.target_audience.or(fallback.target_audience),
        }
    }

    /// Completes the context with defaults
    pub fn resolve(self) -> GenerationContext {
        let defaults = GenerationContext::default();
        GenerationContext {
            title: self.title.unwrap_or(defaults.title),
            level: self.level.unwrap_or(defaults.level),
            thematic: self.thematic.unwrap_or(defaults.thematic),
            target_audience: self.target_audience.unwrap_or(defaults.target_audience),
        }
    }
}

/// Resolves the context for a generation request
///
/// Precedence: parsed `raw_context` object, then `course`, then defaults.
pub fn resolve_context(raw_context: Option<&str>, course: Option<&Course>) -> GenerationContext {
    let requested = raw_context.and_then(PartialContext::parse).unwrap_or_default();
    let stored = course.map(PartialContext::from_course).unwrap_or_default();
    requested.or(stored).resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CourseId, CourseLevel, CourseThematic, NewCourse};

    fn stored_course() -> Course {
        let mut new = NewCourse::new("Intelligence Analysis", "INT-301");
        new.level = Some(CourseLevel::Advanced);
        new.thematic = Some(CourseThematic::Intelligence);
        new.target_audience = "Analysts".to_string();
        Course::from_new(CourseId::generate(), new)
    }

    #[test]
    fn test_defaults_without_any_source() {
        let ctx = resolve_context(None, None);
        assert_eq!(ctx, GenerationContext::default());
        assert_eq!(ctx.title, "Untitled Course");
        assert_eq!(ctx.target_audience, "Professionals");
    }

    #[test]
    fn test_stored_course_fills_context() {
        let ctx = resolve_context(None, Some(&stored_course()));
        assert_eq!(ctx.title, "Intelligence Analysis");
        assert_eq!(ctx.level, "advanced");
        assert_eq!(ctx.thematic, "intelligence");
        assert_eq!(ctx.target_audience, "Analysts");
    }

    #[test]
    fn test_request_context_wins_over_stored_course() {
        let raw = r#"{"title": "Override", "targetAudience": "Managers"}"#;
        let ctx = resolve_context(Some(raw), Some(&stored_course()));
        assert_eq!(ctx.title, "Override");
        assert_eq!(ctx.target_audience, "Managers");
        assert_eq!(ctx.level, "advanced");
    }

    #[test]
    fn test_snake_case_audience_preferred() {
        let parsed =
            PartialContext::parse(r#"{"target_audience": "A", "targetAudience": "B"}"#).unwrap();
        assert_eq!(parsed.target_audience.as_deref(), Some("A"));
    }

    #[test]
    fn test_non_object_context_is_ignored() {
        assert!(PartialContext::parse("not json").is_none());
        assert!(PartialContext::parse("[1, 2]").is_none());
        let ctx = resolve_context(Some("plain text"), None);
        assert_eq!(ctx, GenerationContext::default());
    }

    #[test]
    fn test_wrongly_typed_fields_are_skipped() {
        let parsed = PartialContext::parse(r#"{"title": 42, "level": "expert"}"#).unwrap();
        assert!(parsed.title.is_none());
        assert_eq!(parsed.level.as_deref(), Some("expert"));
    }

    #[test]
    fn test_unknown_level_passes_through() {
        let ctx = resolve_context(Some(r#"{"level": "grandmaster"}"#), None);
        assert_eq!(ctx.level, "grandmaster");
    }
}

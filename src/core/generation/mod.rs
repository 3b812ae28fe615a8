//! Deterministic course content generation
//!
//! - [`context`] - Resolves template inputs from a request, a stored course and defaults
//! - [`templates`] - Objective, module, assessment and description templates
//! - [`engine`] - Dispatches a generation type to the templates
//! - [`chat`] - Keyword-driven assistant replies
//!
//! # Example
//!
//! ```rust
//! use prometheus::core::generation::{resolve_context, GenerationType, TemplateEngine};
//!
//! let engine = TemplateEngine::default();
//! let ctx = resolve_context(Some(r#"{"title": "Negotiation", "level": "expert"}"#), None);
//! let content = engine.generate(&ctx, GenerationType::Objectives);
//!
//! let objectives = content.learning_objectives.unwrap_or_default();
//! assert_eq!(objectives[0].text, "Design the key concepts and principles of Negotiation");
//! ```

pub mod chat;
pub mod context;
pub mod engine;
pub mod templates;

pub use context::{resolve_context, GenerationContext, PartialContext};
pub use engine::{EngineStatus, GeneratedContent, GenerationType, TemplateEngine};

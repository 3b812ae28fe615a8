//! Course authoring logic
//!
//! - [`generation`] - Deterministic template generation and the chat assistant
//! - [`export`] - Rendering courses to export formats and serving the files

pub mod export;
pub mod generation;

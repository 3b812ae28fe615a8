//! Domain models and types for Prometheus.
//!
//! This module contains the course model, identifiers and error types shared
//! by the storage, generation, export and HTTP layers.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`CourseId`], [`ExportFileName`])
//! - **Course model** ([`Course`], [`NewCourse`], [`CourseUpdate`] and the
//!   nested objective, module and assessment types)
//! - **Error types** ([`PrometheusError`], [`StorageError`], [`GenerationError`], [`ExportError`])
//! - **Result type alias** ([`Result`])
//!
//! # Partial Updates
//!
//! ```rust
//! use prometheus::domain::{Course, CourseId, CourseStatus, CourseUpdate, NewCourse};
//!
//! let mut course = Course::from_new(CourseId::generate(), NewCourse::new("Leadership 101", "LDR-101"));
//! course.apply(CourseUpdate {
//!     status: Some(CourseStatus::Review),
//!     ..CourseUpdate::default()
//! });
//! assert_eq!(course.status, CourseStatus::Review);
//! assert_eq!(course.title, "Leadership 101");
//! ```

pub mod course;
pub mod errors;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use course::{
    Assessment, Course, CourseLevel, CourseMetadata, CourseStatus, CourseThematic, CourseUpdate,
    DeliveryMethod, LearningObjective, Lesson, Module, NewCourse, ObjectiveType,
};
pub use errors::{ExportError, GenerationError, PrometheusError, StorageError};
pub use ids::{CourseId, ExportFileName};
pub use result::Result;

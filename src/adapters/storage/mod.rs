//! Course storage layer
//!
//! This module provides a trait-based abstraction over course storage, with
//! a flat JSON file as the built-in backend.

pub mod factory;
pub mod json_file;
pub mod traits;

pub use factory::create_repository;
pub use json_file::JsonFileCourseRepository;
pub use traits::{CourseFilter, CourseRepository};

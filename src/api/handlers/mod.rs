//! HTTP request handlers, grouped by resource

pub mod courses;
pub mod export;
pub mod generation;
pub mod lexicon;
pub mod system;

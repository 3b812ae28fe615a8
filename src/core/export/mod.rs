//! Course export
//!
//! This module turns a stored course into a downloadable file:
//! - [`format`] - Supported formats, the format catalogue and media types
//! - [`render`] - JSON output and placeholder document renderers
//! - [`service`] - Writing exports and serving downloads

pub mod format;
pub mod render;
pub mod service;

pub use format::{catalogue, media_type_for, ExportFormat, FormatInfo, FormatStatus};
pub use render::render;
pub use service::{Download, ExportService, ExportedFile, DOWNLOAD_ROUTE_PREFIX};

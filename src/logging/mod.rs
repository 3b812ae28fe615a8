//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output filtered by level or `RUST_LOG`
//! - JSON-formatted local file logs with rotation
//! - Helper macros for recurring course and export events
//!
//! # Example
//!
//! ```no_run
//! use prometheus::logging::init_logging;
//! use prometheus::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_console_logging, init_logging, LoggingGuard};

/// Log a change to a stored course
///
/// # Example
///
/// ```no_run
/// use prometheus::log_course_mutation;
/// use prometheus::domain::CourseId;
///
/// let id = CourseId::generate();
/// log_course_mutation!("create", &id, 3);
/// ```
#[macro_export]
macro_rules! log_course_mutation {
    ($action:expr, $course_id:expr, $total:expr) => {
        tracing::info!(
            action = $action,
            course_id = %$course_id,
            total_courses = $total,
            "Course collection updated"
        );
    };
}

/// Log the completion of an export operation
///
/// # Example
///
/// ```no_run
/// use prometheus::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!("pdf", "PRO-101_20250101_120000.pdf", Duration::from_millis(4));
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($format:expr, $file_name:expr, $duration:expr) => {
        tracing::info!(
            format = %$format,
            file = %$file_name,
            duration_ms = $duration.as_millis(),
            "Export completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use prometheus::log_error_with_context;
/// use prometheus::domain::PrometheusError;
///
/// let error = PrometheusError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

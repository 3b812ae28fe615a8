//! Domain error types
//!
//! This module defines the error hierarchy for Prometheus.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Prometheus error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum PrometheusError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Course repository errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Content generation errors
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// Export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// A requested record does not exist
    #[error("{0}")]
    NotFound(String),

    /// Reference data errors
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl PrometheusError {
    /// Shorthand for the error returned when a course id is unknown
    pub fn course_not_found() -> Self {
        PrometheusError::NotFound("Course not found".to_string())
    }
}

/// Course repository errors
///
/// Errors raised while reading or rewriting the course collection file.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The collection file or its directory could not be created
    #[error("Failed to initialize storage at {path}: {message}")]
    InitFailed { path: String, message: String },

    /// The collection file could not be read
    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    /// The collection file could not be written
    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: String, message: String },

    /// A record in the collection does not match the course schema
    #[error("Invalid course record in {path}: {message}")]
    InvalidRecord { path: String, message: String },
}

/// Content generation errors
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The requested generation type is not one the engine knows
    #[error("Unknown generation type: {0}")]
    UnknownType(String),
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    /// The requested format is not supported
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// The export directory or file could not be written
    #[error("Failed to write export file {path}: {message}")]
    WriteFailed { path: String, message: String },

    /// A download name that is empty or carries path components
    #[error("Invalid export file name: {0}")]
    InvalidFileName(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for PrometheusError {
    fn from(err: std::io::Error) -> Self {
        PrometheusError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PrometheusError {
    fn from(err: serde_json::Error) -> Self {
        PrometheusError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PrometheusError {
    fn from(err: toml::de::Error) -> Self {
        PrometheusError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prometheus_error_display() {
        let err = PrometheusError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_not_found_displays_bare_message() {
        let err = PrometheusError::course_not_found();
        assert_eq!(err.to_string(), "Course not found");
    }

    #[test]
    fn test_storage_error_conversion() {
        let storage_err = StorageError::ReadFailed {
            path: "data/courses.json".to_string(),
            message: "permission denied".to_string(),
        };
        let err: PrometheusError = storage_err.into();
        assert!(matches!(err, PrometheusError::Storage(_)));
        assert!(err.to_string().contains("data/courses.json"));
    }

    #[test]
    fn test_generation_error_message() {
        let err: PrometheusError = GenerationError::UnknownType("syllabus".to_string()).into();
        assert!(matches!(err, PrometheusError::Generation(_)));
        assert_eq!(
            err.to_string(),
            "Generation error: Unknown generation type: syllabus"
        );
    }

    #[test]
    fn test_export_error_message() {
        let err = ExportError::UnsupportedFormat("epub".to_string());
        assert_eq!(err.to_string(), "Unsupported export format: epub");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: PrometheusError = io_err.into();
        assert!(matches!(err, PrometheusError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: PrometheusError = json_err.into();
        assert!(matches!(err, PrometheusError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: PrometheusError = toml_err.into();
        assert!(matches!(err, PrometheusError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_prometheus_error_implements_std_error() {
        let err = PrometheusError::Lexicon("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}

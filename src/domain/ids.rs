//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for course identifiers and export
//! file names. Each type ensures type safety and validates its format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Course identifier newtype wrapper
///
/// Server-assigned identifiers are random UUIDs, but any non-empty string
/// found in the collection file is accepted.
///
/// # Examples
///
/// ```
/// use prometheus::domain::ids::CourseId;
/// use std::str::FromStr;
///
/// let id = CourseId::from_str("7d44b88c-4199-4bad-97dc-d78268e01398").unwrap();
/// assert_eq!(id.as_str(), "7d44b88c-4199-4bad-97dc-d78268e01398");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(String);

impl CourseId {
    /// Creates a new CourseId from a string
    ///
    /// # Arguments
    ///
    /// * `id` - The course identifier string
    ///
    /// # Returns
    ///
    /// Returns `Ok(CourseId)` if the ID is valid, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Course ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Generates a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the course ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CourseId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Export file name newtype wrapper
///
/// A bare file name inside the export directory. Names carrying path
/// components are rejected so a download can never leave that directory.
///
/// # Examples
///
/// ```
/// use prometheus::domain::ids::ExportFileName;
///
/// assert!(ExportFileName::new("PRO-101_20250101_120000.json").is_ok());
/// assert!(ExportFileName::new("../courses.json").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExportFileName(String);

impl ExportFileName {
    /// Creates a new ExportFileName from a string
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Export file name cannot be empty".to_string());
        }
        if name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(format!(
                "Export file name must not contain path components, got: {}",
                name
            ));
        }
        Ok(Self(name))
    }

    /// Builds the file stem for a course code
    ///
    /// Characters outside `[A-Za-z0-9_-]` become underscores. An empty code
    /// yields `"course"`.
    pub fn stem_for_code(code: &str) -> String {
        let sanitized: String = code
            .trim()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        if sanitized.is_empty() {
            "course".to_string()
        } else {
            sanitized
        }
    }

    /// Returns the file name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExportFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExportFileName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ExportFileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

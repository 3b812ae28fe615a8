//! Export service
//!
//! Writes rendered courses into the export directory and resolves download
//! requests against it.

use super::format::{media_type_for, ExportFormat};
use super::render::render;
use crate::config::ExportConfig;
use crate::domain::{Course, ExportError, ExportFileName, PrometheusError, Result};
use chrono::{DateTime, Utc};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Prefix of the URL a client uses to fetch an exported file
pub const DOWNLOAD_ROUTE_PREFIX: &str = "/api/export/download/";

/// A file written by an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: ExportFileName,
    pub path: PathBuf,
    pub format: ExportFormat,
}

impl ExportedFile {
    pub fn download_url(&self) -> String {
        format!("{}{}", DOWNLOAD_ROUTE_PREFIX, self.file_name)
    }
}

/// An export ready to be streamed to a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: ExportFileName,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Writes course exports into a single directory
#[derive(Debug, Clone)]
pub struct ExportService {
    export_dir: PathBuf,
}

impl ExportService {
    pub fn new(config: &ExportConfig) -> Self {
        Self::with_dir(&config.export_dir)
    }

    pub fn with_dir(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Creates the export directory if it is missing
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub async fn ensure_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.export_dir)
            .await
            .map_err(|e| ExportError::WriteFailed {
                path: self.export_dir.display().to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }

    /// File name for an export of `course` taken at `at`
    ///
    /// # Errors
    ///
    /// Returns an error if the generated name is not a valid bare file name
    pub fn file_name_for(
        course: &Course,
        format: ExportFormat,
        at: DateTime<Utc>,
    ) -> Result<ExportFileName> {
        let name = format!(
            "{}_{}{}",
            ExportFileName::stem_for_code(&course.code),
            at.format("%Y%m%d_%H%M%S"),
            format.file_suffix()
        );
        ExportFileName::new(name).map_err(|e| ExportError::InvalidFileName(e).into())
    }

    /// Exports a course using the current time in the file name
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails
    pub async fn export(
        &self,
        course: &Course,
        format: ExportFormat,
        include_metadata: bool,
    ) -> Result<ExportedFile> {
        self.export_at(course, format, include_metadata, Utc::now())
            .await
    }

    /// Exports a course with an explicit timestamp
    ///
    /// An existing file with the same name is overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails
    pub async fn export_at(
        &self,
        course: &Course,
        format: ExportFormat,
        include_metadata: bool,
        at: DateTime<Utc>,
    ) -> Result<ExportedFile> {
        let start = Instant::now();

        let file_name = Self::file_name_for(course, format, at)?;
        let contents = render(course, format, include_metadata)?;

        self.ensure_dir().await?;
        let path = self.export_dir.join(file_name.as_str());
        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| ExportError::WriteFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        crate::log_export_complete!(format, &file_name, start.elapsed());

        Ok(ExportedFile {
            file_name,
            path,
            format,
        })
    }

    /// Loads a previously exported file
    ///
    /// Returns `Ok(None)` when the name carries path components or no such
    /// file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read
    pub async fn load_download(&self, file_name: &str) -> Result<Option<Download>> {
        let Ok(file_name) = ExportFileName::new(file_name) else {
            tracing::warn!(file_name = %file_name, "Rejected download outside export directory");
            return Ok(None);
        };

        let path = self.export_dir.join(file_name.as_str());
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Ok(None),
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PrometheusError::Io(e.to_string())),
        }

        let bytes = tokio::fs::read(&path).await?;
        Ok(Some(Download {
            media_type: media_type_for(file_name.as_str()),
            file_name,
            bytes,
        }))
    }
}

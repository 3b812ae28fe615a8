//! Export formats and their catalogue entries

use crate::domain::ExportError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Target representation of an exported course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Pdf,
    Docx,
    Scorm,
}

/// Whether a format produces a real document or placeholder text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatStatus {
    Available,
    Placeholder,
}

/// Catalogue entry describing one format
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatInfo {
    pub id: ExportFormat,
    pub name: &'static str,
    pub description: &'static str,
    pub extension: &'static str,
    pub status: FormatStatus,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Json,
        ExportFormat::Pdf,
        ExportFormat::Docx,
        ExportFormat::Scorm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
            ExportFormat::Scorm => "scorm",
        }
    }

    /// Text appended to `<stem>_<timestamp>` to form the file name
    pub fn file_suffix(&self) -> &'static str {
        match self {
            ExportFormat::Json => ".json",
            ExportFormat::Pdf => ".pdf",
            ExportFormat::Docx => ".docx",
            ExportFormat::Scorm => "_scorm.zip",
        }
    }

    pub fn info(&self) -> FormatInfo {
        let (name, description, extension, status) = match self {
            ExportFormat::Json => ("JSON", "Raw JSON data format", ".json", FormatStatus::Available),
            ExportFormat::Pdf => ("PDF", "Portable Document Format", ".pdf", FormatStatus::Placeholder),
            ExportFormat::Docx => (
                "Word Document",
                "Microsoft Word format",
                ".docx",
                FormatStatus::Placeholder,
            ),
            ExportFormat::Scorm => (
                "SCORM Package",
                "SCORM-compliant learning package",
                ".zip",
                FormatStatus::Placeholder,
            ),
        };

        FormatInfo {
            id: *self,
            name,
            description,
            extension,
            status,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| ExportError::UnsupportedFormat(s.to_string()))
    }
}

/// All formats in catalogue order
pub fn catalogue() -> Vec<FormatInfo> {
    ExportFormat::ALL.iter().map(ExportFormat::info).collect()
}

/// Media type for a downloaded file, chosen by its extension
pub fn media_type_for(file_name: &str) -> &'static str {
    match file_name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("json") => "application/json",
        Some("pdf") => "application/pdf",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("zip") => "application/zip",
        _ => "application/octet-stream",
    }
}

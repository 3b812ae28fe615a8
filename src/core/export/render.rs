//! Course renderers
//!
//! JSON is a faithful copy of the record. The document formats are plain
//! text placeholders carrying the file extension of the real format.

use super::format::ExportFormat;
use crate::domain::{Course, PrometheusError, Result};
use std::fmt::Write;

const RULE_WIDTH: usize = 50;

/// Renders a course in the requested format
///
/// `include_metadata` only affects JSON output.
///
/// # Errors
///
/// Returns an error if the course cannot be serialized
pub fn render(course: &Course, format: ExportFormat, include_metadata: bool) -> Result<String> {
    match format {
        ExportFormat::Json => render_json(course, include_metadata),
        ExportFormat::Pdf => Ok(render_pdf(course)),
        ExportFormat::Docx => Ok(render_docx(course)),
        ExportFormat::Scorm => Ok(render_scorm(course)),
    }
}

fn render_json(course: &Course, include_metadata: bool) -> Result<String> {
    let mut value = serde_json::to_value(course)?;
    if !include_metadata {
        if let Some(object) = value.as_object_mut() {
            object.remove("metadata");
        }
    }
    serde_json::to_string_pretty(&value).map_err(PrometheusError::from)
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn or_unspecified(value: Option<&str>) -> &str {
    value.unwrap_or("Not specified")
}

// Writing to a String cannot fail, so the fmt results are discarded.
fn render_pdf(course: &Course) -> String {
    let mut out = String::new();
    out.push_str("PDF EXPORT PLACEHOLDER\n");
    out.push_str(&rule());
    out.push_str("\n\n");

    let _ = writeln!(out, "Course: {}", course.title);
    let _ = writeln!(out, "Code: {}", course.code);
    let _ = writeln!(out, "Level: {}", or_unspecified(course.level.map(|l| l.as_str())));
    let _ = writeln!(
        out,
        "Thematic: {}",
        or_unspecified(course.thematic.map(|t| t.as_str()))
    );
    let _ = writeln!(out, "Duration: {} hours\n", course.duration);

    out.push_str("Description:\n");
    if course.description.trim().is_empty() {
        out.push_str("No description provided.");
    } else {
        out.push_str(&course.description);
    }
    out.push_str("\n\n");

    out.push_str("Learning Objectives:\n");
    for objective in &course.learning_objectives {
        let _ = writeln!(
            out,
            "  - [{}] {}",
            objective.objective_type.as_str(),
            objective.text
        );
    }

    out.push_str("\nModules:\n");
    for module in &course.modules {
        let _ = writeln!(out, "  {}. {}", module.number, module.title);
        for lesson in &module.lessons {
            let _ = writeln!(out, "    - Lesson {}: {}", lesson.number, lesson.title);
        }
    }

    out.push_str(
        "\n\nNote: This is a placeholder. Full PDF generation requires additional libraries.",
    );
    out
}

fn render_docx(course: &Course) -> String {
    format!(
        "DOCX EXPORT PLACEHOLDER\n{}\n\nCourse Title: {}\nCourse Code: {}\n\n\
         Note: This is a placeholder. Full DOCX generation requires a document library.",
        rule(),
        course.title,
        course.code
    )
}

fn render_scorm(course: &Course) -> String {
    format!(
        "SCORM EXPORT PLACEHOLDER\n{}\n\nCourse: {}\n\n\
         Note: This is a placeholder. Full SCORM package generation requires additional implementation.",
        rule(),
        course.title
    )
}

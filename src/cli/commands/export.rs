//! Export command implementation
//!
//! This module implements the `export` command, which writes one stored
//! course to the export directory without starting the server.

use crate::adapters::storage::create_repository;
use crate::config::load_config_or_default;
use crate::core::export::{ExportFormat, ExportService};
use crate::domain::CourseId;
use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Identifier of the course to export
    #[arg(long)]
    pub course_id: String,

    /// Output format (json, pdf, docx, scorm)
    #[arg(short, long, default_value = "json")]
    pub format: ExportFormat,

    /// Omit the metadata block from JSON exports
    #[arg(long)]
    pub no_metadata: bool,

    /// Override the configured export directory
    #[arg(long)]
    pub output_dir: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(course_id = %self.course_id, format = %self.format, "Starting export command");

        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {}", e);
                return Ok(2); // Configuration error exit code
            }
        };

        if let Some(dir) = &self.output_dir {
            tracing::info!(export_dir = %dir, "Overriding export directory from CLI");
            config.export.export_dir = dir.clone();
        }

        let repository = match create_repository(&config.storage).await {
            Ok(r) => r,
            Err(e) => {
                println!("❌ Failed to open course storage");
                println!("   Error: {}", e);
                return Ok(4); // Storage error exit code
            }
        };

        let course = match CourseId::new(&self.course_id) {
            Ok(id) => repository.get(&id).await?,
            Err(_) => None,
        };
        let Some(course) = course else {
            println!("❌ Course not found: {}", self.course_id);
            return Ok(4);
        };

        let exporter = ExportService::new(&config.export);
        let exported = exporter
            .export(&course, self.format, !self.no_metadata)
            .await?;

        println!("✅ Exported \"{}\" as {}", course.title, self.format);
        println!("   File: {}", exported.path.display());
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_export_unknown_course_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("prometheus.toml");
        std::fs::write(
            &config_path,
            format!(
                "[storage]\ndata_dir = \"{}\"\n\n[export]\nexport_dir = \"{}\"\n",
                dir.path().join("data").display(),
                dir.path().join("exports").display()
            ),
        )
        .unwrap();

        let args = ExportArgs {
            course_id: "missing".to_string(),
            format: ExportFormat::Json,
            no_metadata: false,
            output_dir: None,
        };
        let code = args.execute(config_path.to_str().unwrap()).await.unwrap();
        assert_eq!(code, 4);
    }
}

//! Shared application state for HTTP handlers

use crate::adapters::storage::{create_repository, CourseRepository};
use crate::config::PrometheusConfig;
use crate::core::export::ExportService;
use crate::core::generation::TemplateEngine;
use crate::domain::Result;
use crate::lexicon::Lexicon;
use std::sync::Arc;

/// Services shared by every request
///
/// Cloning is cheap: every member is reference counted or small.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PrometheusConfig>,
    pub repository: Arc<dyn CourseRepository + Send + Sync>,
    pub engine: Arc<TemplateEngine>,
    pub exporter: Arc<ExportService>,
    pub lexicon: Arc<Lexicon>,
}

impl AppState {
    /// Builds the state from configuration
    ///
    /// Creates the collection file and export directory if they are missing.
    ///
    /// # Errors
    ///
    /// Returns an error if storage or the export directory cannot be prepared
    pub async fn from_config(config: PrometheusConfig) -> Result<Self> {
        let repository = create_repository(&config.storage).await?;
        let exporter = ExportService::new(&config.export);
        exporter.ensure_dir().await?;

        Ok(Self::new(config, repository, exporter))
    }

    /// Assembles the state from already-built parts
    pub fn new(
        config: PrometheusConfig,
        repository: Arc<dyn CourseRepository + Send + Sync>,
        exporter: ExportService,
    ) -> Self {
        Self {
            engine: Arc::new(TemplateEngine::new(&config.generator)),
            lexicon: Arc::new(Lexicon::new(&config.lexicon)),
            exporter: Arc::new(exporter),
            repository,
            config: Arc::new(config),
        }
    }
}

//! Course repository factory
//!
//! This module builds the configured course repository.

use super::json_file::JsonFileCourseRepository;
use super::traits::CourseRepository;
use crate::config::schema::StorageConfig;
use crate::domain::Result;
use std::sync::Arc;

/// Create the course repository described by the storage configuration
///
/// The collection file and its directory are created if missing.
///
/// # Errors
///
/// Returns an error if the storage location cannot be prepared
pub async fn create_repository(
    config: &StorageConfig,
) -> Result<Arc<dyn CourseRepository + Send + Sync>> {
    let path = config.courses_path();
    tracing::info!(path = %path.display(), "Creating JSON file course repository");

    let repository = JsonFileCourseRepository::new(path);
    repository.ensure_ready().await?;

    Ok(Arc::new(repository) as Arc<dyn CourseRepository + Send + Sync>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_create_repository_prepares_file() {
        let dir = TempDir::new().unwrap();
        let config = StorageConfig {
            data_dir: dir.path().join("nested").to_string_lossy().to_string(),
            courses_file: "courses.json".to_string(),
        };

        let repo = create_repository(&config).await.unwrap();

        assert!(config.courses_path().exists());
        assert!(repo.list().await.unwrap().is_empty());
    }
}

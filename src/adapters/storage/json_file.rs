//! Flat-file course repository
//!
//! The whole collection lives in one JSON array. Every mutation reads the
//! file, changes the in-memory list and rewrites the file in full, so the
//! last writer wins. A single async mutex keeps read-modify-write cycles from
//! interleaving inside one process; nothing coordinates separate processes.

use super::traits::CourseRepository;
use crate::domain::{
    Course, CourseId, CourseUpdate, NewCourse, PrometheusError, Result, StorageError,
};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Course repository backed by a single JSON file
#[derive(Debug)]
pub struct JsonFileCourseRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileCourseRepository {
    /// Creates a repository for the collection file at `path`
    ///
    /// Nothing is touched on disk until [`CourseRepository::ensure_ready`]
    /// or the first mutation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the collection file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_string(&self) -> String {
        self.path.display().to_string()
    }

    /// Reads the whole collection
    ///
    /// A missing file is an empty collection, as is a file that is not a JSON
    /// array. Array entries that are not valid course records are an error.
    async fn read_all(&self) -> Result<Vec<Course>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StorageError::ReadFailed {
                    path: self.path_string(),
                    message: e.to_string(),
                }
                .into())
            }
        };

        let records = match serde_json::from_str::<serde_json::Value>(&contents) {
            Ok(serde_json::Value::Array(records)) => records,
            Ok(_) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Course collection is not a JSON array, treating as empty"
                );
                return Ok(Vec::new());
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Course collection is not valid JSON, treating as empty"
                );
                return Ok(Vec::new());
            }
        };

        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                serde_json::from_value::<Course>(record).map_err(|e| {
                    PrometheusError::from(StorageError::InvalidRecord {
                        path: self.path_string(),
                        message: format!("record {}: {}", index, e),
                    })
                })
            })
            .collect()
    }

    /// Rewrites the whole collection
    async fn write_all(&self, courses: &[Course]) -> Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(courses).map_err(|e| StorageError::WriteFailed {
            path: self.path_string(),
            message: e.to_string(),
        })?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| StorageError::WriteFailed {
                path: self.path_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            path = %self.path.display(),
            count = courses.len(),
            "Course collection written"
        );
        Ok(())
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::InitFailed {
                    path: parent.display().to_string(),
                    message: e.to_string(),
                })?;
        }
        Ok(())
    }
}

#[async_trait]
impl CourseRepository for JsonFileCourseRepository {
    async fn ensure_ready(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.ensure_parent_dir().await?;

        match tokio::fs::metadata(&self.path).await {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tokio::fs::write(&self.path, "[]")
                    .await
                    .map_err(|e| StorageError::InitFailed {
                        path: self.path_string(),
                        message: e.to_string(),
                    })?;
                tracing::info!(path = %self.path.display(), "Created empty course collection");
                Ok(())
            }
            Err(e) => Err(StorageError::InitFailed {
                path: self.path_string(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    async fn health_check(&self) -> Result<()> {
        tokio::fs::read(&self.path)
            .await
            .map(|_| ())
            .map_err(|e| {
                StorageError::ReadFailed {
                    path: self.path_string(),
                    message: e.to_string(),
                }
                .into()
            })
    }

    async fn list(&self) -> Result<Vec<Course>> {
        self.read_all().await
    }

    async fn get(&self, id: &CourseId) -> Result<Option<Course>> {
        let courses = self.read_all().await?;
        Ok(courses.into_iter().find(|course| &course.id == id))
    }

    async fn create(&self, new: NewCourse) -> Result<Course> {
        let _guard = self.write_lock.lock().await;
        let mut courses = self.read_all().await?;

        let course = Course::from_new(CourseId::generate(), new);
        courses.push(course.clone());
        self.write_all(&courses).await?;

        crate::log_course_mutation!("create", &course.id, courses.len());
        Ok(course)
    }

    async fn update(&self, id: &CourseId, update: CourseUpdate) -> Result<Option<Course>> {
        let _guard = self.write_lock.lock().await;
        let mut courses = self.read_all().await?;

        let Some(course) = courses.iter_mut().find(|course| &course.id == id) else {
            return Ok(None);
        };
        course.apply(update);
        let updated = course.clone();

        self.write_all(&courses).await?;

        crate::log_course_mutation!("update", id, courses.len());
        Ok(Some(updated))
    }

    async fn delete(&self, id: &CourseId) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut courses = self.read_all().await?;

        let before = courses.len();
        courses.retain(|course| &course.id != id);
        if courses.len() == before {
            return Ok(false);
        }

        self.write_all(&courses).await?;

        crate::log_course_mutation!("delete", id, courses.len());
        Ok(true)
    }

    async fn duplicate(&self, id: &CourseId) -> Result<Option<Course>> {
        let _guard = self.write_lock.lock().await;
        let mut courses = self.read_all().await?;

        let Some(source) = courses.iter().find(|course| &course.id == id) else {
            return Ok(None);
        };

        let mut copy = Course::from_new(CourseId::generate(), source.duplicate_payload());
        copy.apply(source.content_update());
        courses.push(copy.clone());

        self.write_all(&courses).await?;

        tracing::debug!(source_id = %id, copy_id = %copy.id, "Course duplicated");
        crate::log_course_mutation!("duplicate", &copy.id, courses.len());
        Ok(Some(copy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CourseLevel, CourseStatus, LearningObjective, ObjectiveType};
    use tempfile::TempDir;

    fn repository(dir: &TempDir) -> JsonFileCourseRepository {
        JsonFileCourseRepository::new(dir.path().join("data").join("courses.json"))
    }

    #[tokio::test]
    async fn test_ensure_ready_creates_empty_array() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);

        repo.ensure_ready().await.unwrap();

        let contents = std::fs::read_to_string(repo.path()).unwrap();
        assert_eq!(contents, "[]");
        assert!(repo.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_ensure_ready_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);
        repo.create(NewCourse::new("Kept", "K-1")).await.unwrap();

        repo.ensure_ready().await.unwrap();

        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);
        assert!(repo.list().await.unwrap().is_empty());
        assert!(repo.health_check().await.is_err());
    }

    #[tokio::test]
    async fn test_create_appends_in_order() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);

        let first = repo.create(NewCourse::new("First", "F-1")).await.unwrap();
        let second = repo.create(NewCourse::new("Second", "S-1")).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[1].id, second.id);
        assert_ne!(first.id, second.id);
        assert_eq!(all[0].status, CourseStatus::Draft);
    }

    #[tokio::test]
    async fn test_file_is_pretty_printed_and_keeps_unicode() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);
        repo.create(NewCourse::new("Gestion de crise - été", "GC-1"))
            .await
            .unwrap();

        let contents = std::fs::read_to_string(repo.path()).unwrap();
        assert!(contents.starts_with("[\n  {"));
        assert!(contents.contains("été"));
    }

    #[tokio::test]
    async fn test_update_refreshes_updated_date() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);
        let course = repo.create(NewCourse::new("Policing 101", "POL-101")).await.unwrap();

        let updated = repo
            .update(
                &course.id,
                CourseUpdate {
                    level: Some(CourseLevel::Basic),
                    ..CourseUpdate::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.level, Some(CourseLevel::Basic));
        assert_eq!(updated.title, "Policing 101");
        assert!(updated.metadata.updated_date >= course.metadata.updated_date);
        assert_eq!(repo.get(&course.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);
        let id = CourseId::new("missing").unwrap();
        assert!(repo.update(&id, CourseUpdate::default()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_only_rewrites_when_removed() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);
        let course = repo.create(NewCourse::new("Temp", "T-1")).await.unwrap();

        let missing = CourseId::new("missing").unwrap();
        let before = std::fs::read_to_string(repo.path()).unwrap();
        assert!(!repo.delete(&missing).await.unwrap());
        assert_eq!(std::fs::read_to_string(repo.path()).unwrap(), before);

        assert!(repo.delete(&course.id).await.unwrap());
        assert!(repo.get(&course.id).await.unwrap().is_none());
        assert!(!repo.delete(&course.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_copies_content() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);
        let course = repo.create(NewCourse::new("Resilience", "RES-1")).await.unwrap();
        repo.update(
            &course.id,
            CourseUpdate {
                status: Some(CourseStatus::Published),
                learning_objectives: Some(vec![LearningObjective {
                    id: "obj-1".to_string(),
                    objective_type: ObjectiveType::Terminal,
                    text: "Apply resilience techniques".to_string(),
                    parent_id: None,
                    order: 1,
                }]),
                ..CourseUpdate::default()
            },
        )
        .await
        .unwrap();

        let copy = repo.duplicate(&course.id).await.unwrap().unwrap();

        assert_ne!(copy.id, course.id);
        assert_eq!(copy.title, "Resilience (Copy)");
        assert_eq!(copy.code, "RES-1-COPY");
        assert_eq!(copy.status, CourseStatus::Draft);
        assert_eq!(copy.learning_objectives.len(), 1);
        assert_eq!(repo.list().await.unwrap().len(), 2);

        let missing = CourseId::new("missing").unwrap();
        assert!(repo.duplicate(&missing).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);
        repo.ensure_ready().await.unwrap();

        std::fs::write(repo.path(), "{not json").unwrap();
        assert!(repo.list().await.unwrap().is_empty());

        std::fs::write(repo.path(), r#"{"id": "x"}"#).unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_record_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let repo = repository(&dir);
        repo.ensure_ready().await.unwrap();

        std::fs::write(repo.path(), r#"[{"id": "x", "title": "No code"}]"#).unwrap();
        let err = repo.list().await.unwrap_err();
        assert!(matches!(
            err,
            PrometheusError::Storage(StorageError::InvalidRecord { .. })
        ));
    }

    #[tokio::test]
    async fn test_concurrent_creates_are_not_lost() {
        let dir = TempDir::new().unwrap();
        let repo = std::sync::Arc::new(repository(&dir));
        repo.ensure_ready().await.unwrap();

        let mut handles = Vec::new();
        for i in 0..10 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.create(NewCourse::new(format!("Course {}", i), format!("C-{}", i)))
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.list().await.unwrap().len(), 10);
    }
}

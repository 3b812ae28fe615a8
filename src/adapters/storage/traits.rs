//! Course repository abstraction
//!
//! This module defines the trait that course storage backends implement,
//! together with the search filter they accept.

use crate::domain::{Course, CourseId, CourseUpdate, NewCourse, Result};
use async_trait::async_trait;
use serde::Deserialize;

/// Search criteria for stored courses
///
/// Every provided criterion must match. `title` is a case-insensitive
/// substring match; the other fields compare against the wire value, so an
/// unknown value matches nothing. Blank values are not criteria; call
/// [`CourseFilter::normalized`] before checking [`CourseFilter::is_empty`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CourseFilter {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub thematic: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl CourseFilter {
    /// Drops empty and whitespace-only criteria
    ///
    /// `?level=` from a search form means "any level", not "no level".
    pub fn normalized(self) -> Self {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        Self {
            title: present(self.title),
            level: present(self.level),
            thematic: present(self.thematic),
            status: present(self.status),
        }
    }

    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.level.is_none()
            && self.thematic.is_none()
            && self.status.is_none()
    }

    /// Whether a course satisfies every provided criterion
    pub fn matches(&self, course: &Course) -> bool {
        if let Some(title) = &self.title {
            if !course.title.to_lowercase().contains(&title.to_lowercase()) {
                return false;
            }
        }

        if let Some(level) = &self.level {
            if course.level.map(|l| l.as_str()) != Some(level.as_str()) {
                return false;
            }
        }

        if let Some(thematic) = &self.thematic {
            if course.thematic.map(|t| t.as_str()) != Some(thematic.as_str()) {
                return false;
            }
        }

        if let Some(status) = &self.status {
            if course.status.as_str() != status {
                return false;
            }
        }

        true
    }
}

/// Course repository trait
///
/// Lookups return `Ok(None)` for unknown ids; `Err` is reserved for storage
/// failures.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Create the backing store if it does not exist yet
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be created.
    async fn ensure_ready(&self) -> Result<()>;

    /// Check that the backing store can be read
    ///
    /// # Errors
    ///
    /// Returns an error describing why the store is unavailable.
    async fn health_check(&self) -> Result<()>;

    /// All courses in storage order
    async fn list(&self) -> Result<Vec<Course>>;

    /// A single course by id
    async fn get(&self, id: &CourseId) -> Result<Option<Course>>;

    /// Store a new draft course with a fresh id
    async fn create(&self, new: NewCourse) -> Result<Course>;

    /// Apply a partial update and refresh `updated_date`
    async fn update(&self, id: &CourseId, update: CourseUpdate) -> Result<Option<Course>>;

    /// Remove a course, returning whether one was removed
    async fn delete(&self, id: &CourseId) -> Result<bool>;

    /// Store a copy of a course with its content
    async fn duplicate(&self, id: &CourseId) -> Result<Option<Course>>;

    /// Courses matching every criterion in `filter`
    async fn search(&self, filter: &CourseFilter) -> Result<Vec<Course>> {
        let courses = self.list().await?;
        Ok(courses
            .into_iter()
            .filter(|course| filter.matches(course))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CourseLevel, CourseStatus, CourseThematic};

    fn sample() -> Course {
        let mut new = NewCourse::new("Crisis Communication Essentials", "CRI-201");
        new.level = Some(CourseLevel::Intermediate);
        new.thematic = Some(CourseThematic::CrisisResponse);
        Course::from_new(CourseId::generate(), new)
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = CourseFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&sample()));
    }

    #[test]
    fn test_title_filter_is_case_insensitive() {
        let filter = CourseFilter {
            title: Some("COMMUNICATION".to_string()),
            ..CourseFilter::default()
        };
        assert!(!filter.is_empty());
        assert!(filter.matches(&sample()));
    }

    #[test]
    fn test_wire_value_filters() {
        let course = sample();

        let level = CourseFilter {
            level: Some("intermediate".to_string()),
            thematic: Some("crisis-response".to_string()),
            status: Some(CourseStatus::Draft.as_str().to_string()),
            ..CourseFilter::default()
        };
        assert!(level.matches(&course));

        let wrong_status = CourseFilter {
            status: Some("PUBLISHED".to_string()),
            ..CourseFilter::default()
        };
        assert!(!wrong_status.matches(&course));

        let unknown_level = CourseFilter {
            level: Some("legendary".to_string()),
            ..CourseFilter::default()
        };
        assert!(!unknown_level.matches(&course));
    }

    #[test]
    fn test_blank_criteria_are_dropped() {
        let filter = CourseFilter {
            title: Some(String::new()),
            level: Some("   ".to_string()),
            thematic: Some(String::new()),
            status: Some("DRAFT".to_string()),
        }
        .normalized();

        assert_eq!(filter.status.as_deref(), Some("DRAFT"));
        assert!(filter.title.is_none() && filter.level.is_none() && filter.thematic.is_none());
        assert!(filter.matches(&sample()));

        let blank = CourseFilter {
            title: Some(String::new()),
            level: Some(String::new()),
            ..CourseFilter::default()
        }
        .normalized();
        assert!(blank.is_empty());
    }

    #[test]
    fn test_level_filter_skips_courses_without_level() {
        let course = Course::from_new(CourseId::generate(), NewCourse::new("Untitled", "U-1"));
        let filter = CourseFilter {
            level: Some("basic".to_string()),
            ..CourseFilter::default()
        };
        assert!(!filter.matches(&course));
    }
}

//! Persistence adapters
//!
//! - [`storage`] - Course repository trait and the JSON collection file backend
//!
//! # Example
//!
//! ```rust,no_run
//! use prometheus::adapters::storage::{CourseRepository, JsonFileCourseRepository};
//! use prometheus::domain::NewCourse;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = JsonFileCourseRepository::new("data/courses.json");
//! repository.ensure_ready().await?;
//!
//! let course = repository
//!     .create(NewCourse::new("Leadership Basics", "LB-101"))
//!     .await?;
//! println!("Created {}", course.id);
//! # Ok(())
//! # }
//! ```

pub mod storage;

//! List command implementation
//!
//! Prints stored courses as a table, optionally filtered.

use crate::adapters::storage::{create_repository, CourseFilter};
use crate::config::load_config_or_default;
use crate::domain::Course;
use clap::Args;

/// Arguments for the list command
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Case-insensitive title substring
    #[arg(long)]
    pub title: Option<String>,

    /// Filter by level (e.g. basic, expert)
    #[arg(long)]
    pub level: Option<String>,

    /// Filter by thematic (e.g. leadership)
    #[arg(long)]
    pub thematic: Option<String>,

    /// Filter by status code (e.g. DRAFT)
    #[arg(long)]
    pub status: Option<String>,
}

impl ListArgs {
    fn filter(&self) -> CourseFilter {
        CourseFilter {
            title: self.title.clone(),
            level: self.level.clone(),
            thematic: self.thematic.clone(),
            status: self.status.clone(),
        }
        .normalized()
    }

    /// Execute the list command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Listing courses");

        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {}", e);
                return Ok(2); // Configuration error exit code
            }
        };

        let repository = match create_repository(&config.storage).await {
            Ok(r) => r,
            Err(e) => {
                println!("❌ Failed to open course storage");
                println!("   Error: {}", e);
                return Ok(4); // Storage error exit code
            }
        };

        let filter = self.filter();
        let courses = match repository.search(&filter).await {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to read courses");
                println!("   Error: {}", e);
                return Ok(4);
            }
        };

        if courses.is_empty() {
            if filter.is_empty() {
                println!("No courses found.");
                println!("Create one with POST /api/courses while 'prometheus serve' is running.");
            } else {
                println!("No courses match the specified filters.");
            }
            return Ok(0);
        }

        println!("Found {} course(s):", courses.len());
        println!();
        print!("{}", render_table(&courses));
        println!();
        Ok(0)
    }
}

fn render_table(courses: &[Course]) -> String {
    let mut out = format!(
        "{:<38} {:<12} {:<32} {:<14} {:<12} {:<20}\n",
        "ID", "Code", "Title", "Level", "Status", "Updated"
    );
    out.push_str(&"-".repeat(132));
    out.push('\n');

    for course in courses {
        out.push_str(&format!(
            "{:<38} {:<12} {:<32} {:<14} {:<12} {:<20}\n",
            course.id.as_str(),
            truncate(&course.code, 12),
            truncate(&course.title, 32),
            course.level.map(|l| l.as_str()).unwrap_or("-"),
            course.status.as_str(),
            course.metadata.updated_date.format("%Y-%m-%d %H:%M:%S"),
        ));
    }
    out
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut cut: String = value.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CourseId, CourseLevel, NewCourse};

    #[test]
    fn test_filter_from_args() {
        let args = ListArgs {
            level: Some("expert".to_string()),
            ..Default::default()
        };
        let filter = args.filter();
        assert_eq!(filter.level.as_deref(), Some("expert"));
        assert!(!filter.is_empty());
        assert!(ListArgs::default().filter().is_empty());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn test_render_table_row() {
        let mut new = NewCourse::new("Leadership Basics", "LB-101");
        new.level = Some(CourseLevel::Expert);
        let course = Course::from_new(CourseId::new("c-1").unwrap(), new);

        let table = render_table(&[course]);
        let row = table.lines().nth(2).unwrap();
        assert!(row.starts_with("c-1"));
        assert!(row.contains("LB-101"));
        assert!(row.contains("expert"));
        assert!(row.contains("DRAFT"));
    }
}

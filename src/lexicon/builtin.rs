//! Built-in reference data
//!
//! Derived from the domain enums so the served vocabulary always matches
//! the values storage accepts.

use crate::domain::{CourseLevel, CourseStatus, CourseThematic, DeliveryMethod};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HoursRange {
    min: u32,
    max: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LevelEntry {
    id: CourseLevel,
    name: &'static str,
    description: &'static str,
    hours_range: HoursRange,
    target_audience: &'static str,
}

#[derive(Debug, Serialize)]
struct ThematicEntry {
    id: CourseThematic,
    name: &'static str,
    description: &'static str,
    keywords: &'static [&'static str],
    color: &'static str,
}

#[derive(Debug, Serialize)]
struct StatusEntry {
    label: &'static str,
    color: &'static str,
}

fn level_entry(level: CourseLevel) -> LevelEntry {
    let (description, min, max, target_audience) = match level {
        CourseLevel::Awareness => (
            "Introductory exposure to a topic and its vocabulary",
            1,
            4,
            "All staff",
        ),
        CourseLevel::Foundational => (
            "Core understanding of principles and terminology",
            4,
            16,
            "New practitioners",
        ),
        CourseLevel::Basic => (
            "Practical application of standard procedures",
            8,
            24,
            "Practitioners",
        ),
        CourseLevel::Intermediate => (
            "Analysis of situations and adaptation of procedures",
            16,
            40,
            "Experienced practitioners",
        ),
        CourseLevel::Advanced => (
            "Evaluation of complex problems and recommendation of solutions",
            24,
            80,
            "Specialists",
        ),
        CourseLevel::Expert => (
            "Design of new methods and guidance of others",
            40,
            120,
            "Subject matter experts",
        ),
        CourseLevel::Senior => (
            "Strategic direction and organizational change",
            16,
            60,
            "Senior leaders",
        ),
    };

    LevelEntry {
        id: level,
        name: level.display_name(),
        description,
        hours_range: HoursRange { min, max },
        target_audience,
    }
}

fn thematic_entry(thematic: CourseThematic) -> ThematicEntry {
    let (description, keywords, color): (&str, &[&str], &str) = match thematic {
        CourseThematic::DefenceSecurity => (
            "Protection of people, assets and national interests",
            &["defence", "security", "protection", "threat"],
            "#1E3A8A",
        ),
        CourseThematic::Intelligence => (
            "Collection, analysis and dissemination of intelligence",
            &["analysis", "collection", "assessment", "sources"],
            "#4C1D95",
        ),
        CourseThematic::Policing => (
            "Law enforcement practice and public safety",
            &["law enforcement", "investigation", "community", "public safety"],
            "#1D4ED8",
        ),
        CourseThematic::Leadership => (
            "Leading teams and organizations",
            &["management", "decision making", "teams", "strategy"],
            "#B45309",
        ),
        CourseThematic::CrisisResponse => (
            "Preparing for and responding to emergencies",
            &["emergency", "incident", "response", "coordination"],
            "#B91C1C",
        ),
        CourseThematic::Resilience => (
            "Continuity and recovery of individuals and organizations",
            &["continuity", "recovery", "adaptation", "wellbeing"],
            "#047857",
        ),
        CourseThematic::PersonalSkills => (
            "Communication, self-management and interpersonal skills",
            &["communication", "negotiation", "self-management", "teamwork"],
            "#0E7490",
        ),
        CourseThematic::UserDefined => (
            "A thematic area defined by the course author",
            &["custom"],
            "#6B7280",
        ),
    };

    ThematicEntry {
        id: thematic,
        name: thematic.display_name(),
        description,
        keywords,
        color,
    }
}

fn status_color(status: CourseStatus) -> &'static str {
    match status {
        CourseStatus::Draft => "#6B7280",
        CourseStatus::InProgress => "#3B82F6",
        CourseStatus::Review => "#F59E0B",
        CourseStatus::Approved => "#10B981",
        CourseStatus::Published => "#8B5CF6",
        CourseStatus::Archived => "#374151",
    }
}

const ASSESSMENT_TYPES: [&str; 6] = [
    "Multiple Choice Quiz",
    "Practical Exercise",
    "Case Study Analysis",
    "Written Assignment",
    "Oral Presentation",
    "Scenario-Based Simulation",
];

const PLACEHOLDERS: [(&str, &str); 9] = [
    ("{{COURSE_TITLE}}", "Title of the course"),
    ("{{COURSE_CODE}}", "Course code"),
    ("{{COURSE_LEVEL}}", "Course level"),
    ("{{THEMATIC}}", "Thematic area"),
    ("{{TARGET_AUDIENCE}}", "Intended participants"),
    ("{{DURATION}}", "Total duration in hours"),
    ("{{DELIVERY_METHOD}}", "How the course is delivered"),
    ("{{AUTHOR}}", "Course author"),
    ("{{ORGANIZATION}}", "Owning organization"),
];

/// The complete built-in lexicon document
pub fn document() -> Value {
    let levels: Vec<LevelEntry> = CourseLevel::ALL.into_iter().map(level_entry).collect();
    let thematics: Vec<ThematicEntry> =
        CourseThematic::ALL.into_iter().map(thematic_entry).collect();

    let status_codes: Map<String, Value> = CourseStatus::ALL
        .into_iter()
        .map(|status| {
            let entry = StatusEntry {
                label: status.label(),
                color: status_color(status),
            };
            (status.as_str().to_string(), serde_json::json!(entry))
        })
        .collect();

    let objective_verbs: Map<String, Value> = CourseLevel::ALL
        .into_iter()
        .map(|level| (level.as_str().to_string(), serde_json::json!(level.objective_verbs())))
        .collect();

    let delivery_methods: Vec<&str> = DeliveryMethod::ALL.iter().map(|m| m.as_str()).collect();

    let placeholders: Map<String, Value> = PLACEHOLDERS
        .iter()
        .map(|(token, meaning)| (token.to_string(), Value::from(*meaning)))
        .collect();

    serde_json::json!({
        "courseLevels": levels,
        "courseThematics": thematics,
        "statusCodes": status_codes,
        "templates": {
            "objectiveVerbs": objective_verbs,
            "assessmentTypes": ASSESSMENT_TYPES,
            "deliveryMethods": delivery_methods,
        },
        "placeholders": placeholders,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_covers_every_enum_value() {
        let doc = document();
        assert_eq!(doc["courseLevels"].as_array().unwrap().len(), CourseLevel::ALL.len());
        assert_eq!(
            doc["courseThematics"].as_array().unwrap().len(),
            CourseThematic::ALL.len()
        );
        assert_eq!(doc["statusCodes"].as_object().unwrap().len(), CourseStatus::ALL.len());
        assert_eq!(
            doc["templates"]["deliveryMethods"].as_array().unwrap().len(),
            DeliveryMethod::ALL.len()
        );
    }

    #[test]
    fn test_level_entry_shape() {
        let doc = document();
        let senior = &doc["courseLevels"][6];
        assert_eq!(senior["id"], "senior");
        assert_eq!(senior["name"], "Senior");
        assert!(senior["hoursRange"]["min"].as_u64().unwrap() <= senior["hoursRange"]["max"].as_u64().unwrap());
        assert!(senior["targetAudience"].is_string());
    }

    #[test]
    fn test_status_codes_and_verbs() {
        let doc = document();
        assert_eq!(doc["statusCodes"]["REVIEW"]["label"], "Under Review");
        assert_eq!(doc["templates"]["objectiveVerbs"]["basic"][0], "apply");
        assert_eq!(doc["templates"]["assessmentTypes"][1], "Practical Exercise");
        assert!(doc["placeholders"]["{{COURSE_TITLE}}"].is_string());
    }
}

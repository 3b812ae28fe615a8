//! Course domain model
//!
//! A course record is the unit of storage: base descriptive fields, the
//! authored content (objectives, modules, assessments) and metadata. The
//! wire and on-disk representation uses `snake_case` field names.

use super::ids::CourseId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Course difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    Awareness,
    Foundational,
    Basic,
    Intermediate,
    Advanced,
    Expert,
    Senior,
}

impl CourseLevel {
    /// All levels, from entry level to strategic
    pub const ALL: [CourseLevel; 7] = [
        CourseLevel::Awareness,
        CourseLevel::Foundational,
        CourseLevel::Basic,
        CourseLevel::Intermediate,
        CourseLevel::Advanced,
        CourseLevel::Expert,
        CourseLevel::Senior,
    ];

    /// Wire value of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseLevel::Awareness => "awareness",
            CourseLevel::Foundational => "foundational",
            CourseLevel::Basic => "basic",
            CourseLevel::Intermediate => "intermediate",
            CourseLevel::Advanced => "advanced",
            CourseLevel::Expert => "expert",
            CourseLevel::Senior => "senior",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            CourseLevel::Awareness => "Awareness",
            CourseLevel::Foundational => "Foundational",
            CourseLevel::Basic => "Basic",
            CourseLevel::Intermediate => "Intermediate",
            CourseLevel::Advanced => "Advanced",
            CourseLevel::Expert => "Expert",
            CourseLevel::Senior => "Senior",
        }
    }

    /// Bloom's taxonomy action verbs recommended for objectives at this level
    pub fn objective_verbs(&self) -> &'static [&'static str] {
        match self {
            CourseLevel::Awareness => &["identify", "recognize", "describe", "list", "recall", "name"],
            CourseLevel::Foundational => &[
                "explain",
                "summarize",
                "classify",
                "compare",
                "discuss",
                "interpret",
            ],
            CourseLevel::Basic => &["apply", "demonstrate", "use", "implement", "execute", "solve"],
            CourseLevel::Intermediate => &[
                "analyze",
                "differentiate",
                "examine",
                "investigate",
                "organize",
                "distinguish",
            ],
            CourseLevel::Advanced => &["evaluate", "assess", "critique", "justify", "recommend", "judge"],
            CourseLevel::Expert => &[
                "design",
                "create",
                "develop",
                "formulate",
                "construct",
                "synthesize",
            ],
            CourseLevel::Senior => &[
                "lead",
                "direct",
                "strategize",
                "transform",
                "innovate",
                "orchestrate",
            ],
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CourseLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("Unknown course level: {}", s))
    }
}

/// Course thematic area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseThematic {
    DefenceSecurity,
    Intelligence,
    Policing,
    Leadership,
    CrisisResponse,
    Resilience,
    PersonalSkills,
    UserDefined,
}

impl CourseThematic {
    pub const ALL: [CourseThematic; 8] = [
        CourseThematic::DefenceSecurity,
        CourseThematic::Intelligence,
        CourseThematic::Policing,
        CourseThematic::Leadership,
        CourseThematic::CrisisResponse,
        CourseThematic::Resilience,
        CourseThematic::PersonalSkills,
        CourseThematic::UserDefined,
    ];

    /// Wire value of the thematic
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseThematic::DefenceSecurity => "defence-security",
            CourseThematic::Intelligence => "intelligence",
            CourseThematic::Policing => "policing",
            CourseThematic::Leadership => "leadership",
            CourseThematic::CrisisResponse => "crisis-response",
            CourseThematic::Resilience => "resilience",
            CourseThematic::PersonalSkills => "personal-skills",
            CourseThematic::UserDefined => "user-defined",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            CourseThematic::DefenceSecurity => "Defence and Security",
            CourseThematic::Intelligence => "Intelligence",
            CourseThematic::Policing => "Policing",
            CourseThematic::Leadership => "Leadership",
            CourseThematic::CrisisResponse => "Crisis Response",
            CourseThematic::Resilience => "Resilience",
            CourseThematic::PersonalSkills => "Personal Skills",
            CourseThematic::UserDefined => "User Defined",
        }
    }
}

impl fmt::Display for CourseThematic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Course lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseStatus {
    #[default]
    Draft,
    InProgress,
    Review,
    Approved,
    Published,
    Archived,
}

impl CourseStatus {
    pub const ALL: [CourseStatus; 6] = [
        CourseStatus::Draft,
        CourseStatus::InProgress,
        CourseStatus::Review,
        CourseStatus::Approved,
        CourseStatus::Published,
        CourseStatus::Archived,
    ];

    /// Wire value of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatus::Draft => "DRAFT",
            CourseStatus::InProgress => "IN_PROGRESS",
            CourseStatus::Review => "REVIEW",
            CourseStatus::Approved => "APPROVED",
            CourseStatus::Published => "PUBLISHED",
            CourseStatus::Archived => "ARCHIVED",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            CourseStatus::Draft => "Draft",
            CourseStatus::InProgress => "In Progress",
            CourseStatus::Review => "Under Review",
            CourseStatus::Approved => "Approved",
            CourseStatus::Published => "Published",
            CourseStatus::Archived => "Archived",
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a course is delivered
///
/// The wire value is the display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryMethod {
    #[serde(rename = "Instructor-Led Training (ILT)")]
    Ilt,
    #[serde(rename = "Virtual Instructor-Led Training (VILT)")]
    Vilt,
    #[serde(rename = "Self-Paced eLearning")]
    SelfPaced,
    #[serde(rename = "Blended Learning")]
    Blended,
    #[serde(rename = "On-the-Job Training")]
    OnTheJob,
    #[serde(rename = "Workshop")]
    Workshop,
    #[serde(rename = "Seminar")]
    Seminar,
    #[serde(rename = "Simulation-Based Training")]
    Simulation,
    #[serde(rename = "Mobile Learning")]
    Mobile,
}

impl DeliveryMethod {
    pub const ALL: [DeliveryMethod; 9] = [
        DeliveryMethod::Ilt,
        DeliveryMethod::Vilt,
        DeliveryMethod::SelfPaced,
        DeliveryMethod::Blended,
        DeliveryMethod::OnTheJob,
        DeliveryMethod::Workshop,
        DeliveryMethod::Seminar,
        DeliveryMethod::Simulation,
        DeliveryMethod::Mobile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMethod::Ilt => "Instructor-Led Training (ILT)",
            DeliveryMethod::Vilt => "Virtual Instructor-Led Training (VILT)",
            DeliveryMethod::SelfPaced => "Self-Paced eLearning",
            DeliveryMethod::Blended => "Blended Learning",
            DeliveryMethod::OnTheJob => "On-the-Job Training",
            DeliveryMethod::Workshop => "Workshop",
            DeliveryMethod::Seminar => "Seminar",
            DeliveryMethod::Simulation => "Simulation-Based Training",
            DeliveryMethod::Mobile => "Mobile Learning",
        }
    }
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Objective kind: terminal objectives are course outcomes, enabling
/// objectives support a parent terminal objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectiveType {
    Terminal,
    Enabling,
}

impl ObjectiveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectiveType::Terminal => "terminal",
            ObjectiveType::Enabling => "enabling",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningObjective {
    pub id: String,
    #[serde(rename = "type")]
    pub objective_type: ObjectiveType,
    pub text: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub number: u32,
    pub title: String,
    /// Minutes
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub number: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Minutes
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: String,
    #[serde(rename = "type")]
    pub assessment_type: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub criteria: Vec<String>,
    #[serde(default = "default_passing_score")]
    pub passing_score: u32,
    /// Minutes
    #[serde(default)]
    pub duration: u32,
}

/// Authoring metadata carried by every course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseMetadata {
    #[serde(default = "Utc::now", deserialize_with = "timestamp::deserialize")]
    pub created_date: DateTime<Utc>,
    #[serde(default = "Utc::now", deserialize_with = "timestamp::deserialize")]
    pub updated_date: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub reviewer: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default = "default_version")]
    pub version: String,
}

impl CourseMetadata {
    /// Fresh metadata stamped with the current time
    pub fn new(author: impl Into<String>, organization: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            created_date: now,
            updated_date: now,
            author: author.into(),
            reviewer: None,
            organization,
            version: default_version(),
        }
    }

    /// Refreshes `updated_date`
    pub fn touch(&mut self) {
        self.updated_date = Utc::now();
    }
}

impl Default for CourseMetadata {
    fn default() -> Self {
        Self::new("", None)
    }
}

/// A stored course record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub code: String,
    #[serde(default)]
    pub level: Option<CourseLevel>,
    #[serde(default)]
    pub thematic: Option<CourseThematic>,
    #[serde(default)]
    pub custom_thematic: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub target_audience: String,
    /// Hours
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub delivery_method: Option<DeliveryMethod>,
    #[serde(default)]
    pub status: CourseStatus,
    #[serde(default)]
    pub learning_objectives: Vec<LearningObjective>,
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default)]
    pub assessments: Vec<Assessment>,
    #[serde(default)]
    pub metadata: CourseMetadata,
}

impl Course {
    /// Builds a new draft course from a creation payload
    pub fn from_new(id: CourseId, new: NewCourse) -> Self {
        Self {
            id,
            title: new.title,
            code: new.code,
            level: new.level,
            thematic: new.thematic,
            custom_thematic: new.custom_thematic,
            description: new.description,
            overview: new.overview,
            target_audience: new.target_audience,
            duration: new.duration,
            delivery_method: new.delivery_method,
            status: CourseStatus::Draft,
            learning_objectives: Vec::new(),
            modules: Vec::new(),
            assessments: Vec::new(),
            metadata: CourseMetadata::new(new.author, new.organization),
        }
    }

    /// Applies a partial update in place
    ///
    /// Only fields present in `update` are replaced; `updated_date` is
    /// always refreshed.
    pub fn apply(&mut self, update: CourseUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(code) = update.code {
            self.code = code;
        }
        if let Some(level) = update.level {
            self.level = Some(level);
        }
        if let Some(thematic) = update.thematic {
            self.thematic = Some(thematic);
        }
        if let Some(custom) = update.custom_thematic {
            self.custom_thematic = Some(custom);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(overview) = update.overview {
            self.overview = overview;
        }
        if let Some(audience) = update.target_audience {
            self.target_audience = audience;
        }
        if let Some(duration) = update.duration {
            self.duration = duration;
        }
        if let Some(method) = update.delivery_method {
            self.delivery_method = Some(method);
        }
        if let Some(objectives) = update.learning_objectives {
            self.learning_objectives = objectives;
        }
        if let Some(modules) = update.modules {
            self.modules = modules;
        }
        if let Some(assessments) = update.assessments {
            self.assessments = assessments;
        }
        self.metadata.touch();
    }

    /// Creation payload for a copy of this course
    ///
    /// The copy is titled `"<title> (Copy)"` and coded `"<code>-COPY"`.
    pub fn duplicate_payload(&self) -> NewCourse {
        NewCourse {
            title: format!("{} (Copy)", self.title),
            code: format!("{}-COPY", self.code),
            level: self.level,
            thematic: self.thematic,
            custom_thematic: self.custom_thematic.clone(),
            description: self.description.clone(),
            overview: self.overview.clone(),
            target_audience: self.target_audience.clone(),
            duration: self.duration,
            delivery_method: self.delivery_method,
            author: self.metadata.author.clone(),
            organization: self.metadata.organization.clone(),
        }
    }

    /// Update carrying this course's authored content
    pub fn content_update(&self) -> CourseUpdate {
        CourseUpdate {
            learning_objectives: Some(self.learning_objectives.clone()),
            modules: Some(self.modules.clone()),
            assessments: Some(self.assessments.clone()),
            ..CourseUpdate::default()
        }
    }
}

/// Course creation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCourse {
    pub title: String,
    pub code: String,
    #[serde(default)]
    pub level: Option<CourseLevel>,
    #[serde(default)]
    pub thematic: Option<CourseThematic>,
    #[serde(default)]
    pub custom_thematic: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub delivery_method: Option<DeliveryMethod>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub organization: Option<String>,
}

impl NewCourse {
    /// Minimal payload with only the required fields
    pub fn new(title: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            code: code.into(),
            level: None,
            thematic: None,
            custom_thematic: None,
            description: String::new(),
            overview: String::new(),
            target_audience: String::new(),
            duration: 0,
            delivery_method: None,
            author: String::new(),
            organization: None,
        }
    }
}

/// Partial course update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub level: Option<CourseLevel>,
    #[serde(default)]
    pub thematic: Option<CourseThematic>,
    #[serde(default)]
    pub custom_thematic: Option<String>,
    #[serde(default)]
    pub status: Option<CourseStatus>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub delivery_method: Option<DeliveryMethod>,
    #[serde(default)]
    pub learning_objectives: Option<Vec<LearningObjective>>,
    #[serde(default)]
    pub modules: Option<Vec<Module>>,
    #[serde(default)]
    pub assessments: Option<Vec<Assessment>>,
}

fn default_passing_score() -> u32 {
    70
}

fn default_version() -> String {
    "1.0.0".to_string()
}

/// Reads RFC 3339 timestamps, and offset-less ISO-8601 ones as UTC
///
/// Older collection files carry naive local timestamps such as
/// `2025-01-01T12:00:00.123456`. Writes always use RFC 3339.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer};

    const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    pub(super) fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Ok(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT)
            .map(|naive| Utc.from_utc_datetime(&naive))
            .map_err(|e| format!("invalid timestamp '{raw}': {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample_course() -> Course {
        let mut new = NewCourse::new("Crisis Communication", "CC-201");
        new.level = Some(CourseLevel::Intermediate);
        new.author = "J. Doe".to_string();
        new.organization = Some("Academy".to_string());
        Course::from_new(CourseId::new("course-1").unwrap(), new)
    }

    #[test]
    fn test_enum_wire_values() {
        assert_eq!(
            serde_json::to_value(CourseThematic::CrisisResponse).unwrap(),
            json!("crisis-response")
        );
        assert_eq!(
            serde_json::to_value(CourseStatus::InProgress).unwrap(),
            json!("IN_PROGRESS")
        );
        assert_eq!(
            serde_json::to_value(DeliveryMethod::Vilt).unwrap(),
            json!("Virtual Instructor-Led Training (VILT)")
        );
        assert_eq!(serde_json::to_value(CourseLevel::Senior).unwrap(), json!("senior"));
    }

    #[test]
    fn test_as_str_matches_serde() {
        for level in CourseLevel::ALL {
            assert_eq!(serde_json::to_value(level).unwrap(), json!(level.as_str()));
        }
        for thematic in CourseThematic::ALL {
            assert_eq!(serde_json::to_value(thematic).unwrap(), json!(thematic.as_str()));
        }
        for status in CourseStatus::ALL {
            assert_eq!(serde_json::to_value(status).unwrap(), json!(status.as_str()));
        }
        for method in DeliveryMethod::ALL {
            assert_eq!(serde_json::to_value(method).unwrap(), json!(method.as_str()));
        }
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("expert".parse::<CourseLevel>().unwrap(), CourseLevel::Expert);
        assert!("Expert".parse::<CourseLevel>().is_err());
    }

    #[test]
    fn test_every_level_has_six_verbs() {
        for level in CourseLevel::ALL {
            assert_eq!(level.objective_verbs().len(), 6);
        }
    }

    #[test]
    fn test_objective_type_rejects_unknown() {
        let result = serde_json::from_value::<LearningObjective>(json!({
            "id": "obj-1",
            "type": "optional",
            "text": "x"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_new_defaults() {
        let course = sample_course();
        assert_eq!(course.status, CourseStatus::Draft);
        assert!(course.learning_objectives.is_empty());
        assert_eq!(course.metadata.author, "J. Doe");
        assert_eq!(course.metadata.organization.as_deref(), Some("Academy"));
        assert_eq!(course.metadata.version, "1.0.0");
        assert_eq!(course.metadata.created_date, course.metadata.updated_date);
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut course = sample_course();
        let created = course.metadata.created_date;
        course.apply(CourseUpdate {
            status: Some(CourseStatus::Review),
            duration: Some(16),
            ..CourseUpdate::default()
        });

        assert_eq!(course.status, CourseStatus::Review);
        assert_eq!(course.duration, 16);
        assert_eq!(course.title, "Crisis Communication");
        assert_eq!(course.level, Some(CourseLevel::Intermediate));
        assert_eq!(course.metadata.created_date, created);
        assert!(course.metadata.updated_date >= created);
    }

    #[test]
    fn test_update_null_fields_are_ignored() {
        let update: CourseUpdate =
            serde_json::from_value(json!({"title": null, "overview": "New overview"})).unwrap();
        let mut course = sample_course();
        course.apply(update);
        assert_eq!(course.title, "Crisis Communication");
        assert_eq!(course.overview, "New overview");
    }

    #[test]
    fn test_duplicate_payload() {
        let course = sample_course();
        let copy = course.duplicate_payload();
        assert_eq!(copy.title, "Crisis Communication (Copy)");
        assert_eq!(copy.code, "CC-201-COPY");
        assert_eq!(copy.level, Some(CourseLevel::Intermediate));
        assert_eq!(copy.author, "J. Doe");
    }

    #[test]
    fn test_minimal_record_deserializes_with_defaults() {
        let course: Course = serde_json::from_value(json!({
            "id": "abc",
            "title": "T",
            "code": "C"
        }))
        .unwrap();
        assert_eq!(course.status, CourseStatus::Draft);
        assert_eq!(course.metadata.version, "1.0.0");
        assert!(course.level.is_none());
    }

    #[test]
    fn test_naive_timestamps_are_read_as_utc() {
        let course: Course = serde_json::from_value(json!({
            "id": "abc",
            "title": "T",
            "code": "C",
            "metadata": {
                "created_date": "2025-01-01T12:00:00.123456",
                "updated_date": "2025-01-02T08:30:00"
            }
        }))
        .unwrap();

        let created = course.metadata.created_date;
        assert_eq!(created.to_rfc3339(), "2025-01-01T12:00:00.123456+00:00");
        assert_eq!(
            course.metadata.updated_date,
            Utc.with_ymd_and_hms(2025, 1, 2, 8, 30, 0).unwrap()
        );

        // Written back with an explicit offset
        let written = serde_json::to_value(&course).unwrap();
        let stored = written["metadata"]["created_date"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(stored).is_ok());
    }

    #[test]
    fn test_offset_timestamps_are_normalized_to_utc() {
        let parsed = timestamp::parse("2025-01-01T14:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap());
        assert!(timestamp::parse("yesterday").is_err());
    }

    #[test]
    fn test_new_course_requires_title_and_code() {
        assert!(serde_json::from_value::<NewCourse>(json!({"title": "Only title"})).is_err());
        let new: NewCourse =
            serde_json::from_value(json!({"title": "T", "code": "C", "duration": 8})).unwrap();
        assert_eq!(new.duration, 8);
        assert!(new.author.is_empty());
    }
}

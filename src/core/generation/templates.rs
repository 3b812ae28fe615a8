//! Course content templates
//!
//! Every function here is pure: the same context always yields the same
//! content.

use super::context::GenerationContext;
use crate::domain::{Assessment, CourseLevel, LearningObjective, Lesson, Module, ObjectiveType};

const TERMINAL_OBJECTIVES: usize = 3;
const ENABLING_OBJECTIVES: usize = 2;
const LESSONS_PER_MODULE: u32 = 3;
const LESSON_DURATION: u32 = 45;

/// Objective verbs for a level wire value; unknown levels use `basic`
pub fn verbs_for_level(level: &str) -> &'static [&'static str] {
    level
        .parse::<CourseLevel>()
        .unwrap_or(CourseLevel::Basic)
        .objective_verbs()
}

/// Phrase describing the depth of a level, used in the overview
pub fn scope_phrase(level: &str) -> &'static str {
    match level.parse::<CourseLevel>() {
        Ok(CourseLevel::Awareness) => "introduction to",
        Ok(CourseLevel::Foundational) => "foundational understanding of",
        Ok(CourseLevel::Basic) => "basic skills in",
        Ok(CourseLevel::Intermediate) => "intermediate proficiency in",
        Ok(CourseLevel::Advanced) => "advanced expertise in",
        Ok(CourseLevel::Expert) => "expert-level mastery of",
        Ok(CourseLevel::Senior) => "strategic leadership in",
        Err(_) => "introduction to",
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Three terminal objectives followed by two enabling objectives under `obj-1`
pub fn objectives(ctx: &GenerationContext) -> Vec<LearningObjective> {
    let verbs = verbs_for_level(&ctx.level);
    let verb = |i: usize| capitalize(verbs[i % verbs.len()]);

    let terminal = (0..TERMINAL_OBJECTIVES).map(|i| LearningObjective {
        id: format!("obj-{}", i + 1),
        objective_type: ObjectiveType::Terminal,
        text: format!("{} the key concepts and principles of {}", verb(i), ctx.title),
        parent_id: None,
        order: (i + 1) as u32,
    });

    let enabling = (0..ENABLING_OBJECTIVES).map(|i| {
        let position = TERMINAL_OBJECTIVES + i + 1;
        LearningObjective {
            id: format!("obj-{}", position),
            objective_type: ObjectiveType::Enabling,
            text: format!("{} specific techniques related to {}", verb(i + 3), ctx.title),
            parent_id: Some("obj-1".to_string()),
            order: position as u32,
        }
    });

    terminal.chain(enabling).collect()
}

/// Four modules of three lessons each
pub fn modules(ctx: &GenerationContext) -> Vec<Module> {
    let titles = [
        format!("Introduction to {}", ctx.title),
        format!("Core Concepts of {}", ctx.title),
        "Practical Applications".to_string(),
        "Advanced Topics and Case Studies".to_string(),
    ];

    titles
        .into_iter()
        .enumerate()
        .map(|(index, title)| {
            let number = index as u32 + 1;
            let lessons: Vec<Lesson> = (1..=LESSONS_PER_MODULE)
                .map(|l| lesson(number, l, &title))
                .collect();

            Module {
                id: format!("module-{}", number),
                number,
                description: format!("This module covers {}", title.to_lowercase()),
                duration: lessons.iter().map(|lesson| lesson.duration).sum(),
                title,
                lessons,
            }
        })
        .collect()
}

fn lesson(module_number: u32, number: u32, module_title: &str) -> Lesson {
    Lesson {
        id: format!("lesson-{}-{}", module_number, number),
        number,
        title: format!("Lesson {}: {} Part {}", number, module_title, number),
        duration: LESSON_DURATION,
        content: format!("Content for {} - Part {}", module_title, number),
        key_points: (1..=3)
            .map(|k| format!("Key point {} for lesson {}", k, number))
            .collect(),
        activities: vec![
            format!("Discussion activity for lesson {}", number),
            format!("Practical exercise for lesson {}", number),
        ],
    }
}

/// A knowledge check quiz and a practical assessment
pub fn assessments(ctx: &GenerationContext) -> Vec<Assessment> {
    vec![
        Assessment {
            id: "assess-1".to_string(),
            assessment_type: "Multiple Choice Quiz".to_string(),
            title: format!("{} Knowledge Check", ctx.title),
            description: "Assess understanding of core concepts".to_string(),
            criteria: vec![
                "Demonstrate understanding of key terminology".to_string(),
                "Identify correct procedures and processes".to_string(),
                "Apply concepts to scenario-based questions".to_string(),
            ],
            passing_score: 70,
            duration: 30,
        },
        Assessment {
            id: "assess-2".to_string(),
            assessment_type: "Practical Exercise".to_string(),
            title: format!("{} Practical Assessment", ctx.title),
            description: "Apply learned skills in a practical scenario".to_string(),
            criteria: vec![
                "Complete all required tasks".to_string(),
                "Demonstrate proper technique".to_string(),
                "Achieve required performance standards".to_string(),
            ],
            passing_score: 75,
            duration: 60,
        },
    ]
}

/// One-paragraph overview
pub fn overview(ctx: &GenerationContext) -> String {
    format!(
        "This course provides a comprehensive {} {}. Designed for {}, participants will gain \
         practical knowledge and skills applicable to real-world scenarios.",
        scope_phrase(&ctx.level),
        ctx.title,
        ctx.target_audience
    )
}

/// Four-paragraph description
pub fn description(ctx: &GenerationContext) -> String {
    let paragraphs = [
        format!(
            "This {}-level course on {} is designed to equip {} with the knowledge and skills \
             needed to excel in their roles.",
            ctx.level, ctx.title, ctx.target_audience
        ),
        "Through a combination of theoretical instruction and practical exercises, participants \
         will develop a thorough understanding of key concepts, best practices, and emerging \
         trends in the field."
            .to_string(),
        "The course covers essential topics including foundational principles, practical \
         applications, and advanced techniques. Participants will engage in hands-on \
         activities, case studies, and scenario-based learning to reinforce their understanding."
            .to_string(),
        "Upon completion, participants will be able to apply their learning directly to their \
         professional responsibilities, contributing to organizational success and personal \
         career development."
            .to_string(),
    ];
    paragraphs.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(level: &str) -> GenerationContext {
        GenerationContext {
            title: "Crisis Leadership".to_string(),
            level: level.to_string(),
            ..GenerationContext::default()
        }
    }

    #[test]
    fn test_objectives_structure() {
        let objectives = objectives(&ctx("advanced"));
        assert_eq!(objectives.len(), 5);

        assert_eq!(objectives[0].id, "obj-1");
        assert_eq!(
            objectives[0].text,
            "Evaluate the key concepts and principles of Crisis Leadership"
        );
        assert_eq!(objectives[2].text, "Critique the key concepts and principles of Crisis Leadership");
        assert!(objectives[..3]
            .iter()
            .all(|o| o.objective_type == ObjectiveType::Terminal && o.parent_id.is_none()));

        assert_eq!(objectives[3].id, "obj-4");
        assert_eq!(objectives[3].text, "Justify specific techniques related to Crisis Leadership");
        assert_eq!(objectives[4].text, "Recommend specific techniques related to Crisis Leadership");
        assert_eq!(objectives[4].parent_id.as_deref(), Some("obj-1"));
        assert_eq!(objectives[4].order, 5);
    }

    #[test]
    fn test_unknown_level_uses_basic_verbs() {
        let objectives = objectives(&ctx("grandmaster"));
        assert!(objectives[0].text.starts_with("Apply "));
        assert_eq!(scope_phrase("grandmaster"), "introduction to");
        assert_eq!(scope_phrase("basic"), "basic skills in");
    }

    #[test]
    fn test_modules_structure() {
        let modules = modules(&ctx("basic"));
        assert_eq!(modules.len(), 4);
        assert_eq!(modules[0].title, "Introduction to Crisis Leadership");
        assert_eq!(modules[0].description, "This module covers introduction to crisis leadership");
        assert_eq!(modules[2].title, "Practical Applications");

        for module in &modules {
            assert_eq!(module.lessons.len(), 3);
            assert_eq!(module.duration, 135);
        }

        let lesson = &modules[1].lessons[1];
        assert_eq!(lesson.id, "lesson-2-2");
        assert_eq!(lesson.title, "Lesson 2: Core Concepts of Crisis Leadership Part 2");
        assert_eq!(lesson.content, "Content for Core Concepts of Crisis Leadership - Part 2");
        assert_eq!(lesson.key_points[2], "Key point 3 for lesson 2");
        assert_eq!(lesson.activities.len(), 2);
    }

    #[test]
    fn test_assessments() {
        let assessments = assessments(&ctx("basic"));
        assert_eq!(assessments.len(), 2);
        assert_eq!(assessments[0].title, "Crisis Leadership Knowledge Check");
        assert_eq!(assessments[1].passing_score, 75);
        assert_eq!(assessments[1].duration, 60);
    }

    #[test]
    fn test_overview_and_description() {
        let context = ctx("expert");
        assert_eq!(
            overview(&context),
            "This course provides a comprehensive expert-level mastery of Crisis Leadership. \
             Designed for Professionals, participants will gain practical knowledge and skills \
             applicable to real-world scenarios."
        );

        let text = description(&context);
        assert!(text.starts_with("This expert-level course on Crisis Leadership is designed to equip Professionals"));
        assert_eq!(text.split("\n\n").count(), 4);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("apply"), "Apply");
        assert_eq!(capitalize(""), "");
    }
}

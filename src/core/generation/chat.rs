//! Authoring assistant replies
//!
//! Replies are canned and chosen by keyword.

use serde_json::Value;

/// Follow-up prompts offered with every reply
pub const SUGGESTIONS: [&str; 3] = [
    "Generate learning objectives",
    "Create module structure",
    "Suggest assessments",
];

const OBJECTIVES_REPLY: &str = "I can help you create learning objectives! For this course level, \
consider using action verbs like 'analyze', 'evaluate', or 'apply'. Would you like me to generate \
some specific objectives based on your course topic?";

const MODULES_REPLY: &str = "Course modules should follow a logical progression from foundational \
concepts to advanced applications. I recommend starting with an introduction, then covering core \
concepts, practical applications, and finally advanced topics. Would you like me to suggest a \
module structure?";

const ASSESSMENTS_REPLY: &str = "Effective assessments should align with your learning objectives. \
Consider using a mix of formative (quizzes, discussions) and summative (practical exercises, final \
exams) assessments. Would you like me to suggest assessment types for your course?";

const REVIEW_WITHOUT_CONTEXT_REPLY: &str =
    "Please configure your course details first, and I'll be happy to review them.";

const OVERVIEW_REPLY: &str = "I'm here to help you create an effective course! I can assist \
with:\n\n• Generating learning objectives\n• Structuring course modules\n• Creating \
assessments\n• Reviewing your course design\n\nWhat would you like help with?";

/// Picks a reply for `message`
///
/// Keywords are matched case-insensitively and the first match wins. A
/// `course_context` is only consulted for review requests; an empty object
/// counts as no context.
pub fn reply(message: &str, course_context: Option<&Value>) -> String {
    let message = message.to_lowercase();

    if message.contains("objective") {
        return OBJECTIVES_REPLY.to_string();
    }

    if message.contains("module") || message.contains("content") {
        return MODULES_REPLY.to_string();
    }

    if message.contains("assessment") || message.contains("test") {
        return ASSESSMENTS_REPLY.to_string();
    }

    if message.contains("review") {
        return match course_context.filter(|ctx| has_content(ctx)) {
            Some(ctx) => review_reply(ctx),
            None => REVIEW_WITHOUT_CONTEXT_REPLY.to_string(),
        };
    }

    OVERVIEW_REPLY.to_string()
}

fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}

fn review_reply(course_context: &Value) -> String {
    let title = course_context
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or("your course");

    format!(
        "Looking at {}, I have a few suggestions:\n\n\
         1. Consider adding more specific learning objectives\n\
         2. The course duration seems appropriate for the level\n\
         3. Make sure to include practical exercises in each module\n\n\
         Would you like me to elaborate on any of these points?",
        title
    )
}

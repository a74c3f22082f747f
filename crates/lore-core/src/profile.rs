use serde::{Deserialize, Serialize};

use crate::enums::{KnowledgeLevel, PreferredFormat};

pub const DEFAULT_LEARNING_GOAL: &str = "General understanding";
pub const DEFAULT_INTEREST_FOCUS: &str = "None specified";
pub const DEFAULT_CLARIFYING_QUESTION: &str = "Not specified";

/// Learner preferences and goals that personalise a report.
///
/// Built once per report request and never changed afterwards; the report
/// assembler only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerProfile {
    pub learning_goal: String,
    pub interest_focus: String,
    pub knowledge_level: KnowledgeLevel,
    pub preferred_format: PreferredFormat,
    pub clarifying_question: String,
}

impl Default for LearnerProfile {
    fn default() -> Self {
        Self {
            learning_goal: DEFAULT_LEARNING_GOAL.to_string(),
            interest_focus: DEFAULT_INTEREST_FOCUS.to_string(),
            knowledge_level: KnowledgeLevel::default(),
            preferred_format: PreferredFormat::default(),
            clarifying_question: DEFAULT_CLARIFYING_QUESTION.to_string(),
        }
    }
}

impl LearnerProfile {
    /// Build a profile from raw form inputs.
    ///
    /// Missing or blank free-text answers fall back to their defaults. Non-blank
    /// answers are kept verbatim.
    #[must_use]
    pub fn from_inputs(
        learning_goal: Option<&str>,
        interest_focus: Option<&str>,
        knowledge_level: KnowledgeLevel,
        preferred_format: PreferredFormat,
        clarifying_question: Option<&str>,
    ) -> Self {
        Self {
            learning_goal: or_default(learning_goal, DEFAULT_LEARNING_GOAL),
            interest_focus: or_default(interest_focus, DEFAULT_INTEREST_FOCUS),
            knowledge_level,
            preferred_format,
            clarifying_question: or_default(clarifying_question, DEFAULT_CLARIFYING_QUESTION),
        }
    }
}

fn or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

use super::types::Difficulty;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nudge {
    pub id: String,

    pub title: String,

    /// What triggered the nudge.
    #[serde(default)]
    pub reason: String,

    /// Literal text the facilitator could say or do.
    #[serde(default)]
    pub suggestion: String,

    #[serde(default)]
    pub difficulty: Difficulty,

    /// Seconds before a similar nudge should surface again. Display only.
    #[serde(default)]
    pub cooldown: u64,
}

impl Nudge {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            reason: String::new(),
            suggestion: String::new(),
            difficulty: Difficulty::default(),
            cooldown: 0,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = suggestion.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_cooldown(mut self, cooldown: u64) -> Self {
        self.cooldown = cooldown;
        self
    }
}

//! Goal domain model.
//!
//! # Responsibility
//! - Define the goal record and its category taxonomy.
//! - Own the completion derivation shared by create/update/toggle paths.
//!
//! # Invariants
//! - `completed == (progress == 100)` after every mutation.
//! - Unknown category tokens are preserved verbatim and rendered with
//!   fallback styling instead of being rejected.

use crate::model::EntityId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Goal category. The six known values mirror the form's fixed choice set;
/// anything else is kept as-is and displayed as a fallback label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GoalCategory {
    Health,
    Career,
    Education,
    Finance,
    Personal,
    Hobbies,
    Unrecognized(String),
}

impl GoalCategory {
    /// Stable storage/filter key.
    pub fn as_key(&self) -> &str {
        match self {
            Self::Health => "health",
            Self::Career => "career",
            Self::Education => "education",
            Self::Finance => "finance",
            Self::Personal => "personal",
            Self::Hobbies => "hobbies",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Human-facing label shown on cards.
    pub fn label(&self) -> &str {
        match self {
            Self::Health => "Health & Fitness",
            Self::Career => "Career",
            Self::Education => "Education",
            Self::Finance => "Finance",
            Self::Personal => "Personal Growth",
            Self::Hobbies => "Hobbies",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for GoalCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "health" => Self::Health,
            "career" => Self::Career,
            "education" => Self::Education,
            "finance" => Self::Finance,
            "personal" => Self::Personal,
            "hobbies" => Self::Hobbies,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<GoalCategory> for String {
    fn from(value: GoalCategory) -> Self {
        value.as_key().to_string()
    }
}

/// A tracked yearly goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub category: GoalCategory,
    /// Percent complete within `[0, 100]`.
    pub progress: u8,
    /// Derived: always equals `progress == 100`.
    pub completed: bool,
    /// Creation timestamp in epoch milliseconds; drives newest-first views.
    pub created_at: i64,
    pub deadline: Option<NaiveDate>,
}

/// Completion derivation applied by every goal mutation path.
pub fn completion_for(progress: u8) -> bool {
    progress == 100
}

/// Progress value a goal falls back to when reopened via toggle.
///
/// A reopened goal cannot stay at 100 or it would immediately re-derive as
/// completed, so the stored progress is capped at 99.
pub fn reopened_progress(progress: u8) -> u8 {
    progress.min(99)
}

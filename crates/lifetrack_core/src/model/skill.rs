//! Skill domain model.
//!
//! # Responsibility
//! - Define the skill record, category and proficiency taxonomies.
//! - Own the description derivation regenerated on every name or
//!   proficiency change.
//!
//! # Invariants
//! - `description == "{name} - {Proficiency} level"` after every mutation
//!   that touches name or proficiency.
//! - A skill counts as completed exactly when `progress == 100`.

use crate::model::{capitalize, EntityId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Skill category; short labels are a view concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SkillCategory {
    Tech,
    Language,
    SoftSkills,
    Creative,
    Other,
    Unrecognized(String),
}

impl SkillCategory {
    pub fn as_key(&self) -> &str {
        match self {
            Self::Tech => "tech",
            Self::Language => "language",
            Self::SoftSkills => "soft-skills",
            Self::Creative => "creative",
            Self::Other => "other",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for SkillCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "tech" => Self::Tech,
            "language" => Self::Language,
            "soft-skills" => Self::SoftSkills,
            "creative" => Self::Creative,
            "other" => Self::Other,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<SkillCategory> for String {
    fn from(value: SkillCategory) -> Self {
        value.as_key().to_string()
    }
}

/// Self-assessed proficiency tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    Unrecognized(String),
}

impl Proficiency {
    pub fn as_key(&self) -> &str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Capitalized label used in descriptions and proficiency badges.
    pub fn label(&self) -> String {
        capitalize(self.as_key())
    }
}

impl From<String> for Proficiency {
    fn from(value: String) -> Self {
        match value.as_str() {
            "beginner" => Self::Beginner,
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            "expert" => Self::Expert,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<Proficiency> for String {
    fn from(value: Proficiency) -> Self {
        value.as_key().to_string()
    }
}

/// A learned or in-progress skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: EntityId,
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: Proficiency,
    pub learned_date: NaiveDate,
    /// Percent complete within `[0, 100]`.
    pub progress: u8,
    pub notes: Option<String>,
    /// Derived: `describe(name, proficiency)`.
    pub description: String,
}

/// Description derivation applied whenever name or proficiency change.
pub fn describe(name: &str, proficiency: &Proficiency) -> String {
    format!("{name} - {} level", proficiency.label())
}

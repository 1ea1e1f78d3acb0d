//! Project domain model.
//!
//! # Responsibility
//! - Define the project record and status taxonomy.
//! - Own the status derivation applied by every project mutation path.
//!
//! # Invariants
//! - `status` is a pure function of `progress`: 0 → planning,
//!   1..=99 → in-progress, 100 → completed.

use crate::model::EntityId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Project lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Completed,
    Unrecognized(String),
}

impl ProjectStatus {
    /// Stable storage key; also used as a styling hook by views.
    pub fn as_key(&self) -> &str {
        match self {
            Self::Planning => "planning",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "planning" => Self::Planning,
            "in-progress" => Self::InProgress,
            "completed" => Self::Completed,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(value: ProjectStatus) -> Self {
        value.as_key().to_string()
    }
}

/// A tracked project with derived status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    /// Derived: always `status_for(progress)` on write paths.
    pub status: ProjectStatus,
    /// Percent complete within `[0, 100]`.
    pub progress: u8,
    pub deadline: Option<NaiveDate>,
}

/// Status derivation applied by every project mutation path.
pub fn status_for(progress: u8) -> ProjectStatus {
    match progress {
        0 => ProjectStatus::Planning,
        100 => ProjectStatus::Completed,
        _ => ProjectStatus::InProgress,
    }
}

//! Personal rule domain model.

use crate::model::EntityId;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fixed icon set a new rule draws from when no icon is supplied.
pub const RULE_ICONS: [&str; 10] = [
    "star",
    "check-circle",
    "brain",
    "heart",
    "clock",
    "sun",
    "moon",
    "book",
    "running",
    "dumbbell",
];

/// A personal rule displayed with a symbolic icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    /// Symbolic icon name from `RULE_ICONS`, or any caller-supplied name.
    pub icon: String,
}

/// Picks a uniformly random icon from the fixed set.
pub fn random_icon() -> &'static str {
    let index = rand::rng().random_range(0..RULE_ICONS.len());
    RULE_ICONS[index]
}

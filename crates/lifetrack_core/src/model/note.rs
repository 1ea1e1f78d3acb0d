//! Note domain model.

use crate::model::EntityId;
use serde::{Deserialize, Serialize};

/// Note flavor; drives icon and accent color in the notes view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NoteKind {
    Idea,
    Note,
    Inspiration,
    Reminder,
    Unrecognized(String),
}

impl NoteKind {
    pub fn as_key(&self) -> &str {
        match self {
            Self::Idea => "idea",
            Self::Note => "note",
            Self::Inspiration => "inspiration",
            Self::Reminder => "reminder",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for NoteKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "idea" => Self::Idea,
            "note" => Self::Note,
            "inspiration" => Self::Inspiration,
            "reminder" => Self::Reminder,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<NoteKind> for String {
    fn from(value: NoteKind) -> Self {
        value.as_key().to_string()
    }
}

/// A free-form note, idea, inspiration or reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    /// Serialized as `type` to match the persisted collection format.
    #[serde(rename = "type")]
    pub kind: NoteKind,
    /// Creation timestamp in epoch milliseconds; drives newest-first views.
    pub created_at: i64,
}

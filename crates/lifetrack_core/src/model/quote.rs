//! Motivational quote domain model.

use crate::model::EntityId;
use serde::{Deserialize, Serialize};

/// A quote shown in the library view and the rotating banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: EntityId,
    pub content: String,
    pub author: String,
}

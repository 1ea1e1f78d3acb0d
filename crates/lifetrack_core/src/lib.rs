//! Core domain logic for LifeTrack.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod kv;
pub mod logging;
pub mod model;
pub mod rotation;
pub mod stats;
pub mod store;
pub mod view;

pub use kv::{collection_key, KvBackend, KvError, KvResult, SqliteKvBackend};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::goal::{Goal, GoalCategory};
pub use model::note::{Note, NoteKind};
pub use model::project::{Project, ProjectStatus};
pub use model::quote::Quote;
pub use model::rule::Rule;
pub use model::skill::{Proficiency, Skill, SkillCategory};
pub use model::{EntityId, EntityKind};
pub use rotation::{banner, random_quote, QuoteRotation, ROTATION_PERIOD};
pub use stats::DashboardStats;
pub use store::{
    GoalDraft, NoteDraft, NotificationSink, ProjectDraft, QuoteDraft, RuleDraft, SkillDraft,
    StoreError, StoreResult, TrackerStore,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

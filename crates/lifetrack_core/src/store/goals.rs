//! Goal CRUD operations.
//!
//! # Invariants
//! - `completed == (progress == 100)` holds after create, progress update
//!   and completion toggle alike.
//! - Every mutation persists the whole goal collection before returning.

use super::{parse_optional_date, parse_progress_field, require, StoreResult, TrackerStore};
use crate::kv::KvBackend;
use crate::model::goal::{completion_for, reopened_progress, Goal, GoalCategory};
use crate::model::{allocate_id, now_epoch_ms, EntityId, EntityKind};
use crate::store::StoreError;
use log::info;

/// Raw goal form fields as supplied by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct GoalDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    /// Progress percent as a raw string, e.g. `"40"`.
    pub progress: String,
    /// `YYYY-MM-DD` or empty for no deadline.
    pub deadline: String,
}

impl<B: KvBackend> TrackerStore<B> {
    /// Creates a goal from raw form fields.
    ///
    /// Parses progress and deadline, derives completion, appends and
    /// persists. Nothing is mutated when validation or persistence fails.
    pub fn create_goal(&mut self, draft: GoalDraft) -> StoreResult<Goal> {
        let title = require(&draft.title, "goal title is required")?;
        let progress = parse_progress_field(&draft.progress)?;
        let deadline = parse_optional_date(&draft.deadline, "goal deadline")?;

        let goal = Goal {
            id: allocate_id(self.goals.iter().map(|goal| goal.id)),
            title,
            description: draft.description,
            category: GoalCategory::from(draft.category),
            progress,
            completed: completion_for(progress),
            created_at: now_epoch_ms(),
            deadline,
        };

        self.goals.push(goal);
        if let Err(err) = self.persist_goals() {
            self.goals.pop();
            return Err(err);
        }

        let created = self.goals[self.goals.len() - 1].clone();
        info!(
            "event=goal_create module=store status=ok id={} progress={}",
            created.id, created.progress
        );
        self.notify("Goal added successfully!");
        Ok(created)
    }

    /// Sets a goal's progress from a raw string and rederives completion.
    pub fn update_goal_progress(&mut self, id: EntityId, raw_progress: &str) -> StoreResult<Goal> {
        let progress = parse_progress_field(raw_progress)?;
        let index = self.goal_index(id)?;

        let previous = self.goals[index].clone();
        self.goals[index].progress = progress;
        self.goals[index].completed = completion_for(progress);

        if let Err(err) = self.persist_goals() {
            self.goals[index] = previous;
            return Err(err);
        }

        let updated = self.goals[index].clone();
        info!(
            "event=goal_progress module=store status=ok id={id} progress={progress} completed={}",
            updated.completed
        );
        self.notify(&format!("Progress updated for \"{}\"!", updated.title));
        Ok(updated)
    }

    /// Flips a goal between completed and active.
    ///
    /// Completing forces progress to 100; reopening caps progress at 99 so
    /// the completion derivation stays consistent.
    pub fn toggle_goal_completion(&mut self, id: EntityId) -> StoreResult<Goal> {
        let index = self.goal_index(id)?;

        let previous = self.goals[index].clone();
        let now_completed = !previous.completed;
        self.goals[index].completed = now_completed;
        self.goals[index].progress = if now_completed {
            100
        } else {
            reopened_progress(previous.progress)
        };

        if let Err(err) = self.persist_goals() {
            self.goals[index] = previous;
            return Err(err);
        }

        let updated = self.goals[index].clone();
        let action = if updated.completed {
            "completed"
        } else {
            "reopened"
        };
        info!("event=goal_toggle module=store status=ok id={id} action={action}");
        self.notify(&format!("\"{}\" {action}!", updated.title));
        Ok(updated)
    }

    /// Removes a goal and returns it for confirmation messaging.
    pub fn delete_goal(&mut self, id: EntityId) -> StoreResult<Goal> {
        let index = self.goal_index(id)?;

        let removed = self.goals.remove(index);
        if let Err(err) = self.persist_goals() {
            self.goals.insert(index, removed);
            return Err(err);
        }

        info!("event=goal_delete module=store status=ok id={id}");
        self.notify(&format!("\"{}\" has been deleted.", removed.title));
        Ok(removed)
    }

    fn goal_index(&self, id: EntityId) -> StoreResult<usize> {
        self.goals
            .iter()
            .position(|goal| goal.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Goal,
                id,
            })
    }

    fn persist_goals(&mut self) -> StoreResult<()> {
        super::persist_collection(&mut self.backend, EntityKind::Goal, &self.goals)
    }
}

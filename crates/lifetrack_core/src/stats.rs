//! Derived dashboard statistics.
//!
//! # Responsibility
//! - Compute aggregate counts and percentages over store snapshots.
//!
//! # Invariants
//! - Pure and recomputed on demand; no caching or invalidation state.
//! - Empty collections yield zeros, never errors.

use crate::model::goal::Goal;
use crate::model::note::Note;
use crate::model::project::{Project, ProjectStatus};
use crate::model::skill::Skill;

/// Aggregate numbers shown on the dashboard header cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub goal_count: usize,
    pub completed_goal_count: usize,
    /// Rounded mean goal progress; 0 when there are no goals.
    pub average_goal_progress: u8,
    pub project_count: usize,
    pub completed_project_count: usize,
    pub skill_count: usize,
    pub completed_skill_count: usize,
    pub note_count: usize,
}

impl DashboardStats {
    /// Computes statistics over one snapshot of the four contributing
    /// collections.
    pub fn compute(goals: &[Goal], projects: &[Project], skills: &[Skill], notes: &[Note]) -> Self {
        Self {
            goal_count: goals.len(),
            completed_goal_count: goals.iter().filter(|goal| goal.completed).count(),
            average_goal_progress: average_progress(goals),
            project_count: projects.len(),
            completed_project_count: projects
                .iter()
                .filter(|project| project.status == ProjectStatus::Completed)
                .count(),
            skill_count: skills.len(),
            completed_skill_count: skills.iter().filter(|skill| skill.progress == 100).count(),
            note_count: notes.len(),
        }
    }
}

fn average_progress(goals: &[Goal]) -> u8 {
    if goals.is_empty() {
        return 0;
    }
    let total: u32 = goals.iter().map(|goal| u32::from(goal.progress)).sum();
    let mean = f64::from(total) / goals.len() as f64;
    // Mean of values in [0, 100] rounds back into [0, 100].
    mean.round() as u8
}

#[cfg(test)]
mod tests {
    use super::DashboardStats;

    #[test]
    fn empty_snapshot_yields_zeros() {
        let stats = DashboardStats::compute(&[], &[], &[], &[]);
        assert_eq!(stats, DashboardStats::default());
    }
}

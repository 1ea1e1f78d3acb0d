//! Goal list projections.
//!
//! Three completion views (all / active-only / completed-only) plus the
//! dashboard's recent-goals strip, all computed from the same source
//! collection without mutating it.

use super::ListView;
use crate::model::goal::{Goal, GoalCategory};
use crate::model::EntityId;
use chrono::NaiveDate;

const EMPTY_ALL: &str = "No goals found. Add your first goal!";
const EMPTY_ACTIVE: &str = "No active goals. Add a new goal to get started!";
const EMPTY_COMPLETED: &str = "No completed goals yet. Keep working!";
const EMPTY_RECENT: &str = "No goals yet. Add your first goal!";

/// How many goals the dashboard strip shows.
const RECENT_GOAL_LIMIT: usize = 3;

/// Completion facet of a goal list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionFilter {
    #[default]
    All,
    ActiveOnly,
    CompletedOnly,
}

/// Filter options for the goals page.
#[derive(Debug, Clone, Default)]
pub struct GoalListQuery {
    /// Category key to match; `None` means all categories.
    pub category: Option<String>,
    pub completion: CompletionFilter,
}

/// Urgency tier for the deadline badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineUrgency {
    Overdue,
    /// Less than 30 days away.
    Approaching,
    Comfortable,
}

/// Deadline countdown badge rendered on goal cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineBadge {
    pub days_left: i64,
    pub urgency: DeadlineUrgency,
    pub label: String,
}

/// Display-ready goal card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalCard {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub category_label: String,
    pub category_color: &'static str,
    pub progress: u8,
    pub completed: bool,
    pub status_caption: &'static str,
    pub deadline: Option<DeadlineBadge>,
    pub created_at: i64,
}

/// Projects the goal collection into one of the three completion views,
/// optionally narrowed to a category, newest first.
pub fn goal_list(goals: &[Goal], query: &GoalListQuery, today: NaiveDate) -> ListView<GoalCard> {
    let mut matched: Vec<&Goal> = goals
        .iter()
        .filter(|goal| match query.completion {
            CompletionFilter::All => true,
            CompletionFilter::ActiveOnly => !goal.completed,
            CompletionFilter::CompletedOnly => goal.completed,
        })
        .filter(|goal| match &query.category {
            Some(key) => goal.category.as_key() == key.as_str(),
            None => true,
        })
        .collect();
    sort_newest_first(&mut matched);

    let empty_message = match query.completion {
        CompletionFilter::All => EMPTY_ALL,
        CompletionFilter::ActiveOnly => EMPTY_ACTIVE,
        CompletionFilter::CompletedOnly => EMPTY_COMPLETED,
    };

    ListView::new(
        matched.into_iter().map(|goal| card(goal, today)).collect(),
        empty_message,
    )
}

/// Dashboard strip: the three most recently created goals.
pub fn recent_goals(goals: &[Goal], today: NaiveDate) -> ListView<GoalCard> {
    let mut sorted: Vec<&Goal> = goals.iter().collect();
    sort_newest_first(&mut sorted);
    sorted.truncate(RECENT_GOAL_LIMIT);

    ListView::new(
        sorted.into_iter().map(|goal| card(goal, today)).collect(),
        EMPTY_RECENT,
    )
}

fn sort_newest_first(goals: &mut [&Goal]) {
    // Tie-break on id to keep the projection deterministic when two goals
    // share a creation timestamp.
    goals.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

fn card(goal: &Goal, today: NaiveDate) -> GoalCard {
    let description = if goal.description.trim().is_empty() {
        "No description provided.".to_string()
    } else {
        goal.description.clone()
    };

    GoalCard {
        id: goal.id,
        title: goal.title.clone(),
        description,
        category_label: goal.category.label().to_string(),
        category_color: category_color(&goal.category),
        progress: goal.progress,
        completed: goal.completed,
        status_caption: if goal.completed {
            "Completed"
        } else {
            "In Progress"
        },
        deadline: goal.deadline.map(|deadline| badge(deadline, today)),
        created_at: goal.created_at,
    }
}

fn badge(deadline: NaiveDate, today: NaiveDate) -> DeadlineBadge {
    let days_left = (deadline - today).num_days();
    let urgency = if days_left < 0 {
        DeadlineUrgency::Overdue
    } else if days_left < 30 {
        DeadlineUrgency::Approaching
    } else {
        DeadlineUrgency::Comfortable
    };
    let label = if days_left >= 0 {
        format!("{days_left} days left")
    } else {
        "Overdue".to_string()
    };

    DeadlineBadge {
        days_left,
        urgency,
        label,
    }
}

fn category_color(category: &GoalCategory) -> &'static str {
    match category {
        GoalCategory::Health => "#10b981",
        GoalCategory::Career => "#8b5cf6",
        GoalCategory::Education => "#3b82f6",
        GoalCategory::Finance => "#f59e0b",
        GoalCategory::Personal => "#ef4444",
        GoalCategory::Hobbies => "#ec4899",
        GoalCategory::Unrecognized(_) => "#8b5cf6",
    }
}

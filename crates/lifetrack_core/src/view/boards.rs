//! Simple board projections: notes, rules, projects and the quote library.

use super::{format_epoch_ms_date, format_short_date, ListView};
use crate::model::capitalize;
use crate::model::note::{Note, NoteKind};
use crate::model::project::Project;
use crate::model::quote::Quote;
use crate::model::rule::Rule;
use crate::model::EntityId;
use chrono::NaiveDate;

const EMPTY_NOTES: &str = "No notes yet. Add your first note!";
const EMPTY_RULES: &str = "No rules yet. Add your first rule!";
const EMPTY_PROJECTS: &str = "No projects yet. Add your first project!";
const EMPTY_QUOTES: &str = "No quotes yet. Add your first quote!";

/// Display-ready note card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub icon: &'static str,
    pub color: &'static str,
    pub date_label: String,
}

/// Display-ready rule row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCard {
    pub id: EntityId,
    pub icon: String,
    pub title: String,
    pub content: String,
}

/// Display-ready project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: EntityId,
    /// Title-cased status, e.g. "In Progress".
    pub status_label: String,
    /// Raw status key used as a styling hook, e.g. "in-progress".
    pub status_key: String,
    pub title: String,
    pub description: String,
    pub progress: u8,
    /// "Due: {date}" or "No deadline".
    pub deadline_label: String,
}

/// Display-ready quote card for the library view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteCard {
    pub id: EntityId,
    pub content: String,
    pub author: String,
}

/// Notes view, newest first.
pub fn note_list(notes: &[Note], today: NaiveDate) -> ListView<NoteCard> {
    let mut sorted: Vec<&Note> = notes.iter().collect();
    sorted.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });

    let cards = sorted
        .into_iter()
        .map(|note| {
            let (icon, color) = kind_style(&note.kind);
            NoteCard {
                id: note.id,
                title: note.title.clone(),
                content: note.content.clone(),
                icon,
                color,
                date_label: format_epoch_ms_date(note.created_at, today),
            }
        })
        .collect();

    ListView::new(cards, EMPTY_NOTES)
}

/// Rules view, insertion order.
pub fn rule_list(rules: &[Rule]) -> ListView<RuleCard> {
    let cards = rules
        .iter()
        .map(|rule| RuleCard {
            id: rule.id,
            icon: rule.icon.clone(),
            title: rule.title.clone(),
            content: rule.content.clone(),
        })
        .collect();

    ListView::new(cards, EMPTY_RULES)
}

/// Projects view, insertion order.
pub fn project_list(projects: &[Project], today: NaiveDate) -> ListView<ProjectCard> {
    let cards = projects
        .iter()
        .map(|project| ProjectCard {
            id: project.id,
            status_label: title_case_status(project.status.as_key()),
            status_key: project.status.as_key().to_string(),
            title: project.title.clone(),
            description: project.description.clone(),
            progress: project.progress,
            deadline_label: match project.deadline {
                Some(deadline) => format!("Due: {}", format_short_date(deadline, today)),
                None => "No deadline".to_string(),
            },
        })
        .collect();

    ListView::new(cards, EMPTY_PROJECTS)
}

/// Quote library view, insertion order.
pub fn quote_list(quotes: &[Quote]) -> ListView<QuoteCard> {
    let cards = quotes
        .iter()
        .map(|quote| QuoteCard {
            id: quote.id,
            content: quote.content.clone(),
            author: quote.author.clone(),
        })
        .collect();

    ListView::new(cards, EMPTY_QUOTES)
}

fn kind_style(kind: &NoteKind) -> (&'static str, &'static str) {
    match kind {
        NoteKind::Idea => ("lightbulb", "#8b5cf6"),
        NoteKind::Note => ("sticky-note", "#3b82f6"),
        NoteKind::Inspiration => ("fire", "#10b981"),
        NoteKind::Reminder => ("bell", "#f59e0b"),
        NoteKind::Unrecognized(_) => ("sticky-note", "#8b5cf6"),
    }
}

/// "in-progress" -> "In Progress".
fn title_case_status(key: &str) -> String {
    key.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

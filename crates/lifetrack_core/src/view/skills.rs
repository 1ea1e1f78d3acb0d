//! Skill list projections: the skills page and the dashboard's completed
//! skills section.

use super::{format_short_date, ListView};
use crate::model::capitalize;
use crate::model::skill::{Proficiency, Skill, SkillCategory};
use crate::model::EntityId;
use chrono::NaiveDate;

const EMPTY_SKILLS: &str = "No skills yet";
const EMPTY_COMPLETED: &str = "No completed skills yet. Keep learning!";

/// Display-ready skill card for the skills page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCard {
    pub id: EntityId,
    pub name: String,
    pub proficiency_label: String,
    pub proficiency_color: &'static str,
    /// Short category chip (Tech/Lang/Skills/Creative/Other, raw key for
    /// unrecognized categories).
    pub category_short: String,
    pub learned_label: String,
    pub notes: Option<String>,
    pub progress: u8,
    pub progress_caption: &'static str,
}

/// Compact entry for the dashboard's completed skills section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedSkillCard {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub category_label: String,
    pub proficiency_label: String,
    pub learned_label: String,
}

/// Skills page view, insertion order.
pub fn skill_list(skills: &[Skill], today: NaiveDate) -> ListView<SkillCard> {
    let cards = skills
        .iter()
        .map(|skill| SkillCard {
            id: skill.id,
            name: skill.name.clone(),
            proficiency_label: skill.proficiency.label(),
            proficiency_color: proficiency_color(&skill.proficiency),
            category_short: category_short(&skill.category),
            learned_label: format_short_date(skill.learned_date, today),
            notes: skill.notes.clone(),
            progress: skill.progress,
            progress_caption: if skill.progress == 100 {
                "Completed"
            } else {
                "In Progress"
            },
        })
        .collect();

    ListView::new(cards, EMPTY_SKILLS)
}

/// Dashboard section: fully learned skills, most recent learned date first.
pub fn completed_skills(skills: &[Skill], today: NaiveDate) -> ListView<CompletedSkillCard> {
    let mut completed: Vec<&Skill> = skills.iter().filter(|skill| skill.progress == 100).collect();
    completed.sort_by(|a, b| {
        b.learned_date
            .cmp(&a.learned_date)
            .then_with(|| b.id.cmp(&a.id))
    });

    let cards = completed
        .into_iter()
        .map(|skill| CompletedSkillCard {
            id: skill.id,
            name: skill.name.clone(),
            description: skill.description.clone(),
            category_label: capitalize(skill.category.as_key()),
            proficiency_label: skill.proficiency.label(),
            learned_label: format_short_date(skill.learned_date, today),
        })
        .collect();

    ListView::new(cards, EMPTY_COMPLETED)
}

fn proficiency_color(proficiency: &Proficiency) -> &'static str {
    match proficiency {
        Proficiency::Beginner => "#f59e0b",
        Proficiency::Intermediate => "#3b82f6",
        Proficiency::Advanced => "#10b981",
        Proficiency::Expert => "#8b5cf6",
        Proficiency::Unrecognized(_) => "#6b7280",
    }
}

fn category_short(category: &SkillCategory) -> String {
    match category {
        SkillCategory::Tech => "Tech".to_string(),
        SkillCategory::Language => "Lang".to_string(),
        SkillCategory::SoftSkills => "Skills".to_string(),
        SkillCategory::Creative => "Creative".to_string(),
        SkillCategory::Other => "Other".to_string(),
        SkillCategory::Unrecognized(raw) => raw.clone(),
    }
}

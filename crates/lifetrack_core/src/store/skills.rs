//! Skill CRUD operations.
//!
//! # Invariants
//! - `description` is regenerated through `skill::describe` whenever name
//!   or proficiency change, and only then.
//! - Progress starts at 0 on create and is range-checked on update.

use super::{parse_progress_field, parse_required_date, require, StoreResult, TrackerStore};
use crate::kv::KvBackend;
use crate::model::skill::{describe, Proficiency, Skill, SkillCategory};
use crate::model::{allocate_id, EntityId, EntityKind};
use crate::store::StoreError;
use log::info;

/// Raw skill form fields as supplied by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct SkillDraft {
    pub name: String,
    pub category: String,
    pub proficiency: String,
    /// `YYYY-MM-DD`; required.
    pub learned_date: String,
    /// Free-form notes; empty means none.
    pub notes: String,
}

impl<B: KvBackend> TrackerStore<B> {
    /// Creates a skill from raw form fields; progress starts at 0.
    pub fn create_skill(&mut self, draft: SkillDraft) -> StoreResult<Skill> {
        let name = require(&draft.name, "skill name is required")?;
        let learned_date = parse_required_date(&draft.learned_date, "skill learned date")?;
        let proficiency = Proficiency::from(draft.proficiency);

        let skill = Skill {
            id: allocate_id(self.skills.iter().map(|skill| skill.id)),
            description: describe(&name, &proficiency),
            name,
            category: SkillCategory::from(draft.category),
            proficiency,
            learned_date,
            progress: 0,
            notes: none_when_empty(draft.notes),
        };

        self.skills.push(skill);
        if let Err(err) = self.persist_skills() {
            self.skills.pop();
            return Err(err);
        }

        let created = self.skills[self.skills.len() - 1].clone();
        info!("event=skill_create module=store status=ok id={}", created.id);
        self.notify(&format!("Skill \"{}\" added successfully!", created.name));
        Ok(created)
    }

    /// Replaces a skill's editable fields and regenerates its description.
    ///
    /// Progress is not part of the edit form and is kept unchanged.
    pub fn update_skill(&mut self, id: EntityId, draft: SkillDraft) -> StoreResult<Skill> {
        let name = require(&draft.name, "skill name is required")?;
        let learned_date = parse_required_date(&draft.learned_date, "skill learned date")?;
        let proficiency = Proficiency::from(draft.proficiency);
        let index = self.skill_index(id)?;

        let previous = self.skills[index].clone();
        let skill = &mut self.skills[index];
        skill.description = describe(&name, &proficiency);
        skill.name = name;
        skill.category = SkillCategory::from(draft.category);
        skill.proficiency = proficiency;
        skill.learned_date = learned_date;
        skill.notes = none_when_empty(draft.notes);

        if let Err(err) = self.persist_skills() {
            self.skills[index] = previous;
            return Err(err);
        }

        let updated = self.skills[index].clone();
        info!("event=skill_update module=store status=ok id={id}");
        self.notify(&format!("Skill \"{}\" updated successfully!", updated.name));
        Ok(updated)
    }

    /// Sets a skill's progress from a raw string.
    ///
    /// The description is untouched: it depends only on name and
    /// proficiency.
    pub fn update_skill_progress(&mut self, id: EntityId, raw_progress: &str) -> StoreResult<Skill> {
        let progress = parse_progress_field(raw_progress)?;
        let index = self.skill_index(id)?;

        let previous = self.skills[index].clone();
        self.skills[index].progress = progress;

        if let Err(err) = self.persist_skills() {
            self.skills[index] = previous;
            return Err(err);
        }

        let updated = self.skills[index].clone();
        info!("event=skill_progress module=store status=ok id={id} progress={progress}");
        self.notify(&format!("Progress updated for \"{}\"!", updated.name));
        Ok(updated)
    }

    /// Removes a skill and returns it.
    pub fn delete_skill(&mut self, id: EntityId) -> StoreResult<Skill> {
        let index = self.skill_index(id)?;

        let removed = self.skills.remove(index);
        if let Err(err) = self.persist_skills() {
            self.skills.insert(index, removed);
            return Err(err);
        }

        info!("event=skill_delete module=store status=ok id={id}");
        self.notify("Skill has been deleted.");
        Ok(removed)
    }

    fn skill_index(&self, id: EntityId) -> StoreResult<usize> {
        self.skills
            .iter()
            .position(|skill| skill.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Skill,
                id,
            })
    }

    fn persist_skills(&mut self) -> StoreResult<()> {
        super::persist_collection(&mut self.backend, EntityKind::Skill, &self.skills)
    }
}

fn none_when_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

//! Project CRUD operations.
//!
//! # Invariants
//! - `status` is rederived from progress on create and on every progress
//!   update; callers never set it directly.

use super::{parse_optional_date, parse_progress_field, require, StoreResult, TrackerStore};
use crate::kv::KvBackend;
use crate::model::project::{status_for, Project};
use crate::model::{allocate_id, EntityId, EntityKind};
use crate::store::StoreError;
use log::info;

/// Raw project form fields as supplied by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    /// Progress percent as a raw string, e.g. `"25"`.
    pub progress: String,
    /// `YYYY-MM-DD` or empty for no deadline.
    pub deadline: String,
}

impl<B: KvBackend> TrackerStore<B> {
    /// Creates a project from raw form fields; status derives from progress.
    pub fn create_project(&mut self, draft: ProjectDraft) -> StoreResult<Project> {
        let title = require(&draft.title, "project title is required")?;
        let progress = parse_progress_field(&draft.progress)?;
        let deadline = parse_optional_date(&draft.deadline, "project deadline")?;

        let project = Project {
            id: allocate_id(self.projects.iter().map(|project| project.id)),
            title,
            description: draft.description,
            status: status_for(progress),
            progress,
            deadline,
        };

        self.projects.push(project);
        if let Err(err) = self.persist_projects() {
            self.projects.pop();
            return Err(err);
        }

        let created = self.projects[self.projects.len() - 1].clone();
        info!(
            "event=project_create module=store status=ok id={} status_key={}",
            created.id,
            created.status.as_key()
        );
        self.notify("Project added successfully!");
        Ok(created)
    }

    /// Sets a project's progress from a raw string and rederives status.
    pub fn update_project_progress(
        &mut self,
        id: EntityId,
        raw_progress: &str,
    ) -> StoreResult<Project> {
        let progress = parse_progress_field(raw_progress)?;
        let index = self.project_index(id)?;

        let previous = self.projects[index].clone();
        self.projects[index].progress = progress;
        self.projects[index].status = status_for(progress);

        if let Err(err) = self.persist_projects() {
            self.projects[index] = previous;
            return Err(err);
        }

        let updated = self.projects[index].clone();
        info!(
            "event=project_progress module=store status=ok id={id} progress={progress} status_key={}",
            updated.status.as_key()
        );
        self.notify("Project updated!");
        Ok(updated)
    }

    /// Removes a project and returns it.
    pub fn delete_project(&mut self, id: EntityId) -> StoreResult<Project> {
        let index = self.project_index(id)?;

        let removed = self.projects.remove(index);
        if let Err(err) = self.persist_projects() {
            self.projects.insert(index, removed);
            return Err(err);
        }

        info!("event=project_delete module=store status=ok id={id}");
        self.notify("Project has been deleted.");
        Ok(removed)
    }

    fn project_index(&self, id: EntityId) -> StoreResult<usize> {
        self.projects
            .iter()
            .position(|project| project.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Project,
                id,
            })
    }

    fn persist_projects(&mut self) -> StoreResult<()> {
        super::persist_collection(&mut self.backend, EntityKind::Project, &self.projects)
    }
}

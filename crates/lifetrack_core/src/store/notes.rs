//! Note CRUD operations.

use super::{require, StoreResult, TrackerStore};
use crate::kv::KvBackend;
use crate::model::note::{Note, NoteKind};
use crate::model::{allocate_id, now_epoch_ms, EntityId, EntityKind};
use crate::store::StoreError;
use log::info;

/// Raw note form fields as supplied by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    /// Note kind key, e.g. `"idea"`; unknown kinds are stored as-is.
    pub kind: String,
}

impl<B: KvBackend> TrackerStore<B> {
    /// Creates a note from raw form fields.
    pub fn create_note(&mut self, draft: NoteDraft) -> StoreResult<Note> {
        let title = require(&draft.title, "note title is required")?;

        let note = Note {
            id: allocate_id(self.notes.iter().map(|note| note.id)),
            title,
            content: draft.content,
            kind: NoteKind::from(draft.kind),
            created_at: now_epoch_ms(),
        };

        self.notes.push(note);
        if let Err(err) = self.persist_notes() {
            self.notes.pop();
            return Err(err);
        }

        let created = self.notes[self.notes.len() - 1].clone();
        info!("event=note_create module=store status=ok id={}", created.id);
        self.notify("Note saved successfully!");
        Ok(created)
    }

    /// Removes a note and returns it.
    pub fn delete_note(&mut self, id: EntityId) -> StoreResult<Note> {
        let index = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Note,
                id,
            })?;

        let removed = self.notes.remove(index);
        if let Err(err) = self.persist_notes() {
            self.notes.insert(index, removed);
            return Err(err);
        }

        info!("event=note_delete module=store status=ok id={id}");
        self.notify("Note has been deleted.");
        Ok(removed)
    }

    fn persist_notes(&mut self) -> StoreResult<()> {
        super::persist_collection(&mut self.backend, EntityKind::Note, &self.notes)
    }
}

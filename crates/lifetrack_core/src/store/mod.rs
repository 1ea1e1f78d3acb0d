//! Entity store: the six in-memory collections and their CRUD contract.
//!
//! # Responsibility
//! - Own the goal/note/rule/project/quote/skill collections as the single
//!   source of truth for the rest of the core.
//! - Persist the full owning collection through the KV backend on every
//!   mutation, before the mutation is reported as successful.
//!
//! # Invariants
//! - A mutation that fails to persist is rolled back in memory; persisted
//!   and in-memory state never diverge.
//! - Derived fields (goal completion, project status, skill description)
//!   are recomputed through the model derivation functions on every write
//!   path, never set ad hoc.
//! - Notification sink failures cannot fail a mutation.

use crate::kv::{collection_key, KvBackend, KvError};
use crate::model::{EntityId, EntityKind};
use crate::stats::DashboardStats;
use chrono::NaiveDate;
use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod goals;
mod notes;
mod projects;
mod quotes;
mod rules;
mod skills;

pub use goals::GoalDraft;
pub use notes::NoteDraft;
pub use projects::ProjectDraft;
pub use quotes::QuoteDraft;
pub use rules::RuleDraft;
pub use skills::SkillDraft;

use crate::model::goal::Goal;
use crate::model::note::Note;
use crate::model::project::Project;
use crate::model::quote::Quote;
use crate::model::rule::Rule;
use crate::model::skill::Skill;

pub type StoreResult<T> = Result<T, StoreError>;

/// Entity store error surfaced to presentation callers.
#[derive(Debug)]
pub enum StoreError {
    /// A required field is missing or malformed; nothing was mutated.
    Validation(String),
    /// Update/delete referenced an id the collection does not contain.
    NotFound { kind: EntityKind, id: EntityId },
    /// Progress input was non-numeric or outside `[0, 100]`; the original
    /// value is retained.
    ProgressOutOfRange(String),
    /// Serialization or backend write failed; in-memory state was rolled
    /// back before this error was returned.
    Persistence(PersistenceError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(message) => write!(f, "{message}"),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::ProgressOutOfRange(raw) => {
                write!(f, "progress must be a number between 0 and 100, got `{raw}`")
            }
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persistence(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PersistenceError> for StoreError {
    fn from(value: PersistenceError) -> Self {
        Self::Persistence(value)
    }
}

/// Failure while moving a collection between memory and storage.
#[derive(Debug)]
pub enum PersistenceError {
    /// Collection could not be serialized.
    Encode(serde_json::Error),
    /// Persisted text under a key could not be decoded.
    Decode { key: String, source: serde_json::Error },
    /// The storage backend rejected the operation.
    Backend(KvError),
}

impl Display for PersistenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to serialize collection: {err}"),
            Self::Decode { key, source } => {
                write!(f, "invalid persisted data under `{key}`: {source}")
            }
            Self::Backend(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Decode { source, .. } => Some(source),
            Self::Backend(err) => Some(err),
        }
    }
}

impl From<KvError> for PersistenceError {
    fn from(value: KvError) -> Self {
        Self::Backend(value)
    }
}

/// Fire-and-forget notification surface called after successful mutations.
///
/// Implementations must be infallible from the store's point of view; a
/// sink that fails internally has to swallow the failure.
pub trait NotificationSink {
    fn notify(&self, message: &str);
}

/// Default sink: forwards notifications to the structured log.
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, message: &str) {
        info!("event=notify module=store status=ok message={message}");
    }
}

/// The entity store. Generic over the persistence backend so tests can
/// inject failing or in-memory doubles.
pub struct TrackerStore<B: KvBackend> {
    backend: B,
    sink: Box<dyn NotificationSink>,
    goals: Vec<Goal>,
    notes: Vec<Note>,
    rules: Vec<Rule>,
    projects: Vec<Project>,
    quotes: Vec<Quote>,
    skills: Vec<Skill>,
}

impl<B: KvBackend> std::fmt::Debug for TrackerStore<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackerStore")
            .field("goals", &self.goals.len())
            .field("notes", &self.notes.len())
            .field("rules", &self.rules.len())
            .field("projects", &self.projects.len())
            .field("quotes", &self.quotes.len())
            .field("skills", &self.skills.len())
            .finish()
    }
}

impl<B: KvBackend> TrackerStore<B> {
    /// Opens the store, loading all six collections from the backend.
    ///
    /// Absent keys initialize an empty collection and are persisted
    /// immediately so the key exists from then on.
    pub fn open(backend: B) -> StoreResult<Self> {
        Self::open_with_sink(backend, Box::new(LogSink))
    }

    /// Opens the store with a caller-provided notification sink.
    pub fn open_with_sink(
        mut backend: B,
        sink: Box<dyn NotificationSink>,
    ) -> StoreResult<Self> {
        let goals = load_collection(&mut backend, EntityKind::Goal)?;
        let notes = load_collection(&mut backend, EntityKind::Note)?;
        let rules = load_collection(&mut backend, EntityKind::Rule)?;
        let projects = load_collection(&mut backend, EntityKind::Project)?;
        let quotes = load_collection(&mut backend, EntityKind::Quote)?;
        let skills = load_collection(&mut backend, EntityKind::Skill)?;

        info!(
            "event=store_open module=store status=ok goals={} notes={} rules={} projects={} quotes={} skills={}",
            goals.len(),
            notes.len(),
            rules.len(),
            projects.len(),
            quotes.len(),
            skills.len()
        );

        Ok(Self {
            backend,
            sink,
            goals,
            notes,
            rules,
            projects,
            quotes,
            skills,
        })
    }

    /// Goals in insertion order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Rules in insertion order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Projects in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Quotes in insertion order.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Skills in insertion order.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Aggregate dashboard statistics over the current snapshot.
    pub fn dashboard(&self) -> DashboardStats {
        DashboardStats::compute(&self.goals, &self.projects, &self.skills, &self.notes)
    }

    fn notify(&self, message: &str) {
        self.sink.notify(message);
    }
}

fn load_collection<B, T>(backend: &mut B, kind: EntityKind) -> StoreResult<Vec<T>>
where
    B: KvBackend,
    T: DeserializeOwned + Serialize,
{
    let key = collection_key(kind);
    match backend.load(&key).map_err(PersistenceError::from)? {
        Some(text) => {
            let items = serde_json::from_str(&text)
                .map_err(|source| PersistenceError::Decode { key, source })?;
            Ok(items)
        }
        None => {
            let empty: Vec<T> = Vec::new();
            persist_collection(backend, kind, &empty)?;
            Ok(empty)
        }
    }
}

fn persist_collection<B, T>(backend: &mut B, kind: EntityKind, items: &[T]) -> StoreResult<()>
where
    B: KvBackend,
    T: Serialize,
{
    let key = collection_key(kind);
    let text = serde_json::to_string(items)
        .map_err(|err| StoreError::Persistence(PersistenceError::Encode(err)))?;

    if let Err(err) = backend.store(&key, &text) {
        error!("event=collection_persist module=store status=error key={key} error={err}");
        return Err(StoreError::Persistence(err.into()));
    }

    Ok(())
}

/// Rejects empty (or whitespace-only) required form fields.
fn require(value: &str, message: &str) -> StoreResult<String> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation(message.to_string()));
    }
    Ok(value.to_string())
}

/// Parses a raw progress field, rejecting anything outside `[0, 100]`.
fn parse_progress_field(raw: &str) -> StoreResult<u8> {
    crate::model::parse_progress(raw).ok_or_else(|| StoreError::ProgressOutOfRange(raw.to_string()))
}

/// Parses an optional `YYYY-MM-DD` deadline field. Empty means no deadline.
fn parse_optional_date(raw: &str, field: &str) -> StoreResult<Option<NaiveDate>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    crate::model::parse_entry_date(raw)
        .map(Some)
        .ok_or_else(|| StoreError::Validation(format!("{field} must be a YYYY-MM-DD date")))
}

/// Parses a required `YYYY-MM-DD` date field.
fn parse_required_date(raw: &str, field: &str) -> StoreResult<NaiveDate> {
    if raw.trim().is_empty() {
        return Err(StoreError::Validation(format!("{field} is required")));
    }
    crate::model::parse_entry_date(raw)
        .ok_or_else(|| StoreError::Validation(format!("{field} must be a YYYY-MM-DD date")))
}

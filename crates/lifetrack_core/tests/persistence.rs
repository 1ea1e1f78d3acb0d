use lifetrack_core::db::migrations::latest_version;
use lifetrack_core::db::{open_db, open_db_in_memory};
use lifetrack_core::kv::{KvBackend, KvError, KvResult};
use lifetrack_core::{
    collection_key, EntityKind, GoalDraft, NoteDraft, NotificationSink, SqliteKvBackend,
    StoreError, TrackerStore,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory backend whose writes can be made to fail, simulating a
/// storage quota rejection.
struct FlakyBackend {
    map: HashMap<String, String>,
    fail_writes: Rc<Cell<bool>>,
}

impl FlakyBackend {
    fn new() -> (Self, Rc<Cell<bool>>) {
        let flag = Rc::new(Cell::new(false));
        (
            Self {
                map: HashMap::new(),
                fail_writes: Rc::clone(&flag),
            },
            flag,
        )
    }
}

impl KvBackend for FlakyBackend {
    fn load(&self, key: &str) -> KvResult<Option<String>> {
        Ok(self.map.get(key).cloned())
    }

    fn store(&mut self, key: &str, value: &str) -> KvResult<()> {
        if self.fail_writes.get() {
            return Err(KvError::Rejected("quota exceeded".to_string()));
        }
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

struct RecordingSink {
    messages: Rc<RefCell<Vec<String>>>,
}

impl NotificationSink for RecordingSink {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn goal(title: &str, progress: &str) -> GoalDraft {
    GoalDraft {
        title: title.to_string(),
        description: "steady pace".to_string(),
        category: "health".to_string(),
        progress: progress.to_string(),
        deadline: "2026-10-01".to_string(),
    }
}

#[test]
fn migrations_reach_latest_version_on_open() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn opening_the_store_establishes_all_six_keys() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("lifetrack.sqlite3");

    let store = TrackerStore::open(SqliteKvBackend::new(open_db(&db_path).unwrap())).unwrap();
    drop(store);

    let backend = SqliteKvBackend::new(open_db(&db_path).unwrap());
    for kind in [
        EntityKind::Goal,
        EntityKind::Note,
        EntityKind::Rule,
        EntityKind::Project,
        EntityKind::Quote,
        EntityKind::Skill,
    ] {
        assert_eq!(
            backend.load(&collection_key(kind)).unwrap().as_deref(),
            Some("[]")
        );
    }
}

#[test]
fn collections_round_trip_across_reopen_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("lifetrack.sqlite3");

    let (first_goal, second_goal, note) = {
        let mut store =
            TrackerStore::open(SqliteKvBackend::new(open_db(&db_path).unwrap())).unwrap();
        let first = store.create_goal(goal("Run 5k", "40")).unwrap();
        let second = store.create_goal(goal("Row 2k", "70")).unwrap();
        let note = store
            .create_note(NoteDraft {
                title: "Remember".to_string(),
                content: "hydrate".to_string(),
                kind: "reminder".to_string(),
            })
            .unwrap();
        (first, second, note)
    };

    let store = TrackerStore::open(SqliteKvBackend::new(open_db(&db_path).unwrap())).unwrap();
    assert_eq!(store.goals(), &[first_goal, second_goal][..]);
    assert_eq!(store.notes(), &[note][..]);
    assert!(store.rules().is_empty());
}

#[test]
fn failed_persistence_rolls_back_create() {
    let (backend, fail_writes) = FlakyBackend::new();
    let mut store = TrackerStore::open(backend).unwrap();

    fail_writes.set(true);
    let err = store.create_goal(goal("Run 5k", "40")).unwrap_err();
    assert!(matches!(err, StoreError::Persistence(_)));
    assert!(store.goals().is_empty());
}

#[test]
fn failed_persistence_rolls_back_update_and_delete() {
    let (backend, fail_writes) = FlakyBackend::new();
    let mut store = TrackerStore::open(backend).unwrap();
    let created = store.create_goal(goal("Run 5k", "40")).unwrap();

    fail_writes.set(true);

    let err = store.update_goal_progress(created.id, "90").unwrap_err();
    assert!(matches!(err, StoreError::Persistence(_)));
    assert_eq!(store.goals()[0].progress, 40);

    let err = store.delete_goal(created.id).unwrap_err();
    assert!(matches!(err, StoreError::Persistence(_)));
    assert_eq!(store.goals().len(), 1);
    assert_eq!(store.goals()[0].id, created.id);

    fail_writes.set(false);
    store.delete_goal(created.id).unwrap();
    assert!(store.goals().is_empty());
}

#[test]
fn notifications_fire_only_after_successful_mutations() {
    let messages = Rc::new(RefCell::new(Vec::new()));
    let (backend, fail_writes) = FlakyBackend::new();
    let mut store = TrackerStore::open_with_sink(
        backend,
        Box::new(RecordingSink {
            messages: Rc::clone(&messages),
        }),
    )
    .unwrap();

    let created = store.create_goal(goal("Run 5k", "40")).unwrap();
    assert_eq!(messages.borrow().as_slice(), ["Goal added successfully!"]);

    fail_writes.set(true);
    let _ = store.update_goal_progress(created.id, "90").unwrap_err();
    assert_eq!(messages.borrow().len(), 1);
}

#[test]
fn corrupt_persisted_collection_surfaces_as_persistence_error() {
    let (mut backend, _) = FlakyBackend::new();
    backend
        .store(&collection_key(EntityKind::Goal), "not json")
        .unwrap();

    let err = TrackerStore::open(backend).unwrap_err();
    assert!(matches!(err, StoreError::Persistence(_)));
}

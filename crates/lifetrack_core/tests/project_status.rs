use lifetrack_core::db::open_db_in_memory;
use lifetrack_core::{ProjectDraft, ProjectStatus, SqliteKvBackend, StoreError, TrackerStore};

fn open_store() -> TrackerStore<SqliteKvBackend> {
    TrackerStore::open(SqliteKvBackend::new(open_db_in_memory().unwrap())).unwrap()
}

fn draft(title: &str, progress: &str) -> ProjectDraft {
    ProjectDraft {
        title: title.to_string(),
        description: String::new(),
        progress: progress.to_string(),
        deadline: String::new(),
    }
}

#[test]
fn status_derives_from_progress_on_create() {
    let mut store = open_store();

    let planning = store.create_project(draft("Website", "0")).unwrap();
    assert_eq!(planning.status, ProjectStatus::Planning);

    let in_progress = store.create_project(draft("App", "45")).unwrap();
    assert_eq!(in_progress.status, ProjectStatus::InProgress);

    let completed = store.create_project(draft("Garden", "100")).unwrap();
    assert_eq!(completed.status, ProjectStatus::Completed);
}

#[test]
fn status_rederives_on_every_progress_update() {
    let mut store = open_store();
    let project = store.create_project(draft("Website", "0")).unwrap();

    let started = store.update_project_progress(project.id, "1").unwrap();
    assert_eq!(started.status, ProjectStatus::InProgress);

    let finished = store.update_project_progress(project.id, "100").unwrap();
    assert_eq!(finished.status, ProjectStatus::Completed);

    let reset = store.update_project_progress(project.id, "0").unwrap();
    assert_eq!(reset.status, ProjectStatus::Planning);
}

#[test]
fn missing_title_and_unknown_id_are_rejected() {
    let mut store = open_store();

    assert!(matches!(
        store.create_project(draft("", "0")).unwrap_err(),
        StoreError::Validation(_)
    ));
    assert!(matches!(
        store.update_project_progress(7, "10").unwrap_err(),
        StoreError::NotFound { .. }
    ));
    assert!(matches!(
        store.delete_project(7).unwrap_err(),
        StoreError::NotFound { .. }
    ));
    assert!(store.projects().is_empty());
}

#[test]
fn delete_returns_removed_project() {
    let mut store = open_store();
    let project = store.create_project(draft("Website", "30")).unwrap();

    let removed = store.delete_project(project.id).unwrap();
    assert_eq!(removed.id, project.id);
    assert!(store.projects().is_empty());
}

use chrono::NaiveDate;
use lifetrack_core::db::open_db_in_memory;
use lifetrack_core::view::boards::{note_list, project_list, quote_list, rule_list};
use lifetrack_core::view::goals::{goal_list, recent_goals, CompletionFilter, GoalListQuery};
use lifetrack_core::view::skills::{completed_skills, skill_list};
use lifetrack_core::{
    GoalDraft, NoteDraft, ProjectDraft, QuoteDraft, RuleDraft, SkillDraft, SqliteKvBackend,
    TrackerStore,
};

fn open_store() -> TrackerStore<SqliteKvBackend> {
    TrackerStore::open(SqliteKvBackend::new(open_db_in_memory().unwrap())).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
}

fn goal(title: &str, category: &str, progress: &str) -> GoalDraft {
    GoalDraft {
        title: title.to_string(),
        description: String::new(),
        category: category.to_string(),
        progress: progress.to_string(),
        deadline: String::new(),
    }
}

#[test]
fn goal_views_filter_without_mutating_the_source() {
    let mut store = open_store();
    store.create_goal(goal("Run 5k", "health", "100")).unwrap();
    store.create_goal(goal("Read", "education", "20")).unwrap();
    store.create_goal(goal("Lift", "health", "50")).unwrap();

    let all = goal_list(store.goals(), &GoalListQuery::default(), today());
    assert_eq!(all.items().len(), 3);

    let active = goal_list(
        store.goals(),
        &GoalListQuery {
            category: None,
            completion: CompletionFilter::ActiveOnly,
        },
        today(),
    );
    assert_eq!(active.items().len(), 2);
    assert!(active.items().iter().all(|card| !card.completed));

    let completed_health = goal_list(
        store.goals(),
        &GoalListQuery {
            category: Some("health".to_string()),
            completion: CompletionFilter::CompletedOnly,
        },
        today(),
    );
    assert_eq!(completed_health.items().len(), 1);
    assert_eq!(completed_health.items()[0].title, "Run 5k");

    // Source collection is untouched by projection.
    assert_eq!(store.goals().len(), 3);
}

#[test]
fn goal_views_sort_newest_first_and_are_idempotent() {
    let mut store = open_store();
    store.create_goal(goal("first", "health", "0")).unwrap();
    store.create_goal(goal("second", "health", "0")).unwrap();
    store.create_goal(goal("third", "health", "0")).unwrap();

    let first_pass = goal_list(store.goals(), &GoalListQuery::default(), today());
    let second_pass = goal_list(store.goals(), &GoalListQuery::default(), today());
    assert_eq!(first_pass.items(), second_pass.items());

    let titles: Vec<_> = first_pass
        .items()
        .iter()
        .map(|card| card.title.as_str())
        .collect();
    assert_eq!(titles, ["third", "second", "first"]);
}

#[test]
fn each_goal_view_has_its_own_empty_state() {
    let store = open_store();

    let all = goal_list(store.goals(), &GoalListQuery::default(), today());
    assert_eq!(all.empty_message(), Some("No goals found. Add your first goal!"));

    let active = goal_list(
        store.goals(),
        &GoalListQuery {
            category: None,
            completion: CompletionFilter::ActiveOnly,
        },
        today(),
    );
    assert_eq!(
        active.empty_message(),
        Some("No active goals. Add a new goal to get started!")
    );

    let completed = goal_list(
        store.goals(),
        &GoalListQuery {
            category: None,
            completion: CompletionFilter::CompletedOnly,
        },
        today(),
    );
    assert_eq!(
        completed.empty_message(),
        Some("No completed goals yet. Keep working!")
    );
}

#[test]
fn recent_goals_keeps_the_three_newest() {
    let mut store = open_store();
    for title in ["a", "b", "c", "d"] {
        store.create_goal(goal(title, "health", "0")).unwrap();
    }

    let recent = recent_goals(store.goals(), today());
    let titles: Vec<_> = recent
        .items()
        .iter()
        .map(|card| card.title.as_str())
        .collect();
    assert_eq!(titles, ["d", "c", "b"]);
}

#[test]
fn deadline_badges_grade_urgency_against_today() {
    use lifetrack_core::view::goals::DeadlineUrgency;

    let mut store = open_store();
    for (title, deadline) in [
        ("overdue", "2026-05-01"),
        ("soon", "2026-06-15"),
        ("later", "2026-12-01"),
    ] {
        let mut draft = goal(title, "health", "0");
        draft.deadline = deadline.to_string();
        store.create_goal(draft).unwrap();
    }

    let view = goal_list(store.goals(), &GoalListQuery::default(), today());
    for card in view.items() {
        let badge = card.deadline.as_ref().unwrap();
        match card.title.as_str() {
            "overdue" => {
                assert_eq!(badge.urgency, DeadlineUrgency::Overdue);
                assert_eq!(badge.label, "Overdue");
            }
            "soon" => {
                assert_eq!(badge.urgency, DeadlineUrgency::Approaching);
                assert_eq!(badge.label, "14 days left");
            }
            "later" => assert_eq!(badge.urgency, DeadlineUrgency::Comfortable),
            other => panic!("unexpected card {other}"),
        }
    }
}

#[test]
fn note_view_sorts_newest_first_with_kind_styling() {
    let mut store = open_store();
    store
        .create_note(NoteDraft {
            title: "older".to_string(),
            content: String::new(),
            kind: "idea".to_string(),
        })
        .unwrap();
    store
        .create_note(NoteDraft {
            title: "newer".to_string(),
            content: String::new(),
            kind: "mystery".to_string(),
        })
        .unwrap();

    let view = note_list(store.notes(), today());
    assert_eq!(view.items()[0].title, "newer");
    // Unrecognized kinds fall back to the default icon.
    assert_eq!(view.items()[0].icon, "sticky-note");
    assert_eq!(view.items()[1].icon, "lightbulb");
}

#[test]
fn rule_quote_and_project_views_keep_insertion_order() {
    let mut store = open_store();
    store
        .create_rule(RuleDraft {
            title: "Wake early".to_string(),
            content: "Up at 6".to_string(),
            icon: Some("sun".to_string()),
        })
        .unwrap();
    store
        .create_quote(QuoteDraft {
            content: "Do the thing".to_string(),
            author: "Anon".to_string(),
        })
        .unwrap();
    store
        .create_project(ProjectDraft {
            title: "Website".to_string(),
            description: String::new(),
            progress: "45".to_string(),
            deadline: "2026-09-01".to_string(),
        })
        .unwrap();

    let rules = rule_list(store.rules());
    assert_eq!(rules.items()[0].icon, "sun");

    let quotes = quote_list(store.quotes());
    assert_eq!(quotes.items()[0].author, "Anon");

    let projects = project_list(store.projects(), today());
    assert_eq!(projects.items()[0].status_label, "In Progress");
    assert_eq!(projects.items()[0].status_key, "in-progress");
    assert_eq!(projects.items()[0].deadline_label, "Due: Sep 1");
}

#[test]
fn empty_boards_use_their_own_messages() {
    let store = open_store();

    assert_eq!(
        note_list(store.notes(), today()).empty_message(),
        Some("No notes yet. Add your first note!")
    );
    assert_eq!(
        rule_list(store.rules()).empty_message(),
        Some("No rules yet. Add your first rule!")
    );
    assert_eq!(
        project_list(store.projects(), today()).empty_message(),
        Some("No projects yet. Add your first project!")
    );
    assert_eq!(
        quote_list(store.quotes()).empty_message(),
        Some("No quotes yet. Add your first quote!")
    );
    assert_eq!(
        skill_list(store.skills(), today()).empty_message(),
        Some("No skills yet")
    );
    assert_eq!(
        completed_skills(store.skills(), today()).empty_message(),
        Some("No completed skills yet. Keep learning!")
    );
}

#[test]
fn completed_skills_sort_by_learned_date_descending() {
    let mut store = open_store();
    for (name, learned) in [("Rust", "2026-01-10"), ("Go", "2026-03-05"), ("C", "2025-11-20")] {
        let skill = store
            .create_skill(SkillDraft {
                name: name.to_string(),
                category: "tech".to_string(),
                proficiency: "beginner".to_string(),
                learned_date: learned.to_string(),
                notes: String::new(),
            })
            .unwrap();
        store.update_skill_progress(skill.id, "100").unwrap();
    }
    // One in-progress skill stays out of the completed section.
    store
        .create_skill(SkillDraft {
            name: "Piano".to_string(),
            category: "creative".to_string(),
            proficiency: "beginner".to_string(),
            learned_date: "2026-04-01".to_string(),
            notes: String::new(),
        })
        .unwrap();

    let section = completed_skills(store.skills(), today());
    let names: Vec<_> = section
        .items()
        .iter()
        .map(|card| card.name.as_str())
        .collect();
    assert_eq!(names, ["Go", "Rust", "C"]);
    assert_eq!(section.items()[2].learned_label, "Nov 20, 2025");
}

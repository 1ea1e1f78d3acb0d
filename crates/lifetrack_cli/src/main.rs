//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `lifetrack_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use lifetrack_core::db::open_db_in_memory;
use lifetrack_core::{SqliteKvBackend, TrackerStore};

fn main() {
    println!("lifetrack_core version={}", lifetrack_core::core_version());

    // Probe the whole open path against an ephemeral database: bootstrap,
    // migrations, key establishment and an empty dashboard.
    match open_db_in_memory()
        .map(SqliteKvBackend::new)
        .map_err(|err| err.to_string())
        .and_then(|backend| TrackerStore::open(backend).map_err(|err| err.to_string()))
    {
        Ok(store) => {
            let stats = store.dashboard();
            println!(
                "store ok goals={} notes={} projects={} skills={}",
                stats.goal_count, stats.note_count, stats.project_count, stats.skill_count
            );
        }
        Err(err) => {
            eprintln!("store probe failed: {err}");
            std::process::exit(1);
        }
    }
}

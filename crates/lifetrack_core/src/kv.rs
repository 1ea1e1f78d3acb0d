//! Key-value persistence adapter.
//!
//! # Responsibility
//! - Define the storage contract the entity store persists through.
//! - Provide the SQLite-backed implementation over the `kv_store` table.
//!
//! # Invariants
//! - Each collection lives under one fixed key with a stable
//!   application/version prefix.
//! - `store` replaces the whole value atomically; partial collection state
//!   is never observable.

use crate::db::DbError;
use crate::model::EntityKind;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key namespace; bump the version segment on format changes.
pub const KEY_PREFIX: &str = "lifetrack.v1.";

/// Returns the fixed storage key for one collection kind.
pub fn collection_key(kind: EntityKind) -> String {
    // Keys pluralize the kind name: lifetrack.v1.goals, lifetrack.v1.notes...
    format!("{KEY_PREFIX}{}s", kind.as_str())
}

pub type KvResult<T> = Result<T, KvError>;

/// Persistence adapter error.
#[derive(Debug)]
pub enum KvError {
    /// Transport/storage failure from the SQLite backend.
    Db(DbError),
    /// The backend refused the write (e.g. quota exceeded).
    Rejected(String),
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Rejected(reason) => write!(f, "storage backend rejected write: {reason}"),
        }
    }
}

impl Error for KvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Rejected(_) => None,
        }
    }
}

impl From<DbError> for KvError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for KvError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract for serialized collections.
///
/// `load` distinguishes an absent key (`None`) from an empty collection so
/// the entity store can establish missing keys on first open.
pub trait KvBackend {
    fn load(&self, key: &str) -> KvResult<Option<String>>;
    fn store(&mut self, key: &str, value: &str) -> KvResult<()>;
}

/// SQLite-backed key-value store over the `kv_store` table.
pub struct SqliteKvBackend {
    conn: Connection,
}

impl SqliteKvBackend {
    /// Wraps an already-bootstrapped connection (see `db::open_db`).
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl KvBackend for SqliteKvBackend {
    fn load(&self, key: &str) -> KvResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn store(&mut self, key: &str, value: &str) -> KvResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        debug!(
            "event=kv_store module=kv status=ok key={key} bytes={}",
            value.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{collection_key, KvBackend, SqliteKvBackend};
    use crate::db::open_db_in_memory;
    use crate::model::EntityKind;

    #[test]
    fn collection_keys_are_prefixed_and_plural() {
        assert_eq!(collection_key(EntityKind::Goal), "lifetrack.v1.goals");
        assert_eq!(collection_key(EntityKind::Skill), "lifetrack.v1.skills");
    }

    #[test]
    fn load_returns_none_for_absent_key() {
        let backend = SqliteKvBackend::new(open_db_in_memory().unwrap());
        assert_eq!(backend.load("lifetrack.v1.goals").unwrap(), None);
    }

    #[test]
    fn store_then_load_round_trips_and_overwrites() {
        let mut backend = SqliteKvBackend::new(open_db_in_memory().unwrap());
        backend.store("lifetrack.v1.notes", "[]").unwrap();
        assert_eq!(
            backend.load("lifetrack.v1.notes").unwrap().as_deref(),
            Some("[]")
        );

        backend.store("lifetrack.v1.notes", "[1]").unwrap();
        assert_eq!(
            backend.load("lifetrack.v1.notes").unwrap().as_deref(),
            Some("[1]")
        );
    }
}

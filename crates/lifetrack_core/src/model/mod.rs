//! Domain model for the six tracker collections.
//!
//! # Responsibility
//! - Define the canonical record per entity kind (goal/note/rule/project/
//!   quote/skill) plus shared id, date and progress helpers.
//! - Centralize derived-field computation so every mutation path produces
//!   the same invariants.
//!
//! # Invariants
//! - Ids are creation-timestamp integers, unique within one collection.
//! - Progress values are parsed through `parse_progress` and never leave
//!   the `[0, 100]` range.
//! - Enum-ish fields round-trip unknown tokens verbatim instead of failing
//!   deserialization.

use chrono::{NaiveDate, Utc};
use std::fmt::{Display, Formatter};

pub mod goal;
pub mod note;
pub mod project;
pub mod quote;
pub mod rule;
pub mod skill;

/// Stable identifier for every tracked entity.
///
/// Epoch milliseconds at creation time, bumped past the collection maximum
/// on collision. Unique per collection, not globally.
pub type EntityId = i64;

/// The six tracked collection kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Goal,
    Note,
    Rule,
    Project,
    Quote,
    Skill,
}

impl EntityKind {
    /// Lowercase singular name used in keys, log events and error text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Goal => "goal",
            Self::Note => "note",
            Self::Rule => "rule",
            Self::Project => "project",
            Self::Quote => "quote",
            Self::Skill => "skill",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allocates a fresh id for a collection.
///
/// Uses the current epoch-millisecond timestamp; when the collection already
/// contains an id at or past that value (rapid successive creates), the
/// maximum existing id plus one is used instead.
pub fn allocate_id<I>(existing: I) -> EntityId
where
    I: IntoIterator<Item = EntityId>,
{
    let now = now_epoch_ms();
    match existing.into_iter().max() {
        Some(max) if max >= now => max + 1,
        _ => now,
    }
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Parses a raw progress string into a value within `[0, 100]`.
///
/// Returns `None` for non-numeric input and for values outside the range;
/// callers turn that into their own range error without mutating anything.
pub fn parse_progress(raw: &str) -> Option<u8> {
    let value: i64 = raw.trim().parse().ok()?;
    u8::try_from(value).ok().filter(|progress| *progress <= 100)
}

/// Parses a `YYYY-MM-DD` form-field date.
pub fn parse_entry_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Uppercases the first character of a label fragment.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{allocate_id, capitalize, parse_entry_date, parse_progress};

    #[test]
    fn parse_progress_accepts_bounds_and_rejects_outside() {
        assert_eq!(parse_progress("0"), Some(0));
        assert_eq!(parse_progress(" 100 "), Some(100));
        assert_eq!(parse_progress("101"), None);
        assert_eq!(parse_progress("-1"), None);
        assert_eq!(parse_progress("forty"), None);
    }

    #[test]
    fn parse_entry_date_accepts_iso_form_values() {
        assert!(parse_entry_date("2026-01-15").is_some());
        assert!(parse_entry_date("15/01/2026").is_none());
        assert!(parse_entry_date("").is_none());
    }

    #[test]
    fn allocate_id_moves_past_existing_maximum() {
        let first = allocate_id([]);
        let second = allocate_id([first, first + 10]);
        assert!(second > first + 10);
    }

    #[test]
    fn capitalize_handles_empty_and_ascii() {
        assert_eq!(capitalize("beginner"), "Beginner");
        assert_eq!(capitalize(""), "");
    }
}

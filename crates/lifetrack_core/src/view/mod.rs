//! List projection layer: display-ready views over store snapshots.
//!
//! # Responsibility
//! - Filter and sort collections into card structs the presentation layer
//!   renders directly.
//! - Own the per-view empty-state messages.
//!
//! # Invariants
//! - Projections never mutate the store; re-invoking a projection with an
//!   unchanged snapshot (and the same `today`) yields identical output.
//! - Date labels and deadline urgency are computed against a caller-passed
//!   `today`, keeping every projection a pure function.

use chrono::{DateTime, Datelike, NaiveDate};

pub mod boards;
pub mod goals;
pub mod skills;

/// An ordered, display-ready list plus its view-specific empty state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView<T> {
    items: Vec<T>,
    empty_message: &'static str,
}

impl<T> ListView<T> {
    fn new(items: Vec<T>, empty_message: &'static str) -> Self {
        Self {
            items,
            empty_message,
        }
    }

    /// Items in display order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The view's empty-state message; `Some` only when there is nothing to
    /// show.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.items.is_empty().then_some(self.empty_message)
    }
}

/// Formats a date as "Mon D" within the current year, "Mon D, YYYY"
/// otherwise.
pub(crate) fn format_short_date(date: NaiveDate, today: NaiveDate) -> String {
    if date.year() == today.year() {
        date.format("%b %-d").to_string()
    } else {
        date.format("%b %-d, %Y").to_string()
    }
}

/// Formats an epoch-millisecond creation timestamp as a short date label.
pub(crate) fn format_epoch_ms_date(epoch_ms: i64, today: NaiveDate) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(timestamp) => format_short_date(timestamp.date_naive(), today),
        None => String::new(),
    }
}

//! Quote rotation: the dashboard's cycling motivational banner.
//!
//! # Responsibility
//! - Track the cursor into the quote collection and emit the next banner
//!   on each tick.
//!
//! # Invariants
//! - The collection length is re-read on every tick and the cursor is
//!   clamped modulo the current length; external mutation between ticks is
//!   tolerated.
//! - A stopped or empty rotation never emits and never errors.
//! - `restart` discards all previous rotation state, so at most one logical
//!   rotation exists at a time.

use crate::model::quote::Quote;
use rand::Rng;
use std::time::Duration;

/// Fixed banner rotation period; the driving scheduler owns the clock.
pub const ROTATION_PERIOD: Duration = Duration::from_secs(10);

/// Explicit rotation state: a cursor plus a running flag.
///
/// The component is deliberately clock-free. The embedding shell calls
/// `tick` every `ROTATION_PERIOD`; tests call it directly.
#[derive(Debug, Default)]
pub struct QuoteRotation {
    cursor: usize,
    running: bool,
}

impl QuoteRotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the cursor and starts the rotation, emitting the first banner
    /// immediately.
    ///
    /// Replaces any previous rotation state, so restarting after a data
    /// reload cannot leave two cycles running. Does not start when the
    /// collection is empty.
    pub fn restart(&mut self, quotes: &[Quote]) -> Option<String> {
        self.cursor = 0;
        self.running = !quotes.is_empty();
        self.tick(quotes)
    }

    /// Stops emission until the next `restart`.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Emits the banner at the cursor and advances by one, wrapping at the
    /// current collection length.
    ///
    /// Returns `None` without error when stopped or when the collection has
    /// become empty.
    pub fn tick(&mut self, quotes: &[Quote]) -> Option<String> {
        if !self.running || quotes.is_empty() {
            return None;
        }

        if self.cursor >= quotes.len() {
            self.cursor = 0;
        }
        let quote = &quotes[self.cursor];
        self.cursor = (self.cursor + 1) % quotes.len();
        Some(banner(quote))
    }

    /// Current zero-based cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Banner text for one quote.
pub fn banner(quote: &Quote) -> String {
    format!("\"{}\" — {}", quote.content, quote.author)
}

/// Picks a uniformly random quote for the "new quote" action.
pub fn random_quote(quotes: &[Quote]) -> Option<&Quote> {
    if quotes.is_empty() {
        return None;
    }
    let index = rand::rng().random_range(0..quotes.len());
    Some(&quotes[index])
}

//! Visited-state history with an undo/redo cursor.
//!
//! History is a linear timeline of the states a machine has been put in.
//! The cursor is 1-based and marks how far redo can replay: entries before
//! it are reachable by undo, entries after it by redo. The timeline is
//! never empty.

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One recorded visit to a state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The state that was entered
    pub state: StateId,
    /// When the entry was appended
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn now(state: StateId) -> Self {
        Self {
            state,
            recorded_at: Utc::now(),
        }
    }
}

/// Ordered timeline of visited states plus a cursor into it.
///
/// # Example
///
/// ```rust
/// use retrace::core::{History, StateId};
///
/// let mut history = History::new(StateId::new("A"));
/// history.push(StateId::new("B"));
/// history.seek_end();
///
/// assert_eq!(history.cursor(), 2);
/// assert_eq!(history.step_back().unwrap(), "A");
/// assert_eq!(history.step_forward().unwrap(), "B");
/// assert!(history.step_forward().is_none());
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl History {
    /// Start a timeline holding only `initial`, cursor on it.
    pub fn new(initial: StateId) -> Self {
        Self {
            entries: vec![HistoryEntry::now(initial)],
            cursor: 1,
        }
    }

    /// Append a state without moving the cursor.
    pub fn push(&mut self, state: StateId) {
        self.entries.push(HistoryEntry::now(state));
    }

    /// Append a state unless it already is the newest entry.
    ///
    /// Returns whether an entry was appended.
    pub fn push_if_changed(&mut self, state: StateId) -> bool {
        if self.last() == &state {
            return false;
        }
        self.push(state);
        true
    }

    /// Move the cursor to the newest entry, dropping any pending redo.
    pub fn seek_end(&mut self) {
        self.cursor = self.entries.len();
    }

    /// Move the cursor back one entry and return the state now current.
    ///
    /// Returns `None` when the cursor is already on the first entry.
    pub fn step_back(&mut self) -> Option<&StateId> {
        if self.cursor == 1 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor - 1].state)
    }

    /// Move the cursor forward one entry and return the state now current.
    ///
    /// Returns `None` when the cursor is already on the newest entry.
    pub fn step_forward(&mut self) -> Option<&StateId> {
        if self.cursor >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor - 1].state)
    }

    /// Replace the whole timeline with a single entry.
    pub fn clear(&mut self, initial: StateId) {
        self.entries = vec![HistoryEntry::now(initial)];
        self.cursor = 1;
    }

    /// 1-based cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_step_back(&self) -> bool {
        self.cursor > 1
    }

    pub fn can_step_forward(&self) -> bool {
        self.cursor < self.entries.len()
    }

    /// Newest entry's state.
    pub fn last(&self) -> &StateId {
        // The timeline always holds at least one entry.
        &self.entries[self.entries.len() - 1].state
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// States in the order they were recorded.
    pub fn path(&self) -> Vec<&StateId> {
        self.entries.iter().map(|e| &e.state).collect()
    }

    /// Time between the first and the newest entry.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.entries.first()?;
        let last = self.entries.last()?;
        last.recorded_at
            .signed_duration_since(first.recorded_at)
            .to_std()
            .ok()
    }
}

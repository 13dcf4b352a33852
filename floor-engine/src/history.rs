//! Command/History Manager
//!
//! Linear undo over a bounded list of full snapshots. Entry 0 is the state
//! the session started from, so the very first edit is undoable. Pushing
//! while the cursor sits before the end discards the abandoned redo branch.
//!
//! Full snapshots (not diffs) are deliberate: floors are small. Whether
//! production scale wants diff-based history is an open scaling question.

use shared::models::LayoutSnapshot;
use shared::util::now_millis;

/// One reversible point in the edit history
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub timestamp: i64,
    pub snapshot: LayoutSnapshot,
    /// Free-text tag naming the operation, e.g. `"move_table"`
    pub action: String,
}

/// Bounded snapshot stack with a cursor
#[derive(Debug)]
pub struct LayoutHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    max_len: usize,
}

impl LayoutHistory {
    /// Create a history seeded with the initial state.
    pub fn new(initial: LayoutSnapshot, max_len: usize) -> Self {
        Self {
            entries: vec![HistoryEntry {
                timestamp: now_millis(),
                snapshot: initial,
                action: "init".to_string(),
            }],
            cursor: 0,
            max_len: max_len.max(1),
        }
    }

    /// Drop everything and reseed, e.g. after a draft load. Loading is not
    /// an undoable edit: nothing in the history predates it.
    pub fn reset(&mut self, initial: LayoutSnapshot, action: &str) {
        self.entries.clear();
        self.entries.push(HistoryEntry {
            timestamp: now_millis(),
            snapshot: initial,
            action: action.to_string(),
        });
        self.cursor = 0;
    }

    /// Record the state after a successful mutation, truncating any redo
    /// branch. When the list outgrows `max_len` the oldest entry is dropped
    /// and the cursor shifted, so undo depth is finite by design.
    pub fn push(&mut self, snapshot: LayoutSnapshot, action: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry {
            timestamp: now_millis(),
            snapshot,
            action: action.to_string(),
        });
        if self.entries.len() > self.max_len {
            self.entries.remove(0);
        }
        self.cursor = self.entries.len() - 1;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Step back one entry; `None` at the earliest retained point.
    pub fn undo(&mut self) -> Option<&LayoutSnapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor].snapshot)
    }

    /// Step forward one entry; `None` at the latest.
    pub fn redo(&mut self) -> Option<&LayoutSnapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor].snapshot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

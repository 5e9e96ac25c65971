//! Snapshot-based undo/redo over a single state slot.
//!
//! A `History` holds an ordered list of immutable snapshots and a cursor into
//! it. Consecutive snapshots are never structurally equal: writes that would
//! not change the head are absorbed.
//!
//! Two write paths exist. [`History::commit`] appends a snapshot and is used
//! when a gesture completes. [`History::commit_coalesced`] is used for every
//! intermediate frame of a gesture: the first coalesced write of a run opens
//! one entry, later ones overwrite that entry in place, and the closing
//! `commit` seals it. A drag of any length therefore yields one undo step.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

/// Undo/redo store over snapshots of `T`.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: Vec<T>,
    cursor: usize,
    /// True while a coalescing run owns the head entry.
    run_open: bool,
}

impl<T: Clone + PartialEq> History<T> {
    /// Create a history whose only entry is `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self { entries: vec![initial], cursor: 0, run_open: false }
    }

    /// The snapshot at the cursor.
    #[must_use]
    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of snapshots held, including the initial one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zero-based position of the cursor.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether a coalescing run is open.
    #[must_use]
    pub fn is_coalescing(&self) -> bool {
        self.run_open
    }

    /// Append `state` as a new entry, truncating any redo tail.
    ///
    /// Seals an open coalescing run with `state` as its final value. Returns
    /// `true` if the history gained or changed an entry.
    pub fn commit(&mut self, state: T) -> bool {
        if self.run_open {
            self.entries[self.cursor] = state;
            self.close_run();
            tracing::debug!(cursor = self.cursor, len = self.entries.len(), "history run sealed");
            return true;
        }
        if state == *self.current() {
            return false;
        }
        self.push(state);
        tracing::debug!(cursor = self.cursor, len = self.entries.len(), "history commit");
        true
    }

    /// Write an intermediate frame of an in-progress gesture.
    ///
    /// The first call of a run appends one entry; subsequent calls replace it
    /// in place. Returns `true` if the head changed.
    pub fn commit_coalesced(&mut self, state: T) -> bool {
        if self.run_open {
            if self.entries[self.cursor] == state {
                return false;
            }
            self.entries[self.cursor] = state;
            return true;
        }
        if state == *self.current() {
            return false;
        }
        self.push(state);
        self.run_open = true;
        true
    }

    /// Step the cursor back. Returns `false` at the start of history.
    pub fn undo(&mut self) -> bool {
        self.close_run();
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step the cursor forward. Returns `false` at the end of history.
    pub fn redo(&mut self) -> bool {
        self.close_run();
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }

    fn push(&mut self, state: T) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(state);
        self.cursor = self.entries.len() - 1;
    }

    /// End a coalescing run. A run whose final frame equals the entry below
    /// it collapses away so no-op gestures leave no trace.
    fn close_run(&mut self) {
        if !self.run_open {
            return;
        }
        self.run_open = false;
        if self.cursor > 0 && self.entries[self.cursor] == self.entries[self.cursor - 1] {
            self.entries.pop();
            self.cursor -= 1;
        }
    }
}

//! Linear undo/redo history over whole-surface snapshots.
//!
//! Every structural mutation appends a full snapshot string; undo and redo
//! move a pointer across the list and hand back the snapshot at the new
//! position for wholesale reload. There is no diffing and no inverse
//! operations. Recording while the pointer is not at the end first discards
//! the redoable tail, and a snapshot byte-equal to the current entry is
//! skipped so no-op events don't pile up.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

/// Ordered snapshot list plus the pointer marking "current" state.
///
/// Invariant: the list is never empty and the pointer is always in bounds.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    /// Start a history from a baseline snapshot (entry 0, pointer 0).
    #[must_use]
    pub fn new(baseline: String) -> Self {
        Self { entries: vec![baseline], index: 0 }
    }

    /// Record a snapshot as the new current entry.
    ///
    /// Returns `false` (and records nothing) when the snapshot is textually
    /// identical to the current entry. Otherwise any redoable entries past
    /// the pointer are dropped first.
    pub fn record(&mut self, snapshot: String) -> bool {
        if self.entries[self.index] == snapshot {
            return false;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(snapshot);
        self.index = self.entries.len() - 1;
        true
    }

    /// Step the pointer one entry back and return the snapshot there.
    /// Returns `None` at the baseline.
    pub fn undo(&mut self) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(&self.entries[self.index])
    }

    /// Step the pointer one entry forward and return the snapshot there.
    /// Returns `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&str> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(&self.entries[self.index])
    }

    /// The snapshot at the pointer.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    /// Whether a step back is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Whether a step forward is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Number of entries in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A history always holds at least the baseline.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Position of the pointer.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

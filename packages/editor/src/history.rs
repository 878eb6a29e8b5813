//! # Edit History
//!
//! Snapshot-based undo/redo over a page's block sequence.
//!
//! ## Design
//!
//! - The history is a list of snapshots `H` and a cursor `c` into it
//! - `H[c]` is always the state the editor is showing
//! - Recording truncates everything after the cursor, appends, and moves the
//!   cursor to the new end (a new action invalidates the redo future)
//! - Undo and redo only move the cursor
//! - Supports batches: records inside a batch collapse into one undo step
//! - Optional depth limit: the oldest snapshots are evicted first
//!
//! Global styles are not part of a snapshot. Undo restores blocks only.
//!
//! ## Example
//!
//! ```rust
//! use pagewright_editor::{History, HistorySnapshot};
//!
//! let mut history = History::new(HistorySnapshot::new(Vec::new()));
//! history.record(HistorySnapshot::new(Vec::new()).with_description("Insert hero"));
//!
//! assert_eq!(history.undo_description(), Some("Insert hero"));
//! assert!(history.undo().is_some());
//! assert!(history.undo().is_none());
//! ```

use pagewright_document::PageBlock;
use tracing::debug;

/// Default number of snapshots kept
pub const DEFAULT_MAX_LEVELS: usize = 100;

/// A copy of the block sequence at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySnapshot {
    pub blocks: Vec<PageBlock>,

    /// What produced this state, shown as "Undo {description}"
    pub description: Option<String>,
}

impl HistorySnapshot {
    pub fn new(blocks: Vec<PageBlock>) -> Self {
        Self {
            blocks,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl From<Vec<PageBlock>> for HistorySnapshot {
    fn from(blocks: Vec<PageBlock>) -> Self {
        Self::new(blocks)
    }
}

#[derive(Debug, Clone)]
struct OpenBatch {
    description: Option<String>,

    /// Whether the batch already owns an entry in the history
    recorded: bool,
}

#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<HistorySnapshot>,

    cursor: usize,

    /// Maximum number of snapshots (0 = unlimited)
    max_levels: usize,

    batch: Option<OpenBatch>,
}

impl History {
    /// Create a history with the default limit of 100 snapshots
    pub fn new(initial: impl Into<HistorySnapshot>) -> Self {
        Self::with_max_levels(initial, DEFAULT_MAX_LEVELS)
    }

    pub fn with_max_levels(initial: impl Into<HistorySnapshot>, max_levels: usize) -> Self {
        Self {
            snapshots: vec![initial.into()],
            cursor: 0,
            max_levels,
            batch: None,
        }
    }

    /// Record a new current state
    pub fn record(&mut self, snapshot: impl Into<HistorySnapshot>) {
        let mut snapshot = snapshot.into();

        if let Some(batch) = &mut self.batch {
            if batch.description.is_some() {
                snapshot.description = batch.description.clone();
            }
            if batch.recorded {
                // Later records in a batch replace the batch's entry
                self.snapshots.truncate(self.cursor + 1);
                self.snapshots[self.cursor] = snapshot;
                return;
            }
            batch.recorded = true;
        }

        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;

        if self.max_levels > 0 && self.snapshots.len() > self.max_levels {
            let excess = self.snapshots.len() - self.max_levels;
            self.snapshots.drain(..excess);
            self.cursor -= excess;
            debug!(evicted = excess, "History limit reached");
        }
    }

    /// Step back; returns the state to restore
    pub fn undo(&mut self) -> Option<&HistorySnapshot> {
        self.batch = None;
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Step forward; returns the state to restore
    pub fn redo(&mut self) -> Option<&HistorySnapshot> {
        self.batch = None;
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Start a batch: the records until `end_batch` undo as one step
    pub fn begin_batch(&mut self, description: Option<String>) {
        self.batch = Some(OpenBatch {
            description,
            recorded: false,
        });
    }

    pub fn end_batch(&mut self) {
        self.batch = None;
    }

    pub fn in_batch(&self) -> bool {
        self.batch.is_some()
    }

    pub fn current(&self) -> &HistorySnapshot {
        &self.snapshots[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Get the number of undo levels available
    pub fn undo_levels(&self) -> usize {
        self.cursor
    }

    /// Get the number of redo levels available
    pub fn redo_levels(&self) -> usize {
        self.snapshots.len() - 1 - self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    /// Description of the step the next undo reverts
    pub fn undo_description(&self) -> Option<&str> {
        if self.can_undo() {
            self.snapshots[self.cursor].description.as_deref()
        } else {
            None
        }
    }

    /// Description of the step the next redo reapplies
    pub fn redo_description(&self) -> Option<&str> {
        self.snapshots
            .get(self.cursor + 1)
            .and_then(|snapshot| snapshot.description.as_deref())
    }

    /// Drop all history and start over from `initial`
    pub fn clear(&mut self, initial: impl Into<HistorySnapshot>) {
        self.snapshots = vec![initial.into()];
        self.cursor = 0;
        self.batch = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_document::Props;

    fn state(ids: &[&str]) -> HistorySnapshot {
        HistorySnapshot::new(
            ids.iter()
                .map(|id| PageBlock::new(*id, "text", Props::new()))
                .collect(),
        )
    }

    fn ids(snapshot: &HistorySnapshot) -> Vec<&str> {
        snapshot.blocks.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_history_creation() {
        let history = History::new(state(&[]));
        assert_eq!(history.undo_levels(), 0);
        assert_eq!(history.redo_levels(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_undo_redo() {
        let mut history = History::new(state(&[]));
        history.record(state(&["a"]));
        history.record(state(&["a", "b"]));

        assert_eq!(history.undo_levels(), 2);
        assert_eq!(ids(history.undo().unwrap()), vec!["a"]);
        assert_eq!(ids(history.undo().unwrap()), Vec::<&str>::new());
        assert!(history.undo().is_none());

        assert_eq!(ids(history.redo().unwrap()), vec!["a"]);
        assert_eq!(history.redo_levels(), 1);
        assert_eq!(ids(history.current()), vec!["a"]);
    }

    #[test]
    fn test_new_record_clears_redo() {
        let mut history = History::new(state(&[]));
        history.record(state(&["a"]));
        history.record(state(&["b"]));
        history.undo();
        history.undo();

        history.record(state(&["c"]));
        assert_eq!(history.redo_levels(), 0);
        assert!(history.redo().is_none());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_batched_records_undo_as_one_step() {
        let mut history = History::new(state(&[]));

        history.begin_batch(Some("Generate hero".to_string()));
        history.record(state(&["a"]));
        history.record(state(&["a", "b"]));
        history.record(state(&["a", "b", "c"]));
        history.end_batch();

        assert_eq!(history.undo_levels(), 1);
        assert_eq!(history.undo_description(), Some("Generate hero"));
        assert_eq!(ids(history.current()), vec!["a", "b", "c"]);

        assert!(history.undo().unwrap().blocks.is_empty());
        assert!(!history.can_undo());
    }

    #[test]
    fn test_empty_batch_records_nothing() {
        let mut history = History::new(state(&[]));
        history.begin_batch(None);
        history.end_batch();
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut history = History::with_max_levels(state(&[]), 3);
        for id in ["a", "b", "c", "d", "e"] {
            history.record(state(&[id]));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.undo_levels(), 2);
        assert_eq!(ids(history.current()), vec!["e"]);
        assert_eq!(ids(history.undo().unwrap()), vec!["d"]);
        assert_eq!(ids(history.undo().unwrap()), vec!["c"]);
        assert!(history.undo().is_none());
    }

    #[test]
    fn test_zero_means_unlimited() {
        let mut history = History::with_max_levels(state(&[]), 0);
        for _ in 0..250 {
            history.record(state(&["x"]));
        }
        assert_eq!(history.undo_levels(), 250);
    }

    #[test]
    fn test_clear_resets() {
        let mut history = History::new(state(&[]));
        history.record(state(&["a"]));
        history.clear(state(&["z"]));

        assert!(!history.can_undo());
        assert_eq!(ids(history.current()), vec!["z"]);
    }
}

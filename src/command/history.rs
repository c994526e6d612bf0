// HistoryLog - bounded record of applied operations for undo/redo

use crate::command::commands::Operation;
use crate::command::error::CommandResult;
use crate::command::snapshot::{HistoryEntry, Snapshot};
use crate::command::state::Accumulator;
use std::collections::VecDeque;

/// Default maximum number of entries to keep in history
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Largest history limit accepted from configuration
pub const MAX_HISTORY_CAPACITY: usize = 100_000;

/// Bounded, ordered log of applied operations and their resulting snapshots
///
/// The log owns every snapshot but not the accumulator; callers pass the
/// accumulator in by `&mut` so the two can be tested in isolation.
///
/// # Memory Management
/// The log keeps at most `max_history` entries. When a new entry would exceed
/// the limit, the oldest entry is evicted first.
///
/// # Redo
/// Redo re-executes the most recent operation rather than restoring a value,
/// so redoing `Add(5)` adds five again.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    /// Applied entries, most recent at the back
    entries: VecDeque<HistoryEntry>,

    /// Maximum number of entries to keep
    max_history: usize,
}

impl HistoryLog {
    /// Create a new HistoryLog with the default limit
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_HISTORY)
    }

    /// Create a new HistoryLog with a custom history limit
    ///
    /// A limit of zero is raised to one so the log can hold the entry it
    /// just recorded. Storage grows on demand; only up to
    /// `DEFAULT_MAX_HISTORY` entries are allocated up front.
    pub fn with_capacity(max_history: usize) -> Self {
        let max_history = max_history.max(1);
        Self {
            entries: VecDeque::with_capacity(max_history.min(DEFAULT_MAX_HISTORY)),
            max_history,
        }
    }

    /// Apply an operation to the accumulator and record the result
    ///
    /// # Errors
    /// Returns an error if the operation overflows. Neither the accumulator
    /// nor the log is changed in that case.
    pub fn apply(
        &mut self,
        operation: Operation,
        accumulator: &mut Accumulator,
    ) -> CommandResult<Snapshot> {
        accumulator.apply(operation).inspect_err(|e| log::warn!("{}", e))?;
        let snapshot = Snapshot::capture(accumulator);
        self.record(operation, snapshot);
        Ok(snapshot)
    }

    /// Append an entry, evicting the oldest one first if the log is full
    pub fn record(&mut self, operation: Operation, snapshot: Snapshot) {
        if self.entries.len() >= self.max_history {
            if let Some(evicted) = self.entries.pop_front() {
                log::debug!(
                    "History full ({}), evicted oldest entry: {}",
                    self.max_history,
                    evicted.operation.description()
                );
            }
        }

        log::debug!(
            "Recorded {} -> {}",
            operation.description(),
            snapshot.value()
        );
        self.entries.push_back(HistoryEntry::new(operation, snapshot));
    }

    /// Re-execute the most recently recorded operation
    ///
    /// Returns `Ok(None)` without touching anything if no operation has been
    /// recorded yet.
    ///
    /// # Errors
    /// Returns an error if re-executing the operation overflows.
    pub fn redo(&mut self, accumulator: &mut Accumulator) -> CommandResult<Option<Snapshot>> {
        let Some(operation) = self.entries.back().map(|entry| entry.operation) else {
            log::info!("Cannot redo: no command has been executed");
            return Ok(None);
        };

        let snapshot = self.apply(operation, accumulator)?;
        log::info!(
            "Redo: {} (accumulator = {})",
            operation.description(),
            snapshot.value()
        );
        Ok(Some(snapshot))
    }

    /// Roll back the most recent operation
    ///
    /// Removes the last entry and restores the accumulator to the value it
    /// had before that operation. Undoing the only remaining entry resets the
    /// accumulator to its initial value. Returns the restored value, or
    /// `None` without touching anything if the log is empty.
    pub fn undo(&mut self, accumulator: &mut Accumulator) -> Option<Snapshot> {
        let Some(undone) = self.entries.pop_back() else {
            log::info!("Cannot undo: no command has been executed");
            return None;
        };

        match self.entries.back() {
            None => accumulator.reset(),
            Some(previous) => {
                let expected = previous.snapshot.value();
                let restored = match undone.operation.invert(undone.snapshot.value()) {
                    Some(value) if value == expected => value,
                    Some(value) => {
                        log::warn!(
                            "Inverse of {} gave {}, previous snapshot is {}; using snapshot",
                            undone.operation.description(),
                            value,
                            expected
                        );
                        expected
                    }
                    None => expected,
                };
                accumulator.set(restored);
            }
        }

        let snapshot = Snapshot::capture(accumulator);
        log::info!(
            "Undo: {} (accumulator = {})",
            undone.operation.description(),
            snapshot.value()
        );
        Some(snapshot)
    }

    /// Check if there is an operation that can be undone
    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Check if there is an operation that can be redone
    ///
    /// Redo re-executes the last recorded operation, so this is the same
    /// condition as `can_undo`.
    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Get a description of the operation that would be undone (or redone)
    pub fn undo_description(&self) -> Option<String> {
        self.entries
            .back()
            .map(|entry| entry.operation.description())
    }

    /// The most recent entry
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Iterate over the entries, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept
    pub fn capacity(&self) -> usize {
        self.max_history
    }

    /// Serialize the entries, oldest first, as pretty RON
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(&self.entries, ron::ser::PrettyConfig::default())
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

// Snapshot and HistoryEntry - immutable records kept by the history log

use crate::command::commands::Operation;
use crate::command::state::Accumulator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable copy of the accumulator value at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    value: i64,
}

impl Snapshot {
    /// Capture the current value of the accumulator
    pub fn capture(accumulator: &Accumulator) -> Self {
        Self {
            value: accumulator.value(),
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl From<i64> for Snapshot {
    fn from(value: i64) -> Self {
        Self { value }
    }
}

/// One applied operation and the snapshot taken right after it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub operation: Operation,
    pub snapshot: Snapshot,
    /// When the entry was recorded (display only)
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(operation: Operation, snapshot: Snapshot) -> Self {
        Self {
            operation,
            snapshot,
            recorded_at: Utc::now(),
        }
    }
}

// Command/Memento core for undo/redo on an integer accumulator
//
// Architecture:
// - Operation: closed set of mutations (Add, Multiply) with forward and inverse rules
// - Accumulator: the single mutable value operations act on
// - Snapshot / HistoryEntry: immutable records of the value after each operation
// - HistoryLog: bounded log supporting record, redo (re-execute) and undo (rollback)
// - Session: owns one Accumulator and one HistoryLog for a driver

pub mod commands;
pub mod error;
pub mod history;
pub mod session;
pub mod snapshot;
pub mod state;

pub use commands::Operation;
pub use error::{CommandError, CommandResult};
pub use history::{DEFAULT_MAX_HISTORY, HistoryLog};
pub use session::Session;
pub use snapshot::{HistoryEntry, Snapshot};
pub use state::Accumulator;

// Session - one accumulator paired with its history log

use crate::command::commands::Operation;
use crate::command::error::CommandResult;
use crate::command::history::HistoryLog;
use crate::command::state::Accumulator;
use crate::config::EngineConfig;

/// Owns the accumulator and the history log and exposes the three core calls
///
/// The driver creates one Session at startup and keeps it for the lifetime of
/// the process. Nothing is shared or global.
#[derive(Debug, Clone, Default)]
pub struct Session {
    accumulator: Accumulator,
    history: HistoryLog,
}

impl Session {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            accumulator: Accumulator::new(config.initial_value),
            history: HistoryLog::with_capacity(config.history_capacity),
        }
    }

    /// Apply an operation and return the new accumulator value
    pub fn apply(&mut self, operation: Operation) -> CommandResult<i64> {
        self.history
            .apply(operation, &mut self.accumulator)
            .map(|s| s.value())
    }

    /// Re-execute the last operation; `None` if nothing has been executed
    pub fn redo(&mut self) -> CommandResult<Option<i64>> {
        Ok(self.history.redo(&mut self.accumulator)?.map(|s| s.value()))
    }

    /// Roll back the last operation; `None` if nothing has been executed
    pub fn undo(&mut self) -> Option<i64> {
        self.history
            .undo(&mut self.accumulator)
            .map(|s| s.value())
    }

    pub fn value(&self) -> i64 {
        self.accumulator.value()
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }
}

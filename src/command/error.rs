// CommandError - failures raised while mutating the accumulator

use crate::command::commands::Operation;
use std::fmt;

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur during command execution
///
/// An empty history is not an error: `redo` and `undo` report it as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// The operation would overflow the accumulator; nothing was changed
    Overflow { operation: Operation, value: i64 },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Overflow { operation, value } => {
                write!(
                    f,
                    "Overflow: applying '{}' to {} exceeds the accumulator range",
                    operation, value
                )
            }
        }
    }
}

impl std::error::Error for CommandError {}

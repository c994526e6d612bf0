// Undo Accumulator - Library exports for the driver, tests and benchmarks

pub mod command;
pub mod config;
pub mod driver;

// Re-export commonly used types for convenience
pub use command::{
    Accumulator, CommandError, CommandResult, HistoryEntry, HistoryLog, Operation, Session,
    Snapshot,
};
pub use config::EngineConfig;

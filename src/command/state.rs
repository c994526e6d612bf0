// Accumulator - the single mutable value that commands operate on

use crate::command::commands::Operation;
use crate::command::error::{CommandError, CommandResult};

/// The subject of every command: one integer accumulator
///
/// Only `Operation`s mutate it going forward; undo restores values directly
/// through `set` and `reset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulator {
    /// Current value
    value: i64,

    /// Value the accumulator starts from and is reset to when the
    /// first remaining operation is undone
    initial: i64,
}

impl Accumulator {
    /// Create an accumulator starting at `initial`
    pub fn new(initial: i64) -> Self {
        Self {
            value: initial,
            initial,
        }
    }

    /// Apply an operation in place and return the new value
    ///
    /// # Errors
    /// Returns `CommandError::Overflow` if the result does not fit in an `i64`.
    /// The value is left unchanged in that case.
    pub fn apply(&mut self, operation: Operation) -> CommandResult<i64> {
        let next = operation
            .apply_to(self.value)
            .ok_or(CommandError::Overflow {
                operation,
                value: self.value,
            })?;
        self.value = next;
        Ok(next)
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn initial(&self) -> i64 {
        self.initial
    }

    /// Overwrite the current value
    pub fn set(&mut self, value: i64) {
        self.value = value;
    }

    /// Restore the initial value
    pub fn reset(&mut self) {
        self.value = self.initial;
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_add_and_multiply() {
        let mut acc = Accumulator::default();
        assert_eq!(acc.apply(Operation::Add(3)).unwrap(), 3);
        assert_eq!(acc.apply(Operation::Multiply(4)).unwrap(), 12);
        assert_eq!(acc.value(), 12);
    }

    #[test]
    fn test_overflow_leaves_value_unchanged() {
        let mut acc = Accumulator::new(i64::MAX - 1);
        let err = acc.apply(Operation::Add(2)).unwrap_err();
        assert_eq!(
            err,
            CommandError::Overflow {
                operation: Operation::Add(2),
                value: i64::MAX - 1,
            }
        );
        assert_eq!(acc.value(), i64::MAX - 1);
    }

    #[test]
    fn test_reset_uses_initial_value() {
        let mut acc = Accumulator::new(10);
        acc.apply(Operation::Multiply(5)).unwrap();
        acc.reset();
        assert_eq!(acc.value(), 10);
        assert_eq!(acc.initial(), 10);
    }
}

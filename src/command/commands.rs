// Concrete operations on the accumulator

use serde::{Deserialize, Serialize};
use std::fmt;

/// An operation that mutates the accumulator
///
/// The set is closed: each variant carries its operand and has exactly one
/// forward rule (`apply_to`) and one inverse rule (`invert`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// `value := value + operand`
    Add(i64),
    /// `value := value * operand`
    Multiply(i64),
}

impl Operation {
    /// The operand carried by this operation
    pub fn operand(&self) -> i64 {
        match *self {
            Operation::Add(x) | Operation::Multiply(x) => x,
        }
    }

    /// Compute the value after applying this operation to `value`
    ///
    /// Returns `None` if the result does not fit in an `i64`.
    pub fn apply_to(&self, value: i64) -> Option<i64> {
        match *self {
            Operation::Add(x) => value.checked_add(x),
            Operation::Multiply(x) => value.checked_mul(x),
        }
    }

    /// Recover the value this operation was applied to, given its result
    ///
    /// Returns `None` when the operation cannot be inverted exactly:
    /// multiplying by zero loses the original value, and a result that is not
    /// a multiple of the factor was never produced by this operation.
    pub fn invert(&self, result: i64) -> Option<i64> {
        match *self {
            Operation::Add(x) => result.checked_sub(x),
            Operation::Multiply(0) => None,
            Operation::Multiply(x) => {
                if result.checked_rem(x)? != 0 {
                    return None;
                }
                result.checked_div(x)
            }
        }
    }

    /// Get a human-readable description of the operation
    pub fn description(&self) -> String {
        match *self {
            Operation::Add(x) => format!("Add {}", x),
            Operation::Multiply(x) => format!("Multiply by {}", x),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

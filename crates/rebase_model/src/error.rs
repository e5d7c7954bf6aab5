//! Arithmetic failures surfaced to callers

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Rebased quotient does not fit in u64
    #[error("rebased amount overflows u64: {amount} * {current} / {last}")]
    RebaseOverflow { amount: u64, current: u64, last: u64 },

    /// Running u64 total would wrap
    #[error("u64 accumulator overflow adding {addend} to {total}")]
    AccumulatorOverflow { total: u64, addend: u64 },

    /// Wide intermediate does not fit the destination width
    #[error("value {value} does not fit the destination width")]
    NarrowOverflow { value: i128 },
}

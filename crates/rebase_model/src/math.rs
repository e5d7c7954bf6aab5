//! Checked arithmetic helpers - no unwrap, no panics, no lossy casts

use crate::error::ArithmeticError;

/// Multiply two u64 values into u128 (always exact)
pub fn mul_wide(a: u64, b: u64) -> u128 {
    u128::from(a) * u128::from(b)
}

/// Narrow u128 to u64, None if it does not fit
pub fn narrow_u64(x: u128) -> Option<u64> {
    u64::try_from(x).ok()
}

/// Add to a u64 accumulator, failing instead of wrapping
pub fn checked_accumulate(total: u64, addend: u64) -> Result<u64, ArithmeticError> {
    total
        .checked_add(addend)
        .ok_or(ArithmeticError::AccumulatorOverflow { total, addend })
}

/// Narrow i128 to i64
pub fn narrow_i64(value: i128) -> Result<i64, ArithmeticError> {
    i64::try_from(value).map_err(|_| ArithmeticError::NarrowOverflow { value })
}

/// Narrow a non-negative i128 to u64 (negative is rejected too)
pub fn narrow_unsigned(value: i128) -> Result<u64, ArithmeticError> {
    u64::try_from(value).map_err(|_| ArithmeticError::NarrowOverflow { value })
}

//! Rebasing engine
//!
//! Rescales a stored amount by how far a global multiplier has moved since
//! the holder last observed it:
//!
//! ```text
//! adjusted = raw * current / last
//! ```
//!
//! Both multipliers go through [`multiplier_or_base`] first, so the divisor
//! is never zero. The product is formed in u128 (exact for any pair of u64
//! operands) and narrowed to u64 only after the division. A product that
//! exceeds `u64::MAX` is fine as long as the quotient fits.

use crate::error::ArithmeticError;
use crate::math::{mul_wide, narrow_u64};
use crate::multiplier::multiplier_or_base;

/// Rebase `raw` from `last` to `current`
///
/// # Errors
/// [`ArithmeticError::RebaseOverflow`] if the quotient does not fit in u64.
pub fn rebase(raw: u64, current: u64, last: u64) -> Result<u64, ArithmeticError> {
    let current = multiplier_or_base(current);
    let last = multiplier_or_base(last);

    if current == last {
        return Ok(raw);
    }

    // last >= 1 after substitution
    let scaled = mul_wide(raw, current) / u128::from(last);

    narrow_u64(scaled).ok_or(ArithmeticError::RebaseOverflow {
        amount: raw,
        current,
        last,
    })
}

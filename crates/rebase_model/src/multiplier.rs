//! Fixed-point multipliers and the zero-means-unset convention
//!
//! Vault multipliers and staking yield indices are stored as raw u64 values
//! where zero means "never recorded". A recorded value of exactly
//! [`BASE_UNIT`] is indistinguishable from "never set".

/// Fixed-point representation of a multiplier of 1 (1e18)
pub const BASE_UNIT: u64 = 1_000_000_000_000_000_000;

/// Read a stored multiplier, substituting the base unit for zero
pub fn multiplier_or_base(raw: u64) -> u64 {
    if raw == 0 {
        BASE_UNIT
    } else {
        raw
    }
}

//! Generators for arbitrary rebase inputs (for Kani)

#[cfg(kani)]
use kani::any;
#[cfg(kani)]
use crate::sanitizer::RebaseInput;

#[cfg(kani)]
pub fn any_input() -> RebaseInput {
    RebaseInput {
        raw: any(),
        current: any(),
        last: any(),
    }
}

/// Multipliers drawn from a small grid around the base unit
#[cfg(kani)]
pub fn any_grid_multiplier() -> u64 {
    let step: u8 = any();
    // 0 (unset) or 0.25x .. 4x in quarter steps
    match step % 17 {
        0 => 0,
        k => (k as u64) * (rebase_model::BASE_UNIT / 4),
    }
}

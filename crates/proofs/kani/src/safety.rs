//! Kani proofs for the rebasing identities

use kani::any;
use rebase_model::{rebase, ArithmeticError, BASE_UNIT};
use crate::{generators::*, sanitizer::*};

/// Equal multipliers leave the amount untouched
#[kani::proof]
fn rebase_identity() {
    let raw: u64 = any();
    let m: u64 = any();
    kani::assert(rebase(raw, m, m) == Ok(raw), "rebase(r, m, m) must equal r");
}

/// Unset multipliers behave exactly like the base unit
#[kani::proof]
fn unset_equals_base_unit() {
    let raw: u64 = any();
    kani::assert(rebase(raw, 0, 0) == Ok(raw), "unset pair must be identity");
    kani::assert(
        rebase(raw, 0, BASE_UNIT) == rebase(raw, BASE_UNIT, BASE_UNIT),
        "zero current must read as base unit",
    );
}

/// Never panics, never divides by zero: every input is Ok or RebaseOverflow
#[kani::proof]
fn rebase_is_total() {
    let input = any_input();
    match rebase(input.raw, input.current, input.last) {
        Ok(_) => {}
        Err(ArithmeticError::RebaseOverflow { last, .. }) => {
            kani::assert(last != 0, "divisor must have been substituted");
        }
        Err(_) => kani::assert(false, "rebase only reports RebaseOverflow"),
    }
}

/// Growth of the multiplier never shrinks a nonzero amount
#[kani::proof]
fn growth_never_shrinks() {
    let input = any_input().sanitize();
    let current = any_grid_multiplier();
    let last = any_grid_multiplier();
    kani::assume(input.raw > 0);
    kani::assume(current > last && last != 0);

    if let Ok(v) = rebase(input.raw, current, last) {
        kani::assert(v >= input.raw, "current > last must not shrink the amount");
    }
}

/// Sanitized inputs always fit the destination width
#[kani::proof]
fn sanitized_inputs_fit() {
    let input = any_input().sanitize();
    kani::assert(
        rebase(input.raw, input.current, input.last).is_ok(),
        "bounded inputs must not overflow",
    );
}

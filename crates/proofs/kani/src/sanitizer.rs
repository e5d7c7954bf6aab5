//! Input sanitizer - bounds values for Kani exploration

use rebase_model::BASE_UNIT;

/// Largest multiplier ratio after clamping is 4x / 0.25x = 16x
pub const MAX_RAW: u64 = u64::MAX / 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RebaseInput {
    pub raw: u64,
    pub current: u64,
    pub last: u64,
}

pub trait Sanitize {
    fn sanitize(self) -> Self;
}

impl Sanitize for RebaseInput {
    fn sanitize(mut self) -> RebaseInput {
        if self.raw > MAX_RAW {
            self.raw %= MAX_RAW;
        }

        // Keep multipliers within 4x of the base unit so the quotient fits
        self.current = clamp_multiplier(self.current);
        self.last = clamp_multiplier(self.last);

        self
    }
}

fn clamp_multiplier(m: u64) -> u64 {
    if m == 0 {
        0
    } else {
        m.clamp(BASE_UNIT / 4, 4 * BASE_UNIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_unset() {
        let input = RebaseInput { raw: u64::MAX, current: 0, last: u64::MAX }.sanitize();
        assert!(input.raw < MAX_RAW);
        assert_eq!(input.current, 0);
        assert_eq!(input.last, 4 * BASE_UNIT);
    }

    #[test]
    fn test_sanitized_input_never_overflows() {
        let input = RebaseInput { raw: u64::MAX, current: u64::MAX, last: 1 }.sanitize();
        assert!(rebase_model::rebase(input.raw, input.current, input.last).is_ok());
    }
}

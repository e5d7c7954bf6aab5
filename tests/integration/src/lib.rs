//! Ledger view integration tests
//!
//! Fixture builders shared by the end-to-end tests under `tests/`. Each
//! test builds a [`Fixture`], mutates it, and takes a fresh view with
//! [`Fixture::with_view`] whenever it wants to read.

pub use ledgerview_common as common;
pub use ledgerview_core as view;
pub use ledgerview_ledger as ledger;
pub use ledgerview_oracle as oracle;

use ledgerview_common::Address;
use ledgerview_core::{CoreView, MarkToMarketMargin};
use ledgerview_ledger::{SimulatedLedger, WithdrawRequest};
use ledgerview_oracle::FixtureOracle;

/// Well-known fixture addresses
pub mod addr {
    use super::Address;

    pub const ALICE: Address = Address::from_low_u8(0x01);
    pub const BOB: Address = Address::from_low_u8(0x02);
    pub const VALIDATOR_A: Address = Address::from_low_u8(0x0a);
    pub const VALIDATOR_B: Address = Address::from_low_u8(0x0b);
    pub const VAULT: Address = Address::from_low_u8(0xaa);
}

/// Simulated ledger plus ground-truth oracle
#[derive(Debug, Default)]
pub struct Fixture {
    pub ledger: SimulatedLedger,
    pub oracle: FixtureOracle,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against a view wired to the mark-to-market aggregator
    pub fn with_view<R>(
        &self,
        f: impl FnOnce(&CoreView<'_, SimulatedLedger, FixtureOracle>) -> R,
    ) -> R {
        let margin = MarkToMarketMargin::new(&self.ledger, &self.oracle);
        let view = CoreView::new(&self.ledger, &self.oracle, &margin);
        f(&view)
    }

    /// Queue withdrawals in order
    pub fn queue_withdrawals(&mut self, requests: &[(Address, u64)]) {
        for (account, amount) in requests {
            self.ledger
                .push_withdraw_request(WithdrawRequest::new(*account, *amount))
                .expect("fixture withdrawal encodes");
        }
    }
}

/// Route `log` output to the test harness (idempotent)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

//! Read interface consumed by the view layer

use ledgerview_common::{Address, PerpIndex, SpotMarketIndex, TokenIndex, TokenInfo};

use crate::account::Account;
use crate::withdraw_queue::WithdrawQueue;

/// Read-only view of the simulated ledger
///
/// Multiplier lookups return the raw stored value; zero means "never
/// recorded" and callers substitute the base unit.
pub trait LedgerStore {
    fn token(&self, token: TokenIndex) -> Option<&TokenInfo>;

    /// Recorded mark price override (0 = none)
    fn mark_px_override(&self, perp: PerpIndex) -> u64;

    /// Recorded spot price override (0 = none)
    fn spot_px_override(&self, market: SpotMarketIndex) -> u64;

    fn account(&self, user: &Address) -> Option<&Account>;

    fn vault_multiplier(&self, vault: &Address) -> u64;

    fn user_vault_multiplier(&self, user: &Address, vault: &Address) -> u64;

    fn staking_yield_index(&self) -> u64;

    fn user_yield_index(&self, user: &Address, validator: &Address) -> u64;

    fn withdraw_queue(&self) -> &WithdrawQueue;
}

//! Simulated account state

use std::collections::BTreeMap;

use ledgerview_common::{Address, PerpIndex, Position, TokenIndex, UserVaultEquity};

use crate::validator_set::ValidatorSet;

/// Raw stored delegation (amount as of the last observed yield index)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoredDelegation {
    pub amount: u64,
    pub locked_until_timestamp: u64,
}

/// Simulated account
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    /// Activated accounts override the oracle for existence and withdrawable
    pub activated: bool,
    /// Spot totals; an entry exists iff the balance has been initialized
    pub spot: BTreeMap<TokenIndex, u64>,
    /// Perp (margin) balance
    pub perp_balance: u64,
    /// Open positions by perp
    pub positions: BTreeMap<PerpIndex, Position>,
    /// Raw delegations by validator
    pub delegations: BTreeMap<Address, StoredDelegation>,
    /// Validators delegated to, in first-delegation order
    pub delegated_validators: ValidatorSet,
    /// Vault equity snapshots (equity as of the last observed multiplier)
    pub vault_equity: BTreeMap<Address, UserVaultEquity>,
    /// Staked but undelegated
    pub staking: u64,
}

impl Account {
    /// Initialized spot total, None if never initialized
    pub fn spot_total(&self, token: TokenIndex) -> Option<u64> {
        self.spot.get(&token).copied()
    }

    /// Position for a perp (default if none)
    pub fn position(&self, perp: PerpIndex) -> Position {
        self.positions.get(&perp).copied().unwrap_or_default()
    }

    /// Raw delegation to a validator (default if none)
    pub fn delegation(&self, validator: &Address) -> StoredDelegation {
        self.delegations.get(validator).copied().unwrap_or_default()
    }

    /// Stored vault equity snapshot (default if none)
    pub fn vault_equity(&self, vault: &Address) -> UserVaultEquity {
        self.vault_equity.get(vault).copied().unwrap_or_default()
    }

    /// Update position; a zero size removes it
    pub fn update_position(&mut self, perp: PerpIndex, position: Position) {
        if position.szi == 0 {
            self.positions.remove(&perp);
        } else {
            self.positions.insert(perp, position);
        }
    }
}

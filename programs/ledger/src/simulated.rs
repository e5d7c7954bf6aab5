//! In-memory simulated ledger

use std::collections::BTreeMap;

use ledgerview_common::{
    Address, PerpIndex, Position, SpotMarketIndex, TokenIndex, TokenInfo, UserVaultEquity,
};

use crate::account::{Account, StoredDelegation};
use crate::store::LedgerStore;
use crate::withdraw_queue::{CodecError, WithdrawQueue, WithdrawRequest};

/// Mutable simulated ledger
///
/// Every table defaults to empty; the view layer treats an absent entry
/// as "no override recorded" or as the base multiplier.
#[derive(Debug, Clone, Default)]
pub struct SimulatedLedger {
    tokens: BTreeMap<TokenIndex, TokenInfo>,
    mark_px: BTreeMap<PerpIndex, u64>,
    spot_px: BTreeMap<SpotMarketIndex, u64>,
    accounts: BTreeMap<Address, Account>,
    vault_multiplier: BTreeMap<Address, u64>,
    user_vault_multiplier: BTreeMap<(Address, Address), u64>,
    staking_yield_index: u64,
    user_yield_index: BTreeMap<(Address, Address), u64>,
    withdraw_queue: WithdrawQueue,
}

impl SimulatedLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn account_mut(&mut self, user: Address) -> &mut Account {
        self.accounts.entry(user).or_default()
    }

    pub fn register_token(&mut self, token: TokenIndex, info: TokenInfo) {
        self.tokens.insert(token, info);
    }

    /// Record a mark price override (0 clears it)
    pub fn set_mark_px(&mut self, perp: PerpIndex, px: u64) {
        self.mark_px.insert(perp, px);
    }

    /// Record a spot price override (0 clears it)
    pub fn set_spot_px(&mut self, market: SpotMarketIndex, px: u64) {
        self.spot_px.insert(market, px);
    }

    pub fn activate(&mut self, user: Address) {
        self.account_mut(user).activated = true;
    }

    /// Set and initialize a spot balance
    pub fn set_spot_balance(&mut self, user: Address, token: TokenIndex, total: u64) {
        self.account_mut(user).spot.insert(token, total);
    }

    pub fn set_perp_balance(&mut self, user: Address, amount: u64) {
        self.account_mut(user).perp_balance = amount;
    }

    pub fn set_position(&mut self, user: Address, perp: PerpIndex, position: Position) {
        self.account_mut(user).update_position(perp, position);
    }

    /// Record a raw delegation and add the validator to the user's set
    ///
    /// The amount is stored as-is; callers snapshot the yield index with
    /// [`SimulatedLedger::observe_yield_index`].
    pub fn delegate(
        &mut self,
        user: Address,
        validator: Address,
        amount: u64,
        locked_until_timestamp: u64,
    ) {
        let account = self.account_mut(user);
        account.delegations.insert(
            validator,
            StoredDelegation {
                amount,
                locked_until_timestamp,
            },
        );
        account.delegated_validators.insert(validator);
    }

    pub fn set_vault_equity(&mut self, user: Address, vault: Address, equity: UserVaultEquity) {
        self.account_mut(user).vault_equity.insert(vault, equity);
    }

    pub fn set_staking(&mut self, user: Address, amount: u64) {
        self.account_mut(user).staking = amount;
    }

    pub fn set_vault_multiplier(&mut self, vault: Address, multiplier: u64) {
        self.vault_multiplier.insert(vault, multiplier);
    }

    /// Record the vault multiplier the user last observed
    pub fn observe_vault_multiplier(&mut self, user: Address, vault: Address, multiplier: u64) {
        self.user_vault_multiplier.insert((user, vault), multiplier);
    }

    pub fn set_staking_yield_index(&mut self, index: u64) {
        self.staking_yield_index = index;
    }

    /// Record the yield index the user last observed for a validator
    pub fn observe_yield_index(&mut self, user: Address, validator: Address, index: u64) {
        self.user_yield_index.insert((user, validator), index);
    }

    pub fn push_withdraw_request(&mut self, request: WithdrawRequest) -> Result<(), CodecError> {
        log::debug!(
            "Ledger: queued withdrawal {} for {}",
            request.amount,
            request.account
        );
        self.withdraw_queue.push_back(request)
    }

    pub fn withdraw_queue_mut(&mut self) -> &mut WithdrawQueue {
        &mut self.withdraw_queue
    }
}

impl LedgerStore for SimulatedLedger {
    fn token(&self, token: TokenIndex) -> Option<&TokenInfo> {
        self.tokens.get(&token)
    }

    fn mark_px_override(&self, perp: PerpIndex) -> u64 {
        self.mark_px.get(&perp).copied().unwrap_or(0)
    }

    fn spot_px_override(&self, market: SpotMarketIndex) -> u64 {
        self.spot_px.get(&market).copied().unwrap_or(0)
    }

    fn account(&self, user: &Address) -> Option<&Account> {
        self.accounts.get(user)
    }

    fn vault_multiplier(&self, vault: &Address) -> u64 {
        self.vault_multiplier.get(vault).copied().unwrap_or(0)
    }

    fn user_vault_multiplier(&self, user: &Address, vault: &Address) -> u64 {
        self.user_vault_multiplier
            .get(&(*user, *vault))
            .copied()
            .unwrap_or(0)
    }

    fn staking_yield_index(&self) -> u64 {
        self.staking_yield_index
    }

    fn user_yield_index(&self, user: &Address, validator: &Address) -> u64 {
        self.user_yield_index
            .get(&(*user, *validator))
            .copied()
            .unwrap_or(0)
    }

    fn withdraw_queue(&self) -> &WithdrawQueue {
        &self.withdraw_queue
    }
}

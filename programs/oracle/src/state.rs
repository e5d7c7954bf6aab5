//! In-memory ground-truth oracle
//!
//! Answers from fixed tables and records every call in order, so tests can
//! check exactly when the view layer fell through to the oracle.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use ledgerview_common::{
    Address, PerpIndex, SpotBalance, SpotMarketIndex, TokenIndex, Withdrawable,
};

use crate::{ExternalOracle, OracleError};

/// One recorded oracle call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleCall {
    MarkPx(PerpIndex),
    SpotPx(SpotMarketIndex),
    SpotBalance(Address, TokenIndex),
    Withdrawable(Address),
    CoreUserExists(Address),
}

/// Oracle backed by in-memory tables
///
/// Absent entries read as zero / non-existent, matching how the real
/// ledger answers for accounts it has never seen.
#[derive(Debug, Default)]
pub struct FixtureOracle {
    mark_px: BTreeMap<PerpIndex, u64>,
    spot_px: BTreeMap<SpotMarketIndex, u64>,
    spot_balances: BTreeMap<(Address, TokenIndex), SpotBalance>,
    withdrawable: BTreeMap<Address, u64>,
    users: BTreeSet<Address>,
    /// When set, every call fails with this error
    failure: Option<OracleError>,
    calls: RefCell<Vec<OracleCall>>,
}

impl FixtureOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mark_px(&mut self, perp: PerpIndex, px: u64) {
        self.mark_px.insert(perp, px);
    }

    pub fn set_spot_px(&mut self, market: SpotMarketIndex, px: u64) {
        self.spot_px.insert(market, px);
    }

    pub fn set_spot_balance(&mut self, account: Address, token: TokenIndex, balance: SpotBalance) {
        self.spot_balances.insert((account, token), balance);
        self.users.insert(account);
    }

    pub fn set_withdrawable(&mut self, account: Address, amount: u64) {
        self.withdrawable.insert(account, amount);
        self.users.insert(account);
    }

    pub fn add_user(&mut self, account: Address) {
        self.users.insert(account);
    }

    /// Fail every subsequent call with `Offline`
    pub fn set_offline(&mut self, offline: bool) {
        self.failure = if offline { Some(OracleError::Offline) } else { None };
    }

    /// Fail every subsequent call with `err`
    pub fn fail_with(&mut self, err: OracleError) {
        self.failure = Some(err);
    }

    /// Calls recorded so far, oldest first
    pub fn calls(&self) -> Vec<OracleCall> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: OracleCall) -> Result<(), OracleError> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some(err) => {
                log::warn!("Oracle: failing {:?} with {}", call, err);
                Err(err.clone())
            }
            None => Ok(()),
        }
    }
}

impl ExternalOracle for FixtureOracle {
    fn mark_px(&self, perp: PerpIndex) -> Result<u64, OracleError> {
        self.record(OracleCall::MarkPx(perp))?;
        Ok(self.mark_px.get(&perp).copied().unwrap_or(0))
    }

    fn spot_px(&self, market: SpotMarketIndex) -> Result<u64, OracleError> {
        self.record(OracleCall::SpotPx(market))?;
        Ok(self.spot_px.get(&market).copied().unwrap_or(0))
    }

    fn spot_balance(
        &self,
        account: &Address,
        token: TokenIndex,
    ) -> Result<SpotBalance, OracleError> {
        self.record(OracleCall::SpotBalance(*account, token))?;
        Ok(self
            .spot_balances
            .get(&(*account, token))
            .copied()
            .unwrap_or_default())
    }

    fn withdrawable(&self, account: &Address) -> Result<Withdrawable, OracleError> {
        self.record(OracleCall::Withdrawable(*account))?;
        Ok(Withdrawable {
            withdrawable: self.withdrawable.get(account).copied().unwrap_or(0),
        })
    }

    fn core_user_exists(&self, account: &Address) -> Result<bool, OracleError> {
        self.record(OracleCall::CoreUserExists(*account))?;
        Ok(self.users.contains(account))
    }
}

//! Spot balance and withdrawable lookups
//!
//! Simulated balances only track totals, so the oracle-only fields (hold,
//! entry notional) are zero on the local path.

use ledgerview_common::{Address, SpotBalance, TokenIndex, Withdrawable};
use ledgerview_ledger::LedgerStore;
use ledgerview_oracle::ExternalOracle;

use crate::error::ViewError;
use crate::resolver::resolve;
use crate::view::CoreView;

impl<'a, L, O> CoreView<'a, L, O>
where
    L: LedgerStore,
    O: ExternalOracle,
{
    /// Initialized balances are served locally
    pub fn read_spot_balance(
        &self,
        account: &Address,
        token: TokenIndex,
    ) -> Result<SpotBalance, ViewError> {
        let local = self
            .account(account)
            .and_then(|acc| acc.spot_total(token))
            .map(SpotBalance::from_total);

        resolve("spot_balance", local, || {
            self.oracle.spot_balance(account, token)
        })
    }

    /// Activated accounts report their perp balance
    pub fn read_withdrawable(&self, account: &Address) -> Result<Withdrawable, ViewError> {
        let local = self
            .account(account)
            .filter(|acc| acc.activated)
            .map(|acc| Withdrawable {
                withdrawable: acc.perp_balance,
            });

        resolve("withdrawable", local, || self.oracle.withdrawable(account))
    }
}

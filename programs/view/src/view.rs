//! Query surface and existence checks

use ledgerview_common::{Address, TokenIndex, TokenInfo};
use ledgerview_ledger::{Account, LedgerStore};
use ledgerview_oracle::ExternalOracle;

use crate::error::ViewError;
use crate::margin::MarginAggregator;
use crate::resolver::resolve;

/// Read-only queries over a ledger snapshot
///
/// Borrows the store, the oracle and the margin aggregator for the
/// duration of the queries; build a new view after mutating the ledger.
pub struct CoreView<'a, L, O> {
    pub(crate) ledger: &'a L,
    pub(crate) oracle: &'a O,
    pub(crate) margin: &'a (dyn MarginAggregator + 'a),
}

impl<'a, L, O> CoreView<'a, L, O>
where
    L: LedgerStore,
    O: ExternalOracle,
{
    pub fn new(ledger: &'a L, oracle: &'a O, margin: &'a (dyn MarginAggregator + 'a)) -> Self {
        Self {
            ledger,
            oracle,
            margin,
        }
    }

    pub fn ledger(&self) -> &'a L {
        self.ledger
    }

    pub(crate) fn account(&self, user: &Address) -> Option<&'a Account> {
        self.ledger.account(user)
    }

    /// True iff the token has a non-empty name
    pub fn token_exists(&self, token: TokenIndex) -> bool {
        self.ledger.token(token).is_some_and(TokenInfo::exists)
    }

    /// Token metadata (default record if unknown)
    pub fn read_token_info(&self, token: TokenIndex) -> TokenInfo {
        self.ledger.token(token).cloned().unwrap_or_default()
    }

    /// Activated accounts exist locally; everyone else is asked of the oracle
    pub fn core_user_exists(&self, account: &Address) -> Result<bool, ViewError> {
        let local = self
            .account(account)
            .filter(|acc| acc.activated)
            .map(|_| true);

        resolve("core_user_exists", local, || {
            self.oracle.core_user_exists(account)
        })
    }
}

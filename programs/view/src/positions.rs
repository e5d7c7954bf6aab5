//! Position lookup and margin summary passthrough

use ledgerview_common::{AccountMarginSummary, Address, PerpIndex, Position};
use ledgerview_ledger::LedgerStore;
use ledgerview_oracle::ExternalOracle;

use crate::error::ViewError;
use crate::view::CoreView;

impl<'a, L, O> CoreView<'a, L, O>
where
    L: LedgerStore,
    O: ExternalOracle,
{
    /// Stored position (default if the user has none on this perp)
    pub fn read_position(&self, user: &Address, perp: PerpIndex) -> Position {
        self.account(user)
            .map(|acc| acc.position(perp))
            .unwrap_or_default()
    }

    /// Delegates to the margin aggregator unchanged
    pub fn read_account_margin_summary(
        &self,
        perp_dex_index: u32,
        user: &Address,
    ) -> Result<AccountMarginSummary, ViewError> {
        self.margin.account_margin_summary(perp_dex_index, user)
    }
}

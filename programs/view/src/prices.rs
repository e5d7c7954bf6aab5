//! Price lookups
//!
//! A stored price of zero means "no override"; the oracle answers instead.

use ledgerview_common::{PerpIndex, SpotMarketIndex};
use ledgerview_ledger::LedgerStore;
use ledgerview_oracle::ExternalOracle;

use crate::error::ViewError;
use crate::resolver::resolve;
use crate::view::CoreView;

fn nonzero(px: u64) -> Option<u64> {
    (px != 0).then_some(px)
}

/// Mark price with oracle fallback (shared with the margin aggregator)
pub fn resolve_mark_px<L, O>(ledger: &L, oracle: &O, perp: PerpIndex) -> Result<u64, ViewError>
where
    L: LedgerStore + ?Sized,
    O: ExternalOracle + ?Sized,
{
    resolve("mark_px", nonzero(ledger.mark_px_override(perp)), || {
        oracle.mark_px(perp)
    })
}

/// Spot price with oracle fallback
pub fn resolve_spot_px<L, O>(
    ledger: &L,
    oracle: &O,
    market: SpotMarketIndex,
) -> Result<u64, ViewError>
where
    L: LedgerStore + ?Sized,
    O: ExternalOracle + ?Sized,
{
    resolve("spot_px", nonzero(ledger.spot_px_override(market)), || {
        oracle.spot_px(market)
    })
}

impl<'a, L, O> CoreView<'a, L, O>
where
    L: LedgerStore,
    O: ExternalOracle,
{
    pub fn read_mark_px(&self, perp: PerpIndex) -> Result<u64, ViewError> {
        resolve_mark_px(self.ledger, self.oracle, perp)
    }

    pub fn read_spot_px(&self, market: SpotMarketIndex) -> Result<u64, ViewError> {
        resolve_spot_px(self.ledger, self.oracle, market)
    }
}

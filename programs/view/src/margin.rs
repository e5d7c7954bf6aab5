//! Cross-margin account summaries
//!
//! The view does not aggregate margin itself; it forwards to whatever
//! [`MarginAggregator`] it was built with. [`MarkToMarketMargin`] is the
//! supplied implementation that marks stored positions to the resolved
//! mark price.

use ledgerview_common::{AccountMarginSummary, Address, Position};
use ledgerview_ledger::LedgerStore;
use ledgerview_oracle::ExternalOracle;
use rebase_model::math::{narrow_i64, narrow_unsigned};

use crate::error::ViewError;
use crate::prices::resolve_mark_px;

/// Only the default perp dex carries positions in the simulated ledger
pub const DEFAULT_PERP_DEX: u32 = 0;

pub trait MarginAggregator {
    fn account_margin_summary(
        &self,
        perp_dex_index: u32,
        user: &Address,
    ) -> Result<AccountMarginSummary, ViewError>;
}

impl<T: MarginAggregator + ?Sized> MarginAggregator for &T {
    fn account_margin_summary(
        &self,
        perp_dex_index: u32,
        user: &Address,
    ) -> Result<AccountMarginSummary, ViewError> {
        (**self).account_margin_summary(perp_dex_index, user)
    }
}

/// Marks every open position to the current mark price
///
/// ```text
/// ntl          = |szi| * markPx
/// upnl         = szi * markPx - sign(szi) * entryNtl
/// accountValue = perpBalance + sum(upnl)
/// marginUsed   = sum(ntl / max(leverage, 1))
/// ntlPos       = sum(ntl)
/// rawUsd       = accountValue - sum(szi * markPx)
/// ```
///
/// Sums run in i128 and saturate; the narrowing step then reports the
/// overflow.
pub struct MarkToMarketMargin<'a, L: ?Sized, O: ?Sized> {
    ledger: &'a L,
    oracle: &'a O,
}

impl<'a, L, O> MarkToMarketMargin<'a, L, O>
where
    L: LedgerStore + ?Sized,
    O: ExternalOracle + ?Sized,
{
    pub fn new(ledger: &'a L, oracle: &'a O) -> Self {
        Self { ledger, oracle }
    }
}

#[derive(Default)]
struct Totals {
    upnl: i128,
    signed_ntl: i128,
    ntl: i128,
    margin_used: i128,
}

impl Totals {
    fn add(&mut self, position: &Position, mark_px: u64) {
        let szi = i128::from(position.szi);
        let signed_ntl = szi * i128::from(mark_px);
        let ntl = signed_ntl.abs();
        let entry = i128::from(position.entry_ntl) * szi.signum();
        let leverage = i128::from(position.leverage.max(1));

        self.upnl = self.upnl.saturating_add(signed_ntl.saturating_sub(entry));
        self.signed_ntl = self.signed_ntl.saturating_add(signed_ntl);
        self.ntl = self.ntl.saturating_add(ntl);
        self.margin_used = self.margin_used.saturating_add(ntl / leverage);
    }
}

impl<'a, L, O> MarginAggregator for MarkToMarketMargin<'a, L, O>
where
    L: LedgerStore + ?Sized,
    O: ExternalOracle + ?Sized,
{
    fn account_margin_summary(
        &self,
        perp_dex_index: u32,
        user: &Address,
    ) -> Result<AccountMarginSummary, ViewError> {
        if perp_dex_index != DEFAULT_PERP_DEX {
            return Ok(AccountMarginSummary::default());
        }
        let Some(account) = self.ledger.account(user) else {
            return Ok(AccountMarginSummary::default());
        };

        let mut totals = Totals::default();
        for (perp, position) in &account.positions {
            let mark_px = resolve_mark_px(self.ledger, self.oracle, *perp)?;
            totals.add(position, mark_px);
        }

        let account_value = i128::from(account.perp_balance).saturating_add(totals.upnl);
        let raw_usd = account_value.saturating_sub(totals.signed_ntl);

        log::trace!(
            "Margin: {} positions for {}, account value {}",
            account.positions.len(),
            user,
            account_value
        );

        Ok(AccountMarginSummary {
            account_value: narrow_i64(account_value)?,
            margin_used: narrow_unsigned(totals.margin_used)?,
            ntl_pos: narrow_unsigned(totals.ntl)?,
            raw_usd: narrow_i64(raw_usd)?,
        })
    }
}

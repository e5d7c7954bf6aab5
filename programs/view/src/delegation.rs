//! Staking delegations and the delegator summary
//!
//! Stored delegation amounts are rebased by the global staking yield index
//! over the index the user last observed for that validator. The
//! undelegated stake is reported as stored.
//!
//! Pending withdrawals are not indexed by owner: the summary walks the
//! whole withdrawal queue, so its cost is linear in the queue length.

use ledgerview_common::{Address, Delegation, DelegatorSummary};
use ledgerview_ledger::{LedgerStore, WithdrawRequest};
use ledgerview_oracle::ExternalOracle;
use rebase_model::math::checked_accumulate;
use rebase_model::rebase;

use crate::error::ViewError;
use crate::view::CoreView;

impl<'a, L, O> CoreView<'a, L, O>
where
    L: LedgerStore,
    O: ExternalOracle,
{
    /// Rebased delegation to one validator (zero amount if none)
    pub fn read_delegation(
        &self,
        user: &Address,
        validator: &Address,
    ) -> Result<Delegation, ViewError> {
        let stored = self
            .account(user)
            .map(|acc| acc.delegation(validator))
            .unwrap_or_default();

        let amount = rebase(
            stored.amount,
            self.ledger.staking_yield_index(),
            self.ledger.user_yield_index(user, validator),
        )?;

        Ok(Delegation {
            validator: *validator,
            amount,
            locked_until_timestamp: stored.locked_until_timestamp,
        })
    }

    /// All delegations, in the order validators were first delegated to
    pub fn read_delegations(&self, user: &Address) -> Result<Vec<Delegation>, ViewError> {
        let Some(account) = self.account(user) else {
            return Ok(Vec::new());
        };

        account
            .delegated_validators
            .iter()
            .map(|validator| self.read_delegation(user, validator))
            .collect()
    }

    pub fn read_delegator_summary(&self, user: &Address) -> Result<DelegatorSummary, ViewError> {
        let mut delegated = 0u64;
        for delegation in self.read_delegations(user)? {
            delegated = checked_accumulate(delegated, delegation.amount)?;
        }

        let undelegated = self.account(user).map(|acc| acc.staking).unwrap_or(0);
        let (total_pending_withdrawal, n_pending_withdrawals) = self.pending_withdrawals(user)?;

        Ok(DelegatorSummary {
            delegated,
            undelegated,
            total_pending_withdrawal,
            n_pending_withdrawals,
        })
    }

    /// (sum, count) of queued withdrawals owned by `user`
    fn pending_withdrawals(&self, user: &Address) -> Result<(u64, u64), ViewError> {
        let queue = self.ledger.withdraw_queue();
        let mut total = 0u64;
        let mut count = 0u64;

        for (index, record) in queue.iter().enumerate() {
            let request = WithdrawRequest::decode(record)
                .map_err(|source| ViewError::Codec { index, source })?;
            if request.account != *user {
                continue;
            }
            total = checked_accumulate(total, request.amount)?;
            count += 1;
        }

        log::debug!(
            "View: scanned {} withdraw records, {} owned by {}",
            queue.len(),
            count,
            user
        );
        Ok((total, count))
    }
}

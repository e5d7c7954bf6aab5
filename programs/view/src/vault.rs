//! Vault equity, rebased against the vault multiplier
//!
//! Stored equity is what the user held when they last observed the vault
//! multiplier. On read it is scaled by `current / last_observed`; both
//! default to the base unit, so an untouched vault returns the stored
//! equity unchanged. There is no oracle fallback for vault equity.

use ledgerview_common::{Address, UserVaultEquity};
use ledgerview_ledger::LedgerStore;
use ledgerview_oracle::ExternalOracle;
use rebase_model::{multiplier_or_base, rebase};

use crate::error::ViewError;
use crate::view::CoreView;

impl<'a, L, O> CoreView<'a, L, O>
where
    L: LedgerStore,
    O: ExternalOracle,
{
    /// (vault multiplier, user's last observed multiplier), unset read as base
    pub fn vault_multipliers(&self, user: &Address, vault: &Address) -> (u64, u64) {
        (
            multiplier_or_base(self.ledger.vault_multiplier(vault)),
            multiplier_or_base(self.ledger.user_vault_multiplier(user, vault)),
        )
    }

    pub fn read_user_vault_equity(
        &self,
        user: &Address,
        vault: &Address,
    ) -> Result<UserVaultEquity, ViewError> {
        let mut equity = self
            .account(user)
            .map(|acc| acc.vault_equity(vault))
            .unwrap_or_default();

        // Always rebases: the multiplier is never zero after defaulting
        let (current, last) = self.vault_multipliers(user, vault);
        equity.equity = rebase(equity.equity, current, last)?;

        Ok(equity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::margin::tests::ZeroMargin;
    use ledgerview_ledger::SimulatedLedger;
    use ledgerview_oracle::FixtureOracle;
    use rebase_model::{ArithmeticError, BASE_UNIT};

    const USER: Address = Address::from_low_u8(1);
    const VAULT: Address = Address::from_low_u8(0x42);

    fn ledger_with_equity(equity: u64) -> SimulatedLedger {
        let mut ledger = SimulatedLedger::new();
        ledger.set_vault_equity(
            USER,
            VAULT,
            UserVaultEquity { equity, locked_until_timestamp: 1_700_000_000 },
        );
        ledger
    }

    #[test]
    fn test_doubled_multiplier_doubles_equity() {
        let mut ledger = ledger_with_equity(1000);
        ledger.set_vault_multiplier(VAULT, 2 * BASE_UNIT);
        ledger.observe_vault_multiplier(USER, VAULT, BASE_UNIT);
        let oracle = FixtureOracle::new();
        let view = CoreView::new(&ledger, &oracle, &ZeroMargin);

        let eq = view.read_user_vault_equity(&USER, &VAULT).unwrap();
        assert_eq!(eq.equity, 2000);
        assert_eq!(eq.locked_until_timestamp, 1_700_000_000);
        assert_eq!(oracle.call_count(), 0);
    }

    #[test]
    fn test_unset_multipliers_pass_through() {
        let ledger = ledger_with_equity(1234);
        let oracle = FixtureOracle::new();
        let view = CoreView::new(&ledger, &oracle, &ZeroMargin);

        assert_eq!(view.vault_multipliers(&USER, &VAULT), (BASE_UNIT, BASE_UNIT));
        assert_eq!(view.read_user_vault_equity(&USER, &VAULT).unwrap().equity, 1234);
    }

    #[test]
    fn test_user_observed_latest_multiplier() {
        let mut ledger = ledger_with_equity(500);
        ledger.set_vault_multiplier(VAULT, 3 * BASE_UNIT);
        ledger.observe_vault_multiplier(USER, VAULT, 3 * BASE_UNIT);
        let oracle = FixtureOracle::new();
        let view = CoreView::new(&ledger, &oracle, &ZeroMargin);

        assert_eq!(view.read_user_vault_equity(&USER, &VAULT).unwrap().equity, 500);
    }

    #[test]
    fn test_missing_snapshot_is_default() {
        let ledger = SimulatedLedger::new();
        let oracle = FixtureOracle::new();
        let view = CoreView::new(&ledger, &oracle, &ZeroMargin);

        assert_eq!(
            view.read_user_vault_equity(&USER, &VAULT).unwrap(),
            UserVaultEquity::default()
        );
    }

    #[test]
    fn test_overflow_is_fatal() {
        let mut ledger = ledger_with_equity(u64::MAX);
        ledger.set_vault_multiplier(VAULT, 2 * BASE_UNIT);
        let oracle = FixtureOracle::new();
        let view = CoreView::new(&ledger, &oracle, &ZeroMargin);

        let err = view.read_user_vault_equity(&USER, &VAULT).unwrap_err();
        assert!(matches!(
            err,
            ViewError::Arithmetic(ArithmeticError::RebaseOverflow { .. })
        ));
    }
}

//! Vault equity rebasing and the overflow boundary

use ledgerview_integration_tests::addr::{ALICE, VAULT};
use ledgerview_integration_tests::common::UserVaultEquity;
use ledgerview_integration_tests::view::ViewError;
use ledgerview_integration_tests::Fixture;
use rebase_model::{ArithmeticError, BASE_UNIT};

fn fixture_with_equity(equity: u64) -> Fixture {
    let mut fx = Fixture::new();
    fx.ledger.set_vault_equity(
        ALICE,
        VAULT,
        UserVaultEquity { equity, locked_until_timestamp: 1_700_000_000 },
    );
    fx
}

#[test]
fn test_vault_equity_scenario() {
    let mut fx = fixture_with_equity(1000);
    fx.ledger.set_vault_multiplier(VAULT, 2 * BASE_UNIT);
    fx.ledger.observe_vault_multiplier(ALICE, VAULT, BASE_UNIT);

    let eq = fx.with_view(|v| v.read_user_vault_equity(&ALICE, &VAULT)).unwrap();
    assert_eq!(eq, UserVaultEquity { equity: 2000, locked_until_timestamp: 1_700_000_000 });
}

#[test]
fn test_vault_loss_shrinks_equity() {
    let mut fx = fixture_with_equity(1000);
    fx.ledger.set_vault_multiplier(VAULT, BASE_UNIT / 2);

    let eq = fx.with_view(|v| v.read_user_vault_equity(&ALICE, &VAULT)).unwrap();
    assert_eq!(eq.equity, 500);
}

#[test]
fn test_wide_product_with_fitting_quotient_succeeds() {
    // equity * current exceeds u64, the quotient does not
    let mut fx = fixture_with_equity(u64::MAX / 2);
    fx.ledger.set_vault_multiplier(VAULT, 3 * BASE_UNIT);
    fx.ledger.observe_vault_multiplier(ALICE, VAULT, 4 * BASE_UNIT);

    let eq = fx.with_view(|v| v.read_user_vault_equity(&ALICE, &VAULT)).unwrap();
    assert_eq!(eq.equity, ((u64::MAX / 2) as u128 * 3 / 4) as u64);
}

#[test]
fn test_quotient_overflow_fails() {
    let mut fx = fixture_with_equity(u64::MAX / 2 + 1);
    fx.ledger.set_vault_multiplier(VAULT, 2 * BASE_UNIT);

    let err = fx.with_view(|v| v.read_user_vault_equity(&ALICE, &VAULT)).unwrap_err();
    assert!(matches!(
        err,
        ViewError::Arithmetic(ArithmeticError::RebaseOverflow { last: BASE_UNIT, .. })
    ));
}

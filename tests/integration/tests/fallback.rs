//! Override-versus-oracle resolution through the public view

use ledgerview_integration_tests::addr::{ALICE, BOB};
use ledgerview_integration_tests::common::{SpotBalance, Withdrawable};
use ledgerview_integration_tests::view::ViewError;
use ledgerview_integration_tests::oracle::{OracleCall, OracleError};
use ledgerview_integration_tests::{init_logging, Fixture};
use proptest::prelude::*;

#[test]
fn test_price_follows_oracle_until_overridden() {
    init_logging();
    let mut fx = Fixture::new();
    fx.oracle.set_mark_px(0, 61_000);

    assert_eq!(fx.with_view(|v| v.read_mark_px(0)).unwrap(), 61_000);

    fx.ledger.set_mark_px(0, 50_000);
    fx.oracle.set_mark_px(0, 70_000);
    fx.oracle.clear_calls();

    assert_eq!(fx.with_view(|v| v.read_mark_px(0)).unwrap(), 50_000);
    assert_eq!(fx.oracle.call_count(), 0);
}

#[test]
fn test_spot_balance_override_is_sticky() {
    let mut fx = Fixture::new();
    fx.oracle.set_spot_balance(ALICE, 0, SpotBalance { total: 900, hold: 10, entry_ntl: 5 });

    let before = fx.with_view(|v| v.read_spot_balance(&ALICE, 0)).unwrap();
    assert_eq!(before, SpotBalance { total: 900, hold: 10, entry_ntl: 5 });

    fx.ledger.set_spot_balance(ALICE, 0, 300);
    fx.oracle.set_spot_balance(ALICE, 0, SpotBalance::from_total(1_000_000));

    let after = fx.with_view(|v| v.read_spot_balance(&ALICE, 0)).unwrap();
    assert_eq!(after, SpotBalance::from_total(300));
}

#[test]
fn test_zero_balance_override_still_wins() {
    let mut fx = Fixture::new();
    fx.ledger.set_spot_balance(ALICE, 2, 0);
    fx.oracle.set_spot_balance(ALICE, 2, SpotBalance::from_total(44));

    assert_eq!(fx.with_view(|v| v.read_spot_balance(&ALICE, 2)).unwrap().total, 0);
    assert_eq!(fx.oracle.call_count(), 0);
}

#[test]
fn test_activation_gates_existence_and_withdrawable() {
    let mut fx = Fixture::new();
    fx.ledger.set_perp_balance(ALICE, 250);
    fx.oracle.set_withdrawable(ALICE, 999);

    fx.with_view(|v| {
        assert!(v.core_user_exists(&ALICE).unwrap());
        assert_eq!(v.read_withdrawable(&ALICE).unwrap(), Withdrawable { withdrawable: 999 });
        assert!(!v.core_user_exists(&BOB).unwrap());
    });

    fx.ledger.activate(ALICE);
    fx.oracle.clear_calls();
    fx.with_view(|v| {
        assert!(v.core_user_exists(&ALICE).unwrap());
        assert_eq!(v.read_withdrawable(&ALICE).unwrap().withdrawable, 250);
    });
    assert_eq!(fx.oracle.call_count(), 0);
}

#[test]
fn test_oracle_failure_surfaces_only_on_fallback() {
    let mut fx = Fixture::new();
    fx.ledger.set_spot_px(1, 12);
    fx.oracle.fail_with(OracleError::Rejected {
        accessor: "spot_px",
        reason: "unknown market".to_string(),
    });

    fx.with_view(|v| {
        assert_eq!(v.read_spot_px(1).unwrap(), 12);
        assert!(matches!(
            v.read_spot_px(2),
            Err(ViewError::Oracle(OracleError::Rejected { accessor: "spot_px", .. }))
        ));
    });
    assert_eq!(fx.oracle.calls(), vec![OracleCall::SpotPx(2)]);
}

proptest! {
    #[test]
    fn fuzz_fallback_threshold(
        oracle_before in any::<u64>(),
        oracle_after in any::<u64>(),
        local in 1u64..,
    ) {
        let mut fx = Fixture::new();
        fx.oracle.set_spot_px(7, oracle_before);
        prop_assert_eq!(fx.with_view(|v| v.read_spot_px(7)).unwrap(), oracle_before);

        fx.ledger.set_spot_px(7, local);
        fx.oracle.set_spot_px(7, oracle_after);
        prop_assert_eq!(fx.with_view(|v| v.read_spot_px(7)).unwrap(), local);
        prop_assert_eq!(fx.oracle.calls(), vec![OracleCall::SpotPx(7)]);
    }
}

//! Delegations and the delegator summary

use ledgerview_integration_tests::addr::{ALICE, BOB, VALIDATOR_A, VALIDATOR_B};
use ledgerview_integration_tests::common::DelegatorSummary;
use ledgerview_integration_tests::view::ViewError;
use ledgerview_integration_tests::{init_logging, Fixture};
use rebase_model::BASE_UNIT;

#[test]
fn test_delegator_summary_scenario() {
    init_logging();
    let mut fx = Fixture::new();
    fx.ledger.delegate(ALICE, VALIDATOR_A, 100, 0);
    fx.ledger.delegate(ALICE, VALIDATOR_B, 200, 0);
    fx.queue_withdrawals(&[(ALICE, 5), (BOB, 3), (ALICE, 7)]);

    let summary = fx.with_view(|v| v.read_delegator_summary(&ALICE)).unwrap();
    assert_eq!(
        summary,
        DelegatorSummary {
            delegated: 300,
            undelegated: 0,
            total_pending_withdrawal: 12,
            n_pending_withdrawals: 2,
        }
    );
    assert_eq!(fx.oracle.call_count(), 0);
}

#[test]
fn test_summary_tracks_settled_withdrawals() {
    let mut fx = Fixture::new();
    fx.queue_withdrawals(&[(ALICE, 5), (BOB, 3), (ALICE, 7)]);

    fx.ledger.withdraw_queue_mut().pop_front();
    let summary = fx.with_view(|v| v.read_delegator_summary(&ALICE)).unwrap();
    assert_eq!(summary.total_pending_withdrawal, 7);
    assert_eq!(summary.n_pending_withdrawals, 1);
}

#[test]
fn test_yield_index_growth_rebases_delegations() {
    let mut fx = Fixture::new();
    fx.ledger.set_staking_yield_index(BASE_UNIT);
    fx.ledger.delegate(ALICE, VALIDATOR_A, 1_000, 0);
    fx.ledger.observe_yield_index(ALICE, VALIDATOR_A, BASE_UNIT);
    fx.ledger.delegate(ALICE, VALIDATOR_B, 1_000, 0);
    fx.ledger.set_staking(ALICE, 500);

    // Yield accrues 25% after the delegations were recorded
    fx.ledger.set_staking_yield_index(BASE_UNIT + BASE_UNIT / 4);

    fx.with_view(|v| {
        let delegations = v.read_delegations(&ALICE).unwrap();
        assert_eq!(delegations.len(), 2);
        assert_eq!(delegations[0].validator, VALIDATOR_A);
        assert_eq!(delegations[0].amount, 1_250);
        // never observed an index: last reads as base
        assert_eq!(delegations[1].amount, 1_250);

        let summary = v.read_delegator_summary(&ALICE).unwrap();
        assert_eq!(summary.delegated, 2_500);
        assert_eq!(summary.undelegated, 500);
    });
}

#[test]
fn test_corrupt_queue_record_is_reported_with_index() {
    let mut fx = Fixture::new();
    fx.queue_withdrawals(&[(BOB, 1), (BOB, 2)]);
    fx.ledger.withdraw_queue_mut().push_record(vec![0xff; 40]);

    let err = fx.with_view(|v| v.read_delegator_summary(&ALICE)).unwrap_err();
    assert!(matches!(err, ViewError::Codec { index: 2, .. }));
}

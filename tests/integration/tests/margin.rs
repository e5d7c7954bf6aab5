//! Positions and the mark-to-market margin summary

use ledgerview_integration_tests::addr::ALICE;
use ledgerview_integration_tests::common::{AccountMarginSummary, Position};
use ledgerview_integration_tests::Fixture;

#[test]
fn test_margin_summary_uses_resolved_mark_prices() {
    let mut fx = Fixture::new();
    fx.ledger.activate(ALICE);
    fx.ledger.set_perp_balance(ALICE, 10_000);
    fx.ledger.set_position(
        ALICE,
        0,
        Position { szi: 2, entry_ntl: 2_000, leverage: 10, ..Position::default() },
    );
    fx.ledger.set_mark_px(0, 1_500);
    fx.oracle.set_mark_px(0, 1);

    fx.with_view(|v| {
        assert_eq!(v.read_position(&ALICE, 0).szi, 2);
        assert_eq!(
            v.read_account_margin_summary(0, &ALICE).unwrap(),
            AccountMarginSummary {
                account_value: 11_000,
                margin_used: 300,
                ntl_pos: 3_000,
                raw_usd: 8_000,
            }
        );
        assert_eq!(
            v.read_account_margin_summary(5, &ALICE).unwrap(),
            AccountMarginSummary::default()
        );
    });
}

#[test]
fn test_closed_position_reads_default() {
    let mut fx = Fixture::new();
    fx.ledger.set_position(ALICE, 1, Position { szi: -3, ..Position::default() });
    fx.ledger.set_position(ALICE, 1, Position::default());

    assert_eq!(fx.with_view(|v| v.read_position(&ALICE, 1)), Position::default());
}

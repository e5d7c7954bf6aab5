//! Scenario files
//!
//! A scenario describes the simulated ledger, the oracle's ground truth and
//! a list of queries to run against the view, all in one TOML document.

use anyhow::{Context, Result};
use ledgerview_common::{
    AccountMarginSummary, Address, Delegation, DelegatorSummary, PerpIndex, Position,
    SpotBalance, SpotMarketIndex, TokenIndex, TokenInfo, UserVaultEquity, Withdrawable,
};
use ledgerview_core::{CoreView, MarginAggregator, ViewError};
use ledgerview_ledger::{LedgerStore, SimulatedLedger, WithdrawRequest};
use ledgerview_oracle::{ExternalOracle, FixtureOracle};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub staking_yield_index: u64,
    #[serde(default)]
    pub tokens: Vec<TokenEntry>,
    #[serde(default)]
    pub mark_px: Vec<PerpPrice>,
    #[serde(default)]
    pub spot_px: Vec<SpotPrice>,
    #[serde(default)]
    pub vaults: Vec<VaultEntry>,
    #[serde(default)]
    pub accounts: Vec<AccountEntry>,
    /// Withdrawal queue, oldest first
    #[serde(default)]
    pub withdrawals: Vec<WithdrawalEntry>,
    #[serde(default)]
    pub oracle: OracleEntry,
    #[serde(default)]
    pub queries: Vec<Query>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenEntry {
    pub index: TokenIndex,
    #[serde(flatten)]
    pub info: TokenInfo,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PerpPrice {
    pub perp: PerpIndex,
    pub px: u64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SpotPrice {
    pub market: SpotMarketIndex,
    pub px: u64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct VaultEntry {
    pub address: Address,
    pub multiplier: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountEntry {
    pub address: Address,
    #[serde(default)]
    pub activated: bool,
    #[serde(default)]
    pub perp_balance: u64,
    #[serde(default)]
    pub staking: u64,
    #[serde(default)]
    pub spot: Vec<SpotEntry>,
    #[serde(default)]
    pub positions: Vec<PositionEntry>,
    #[serde(default)]
    pub delegations: Vec<DelegationEntry>,
    #[serde(default)]
    pub vault_equity: Vec<VaultEquityEntry>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SpotEntry {
    pub token: TokenIndex,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PositionEntry {
    pub perp: PerpIndex,
    pub szi: i64,
    #[serde(default)]
    pub entry_ntl: u64,
    #[serde(default)]
    pub isolated_raw_usd: i64,
    #[serde(default)]
    pub leverage: u32,
    #[serde(default)]
    pub is_isolated: bool,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DelegationEntry {
    pub validator: Address,
    pub amount: u64,
    #[serde(default)]
    pub locked_until_timestamp: u64,
    /// Yield index the delegator last observed (0 = never)
    #[serde(default)]
    pub observed_index: u64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct VaultEquityEntry {
    pub vault: Address,
    pub equity: u64,
    #[serde(default)]
    pub locked_until_timestamp: u64,
    /// Vault multiplier the user last observed (0 = never)
    #[serde(default)]
    pub observed_multiplier: u64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WithdrawalEntry {
    pub account: Address,
    pub amount: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OracleEntry {
    #[serde(default)]
    pub offline: bool,
    #[serde(default)]
    pub users: Vec<Address>,
    #[serde(default)]
    pub mark_px: Vec<PerpPrice>,
    #[serde(default)]
    pub spot_px: Vec<SpotPrice>,
    #[serde(default)]
    pub withdrawable: Vec<WithdrawalEntry>,
    #[serde(default)]
    pub spot_balances: Vec<OracleSpotBalance>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OracleSpotBalance {
    pub account: Address,
    pub token: TokenIndex,
    #[serde(flatten)]
    pub balance: SpotBalance,
}

/// One query against the view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Query {
    TokenExists { token: TokenIndex },
    TokenInfo { token: TokenIndex },
    MarkPx { perp: PerpIndex },
    SpotPx { market: SpotMarketIndex },
    SpotBalance { account: Address, token: TokenIndex },
    Withdrawable { account: Address },
    CoreUserExists { account: Address },
    UserVaultEquity { user: Address, vault: Address },
    Delegation { user: Address, validator: Address },
    Delegations { user: Address },
    DelegatorSummary { user: Address },
    Position { user: Address, perp: PerpIndex },
    AccountMarginSummary {
        #[serde(default)]
        perp_dex_index: u32,
        user: Address,
    },
}

/// Typed query result, serialized without a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Flag(bool),
    Price(u64),
    TokenInfo(TokenInfo),
    SpotBalance(SpotBalance),
    Withdrawable(Withdrawable),
    UserVaultEquity(UserVaultEquity),
    Delegation(Delegation),
    Delegations(Vec<Delegation>),
    DelegatorSummary(DelegatorSummary),
    Position(Position),
    AccountMarginSummary(AccountMarginSummary),
}

impl Query {
    pub fn execute<L, O>(&self, view: &CoreView<'_, L, O>) -> Result<Answer, ViewError>
    where
        L: LedgerStore,
        O: ExternalOracle,
    {
        let answer = match self {
            Query::TokenExists { token } => Answer::Flag(view.token_exists(*token)),
            Query::TokenInfo { token } => Answer::TokenInfo(view.read_token_info(*token)),
            Query::MarkPx { perp } => Answer::Price(view.read_mark_px(*perp)?),
            Query::SpotPx { market } => Answer::Price(view.read_spot_px(*market)?),
            Query::SpotBalance { account, token } => {
                Answer::SpotBalance(view.read_spot_balance(account, *token)?)
            }
            Query::Withdrawable { account } => {
                Answer::Withdrawable(view.read_withdrawable(account)?)
            }
            Query::CoreUserExists { account } => Answer::Flag(view.core_user_exists(account)?),
            Query::UserVaultEquity { user, vault } => {
                Answer::UserVaultEquity(view.read_user_vault_equity(user, vault)?)
            }
            Query::Delegation { user, validator } => {
                Answer::Delegation(view.read_delegation(user, validator)?)
            }
            Query::Delegations { user } => Answer::Delegations(view.read_delegations(user)?),
            Query::DelegatorSummary { user } => {
                Answer::DelegatorSummary(view.read_delegator_summary(user)?)
            }
            Query::Position { user, perp } => Answer::Position(view.read_position(user, *perp)),
            Query::AccountMarginSummary {
                perp_dex_index,
                user,
            } => Answer::AccountMarginSummary(
                view.read_account_margin_summary(*perp_dex_index, user)?,
            ),
        };
        Ok(answer)
    }
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .context(format!("Failed to read scenario: {}", path.display()))?;
        Self::parse(&text).context(format!("Failed to parse scenario: {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Populate a fresh ledger and oracle
    pub fn build(&self) -> Result<(SimulatedLedger, FixtureOracle)> {
        let mut ledger = SimulatedLedger::new();
        ledger.set_staking_yield_index(self.staking_yield_index);

        for token in &self.tokens {
            ledger.register_token(token.index, token.info.clone());
        }
        for p in &self.mark_px {
            ledger.set_mark_px(p.perp, p.px);
        }
        for p in &self.spot_px {
            ledger.set_spot_px(p.market, p.px);
        }
        for vault in &self.vaults {
            ledger.set_vault_multiplier(vault.address, vault.multiplier);
        }
        for account in &self.accounts {
            account.apply(&mut ledger);
        }
        for (i, w) in self.withdrawals.iter().enumerate() {
            ledger
                .push_withdraw_request(WithdrawRequest::new(w.account, w.amount))
                .context(format!("Failed to queue withdrawal {}", i))?;
        }

        let oracle = self.oracle.build();
        log::info!(
            "Scenario: {} accounts, {} queued withdrawals, {} queries",
            self.accounts.len(),
            self.withdrawals.len(),
            self.queries.len()
        );
        Ok((ledger, oracle))
    }
}

impl AccountEntry {
    fn apply(&self, ledger: &mut SimulatedLedger) {
        let user = self.address;
        if self.activated {
            ledger.activate(user);
        }
        ledger.set_perp_balance(user, self.perp_balance);
        ledger.set_staking(user, self.staking);

        for s in &self.spot {
            ledger.set_spot_balance(user, s.token, s.total);
        }
        for p in &self.positions {
            let position = Position {
                szi: p.szi,
                entry_ntl: p.entry_ntl,
                isolated_raw_usd: p.isolated_raw_usd,
                leverage: p.leverage,
                is_isolated: p.is_isolated,
            };
            ledger.set_position(user, p.perp, position);
        }
        for d in &self.delegations {
            ledger.delegate(user, d.validator, d.amount, d.locked_until_timestamp);
            if d.observed_index != 0 {
                ledger.observe_yield_index(user, d.validator, d.observed_index);
            }
        }
        for v in &self.vault_equity {
            ledger.set_vault_equity(
                user,
                v.vault,
                UserVaultEquity {
                    equity: v.equity,
                    locked_until_timestamp: v.locked_until_timestamp,
                },
            );
            if v.observed_multiplier != 0 {
                ledger.observe_vault_multiplier(user, v.vault, v.observed_multiplier);
            }
        }
    }
}

impl OracleEntry {
    fn build(&self) -> FixtureOracle {
        let mut oracle = FixtureOracle::new();
        for user in &self.users {
            oracle.add_user(*user);
        }
        for p in &self.mark_px {
            oracle.set_mark_px(p.perp, p.px);
        }
        for p in &self.spot_px {
            oracle.set_spot_px(p.market, p.px);
        }
        for w in &self.withdrawable {
            oracle.set_withdrawable(w.account, w.amount);
        }
        for b in &self.spot_balances {
            oracle.set_spot_balance(b.account, b.token, b.balance);
        }
        oracle.set_offline(self.offline);
        oracle
    }
}

/// Run every query in order, handing each outcome to `sink`
///
/// Stops early when `sink` returns an error.
pub fn run_queries<L, O, M, F>(
    ledger: &L,
    oracle: &O,
    margin: &M,
    queries: &[Query],
    mut sink: F,
) -> Result<()>
where
    L: LedgerStore,
    O: ExternalOracle,
    M: MarginAggregator,
    F: FnMut(&Query, Result<Answer, ViewError>) -> Result<()>,
{
    let view = CoreView::new(ledger, oracle, margin);
    for query in queries {
        sink(query, query.execute(&view))?;
    }
    Ok(())
}

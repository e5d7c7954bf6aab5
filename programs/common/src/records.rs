//! Typed result records returned by the view layer
//!
//! Every record has a zero default: looking up something that was never
//! written yields the default record, not an error.

use crate::types::Address;
use serde::{Deserialize, Serialize};

/// Token metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Display name (empty = token does not exist)
    pub name: String,
    /// Size decimals
    pub sz_decimals: u8,
    /// Wei decimals
    pub wei_decimals: u8,
}

impl TokenInfo {
    pub fn exists(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Spot balance for one (account, token)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotBalance {
    pub total: u64,
    /// Amount on hold for open orders (oracle only)
    pub hold: u64,
    /// Entry notional (oracle only)
    pub entry_ntl: u64,
}

impl SpotBalance {
    /// Simulated balances only track the total
    pub fn from_total(total: u64) -> Self {
        Self {
            total,
            hold: 0,
            entry_ntl: 0,
        }
    }
}

/// Perp balance available for withdrawal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawable {
    pub withdrawable: u64,
}

/// Open perp position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Signed size (+long, -short)
    pub szi: i64,
    /// Entry notional
    pub entry_ntl: u64,
    /// Isolated margin raw USD
    pub isolated_raw_usd: i64,
    pub leverage: u32,
    pub is_isolated: bool,
}

/// Stake delegated to one validator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegation {
    pub validator: Address,
    pub amount: u64,
    pub locked_until_timestamp: u64,
}

/// Staking overview for one delegator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatorSummary {
    /// Sum of rebased delegations
    pub delegated: u64,
    /// Staked but not delegated (not rebased)
    pub undelegated: u64,
    /// Sum of queued withdrawal amounts owned by the delegator
    pub total_pending_withdrawal: u64,
    /// Number of queued withdrawals owned by the delegator
    pub n_pending_withdrawals: u64,
}

/// User equity in a vault
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserVaultEquity {
    pub equity: u64,
    pub locked_until_timestamp: u64,
}

/// Cross-margin account summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMarginSummary {
    pub account_value: i64,
    pub margin_used: u64,
    pub ntl_pos: u64,
    pub raw_usd: i64,
}

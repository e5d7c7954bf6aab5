//! External oracle boundary
//!
//! Ground-truth source consulted by the view layer whenever no local
//! override has been recorded for a fact.
//!
//! ## Accessors
//!
//! - **mark_px**: perp mark price
//! - **spot_px**: spot market price
//! - **spot_balance**: (account, token) spot balance
//! - **withdrawable**: account perp withdrawable
//! - **core_user_exists**: whether the account exists on the real ledger
//!
//! Calls are synchronous and may read (or lazily materialize) external
//! state, so two identical calls are not guaranteed to agree if that state
//! moves in between.

pub mod error;
pub mod state;

pub use error::OracleError;
pub use state::{FixtureOracle, OracleCall};

use ledgerview_common::{
    Address, PerpIndex, SpotBalance, SpotMarketIndex, TokenIndex, Withdrawable,
};

/// Read interface of the real settlement oracle
pub trait ExternalOracle {
    fn mark_px(&self, perp: PerpIndex) -> Result<u64, OracleError>;

    fn spot_px(&self, market: SpotMarketIndex) -> Result<u64, OracleError>;

    fn spot_balance(&self, account: &Address, token: TokenIndex)
        -> Result<SpotBalance, OracleError>;

    fn withdrawable(&self, account: &Address) -> Result<Withdrawable, OracleError>;

    fn core_user_exists(&self, account: &Address) -> Result<bool, OracleError>;
}

impl<T: ExternalOracle + ?Sized> ExternalOracle for &T {
    fn mark_px(&self, perp: PerpIndex) -> Result<u64, OracleError> {
        (**self).mark_px(perp)
    }

    fn spot_px(&self, market: SpotMarketIndex) -> Result<u64, OracleError> {
        (**self).spot_px(market)
    }

    fn spot_balance(
        &self,
        account: &Address,
        token: TokenIndex,
    ) -> Result<SpotBalance, OracleError> {
        (**self).spot_balance(account, token)
    }

    fn withdrawable(&self, account: &Address) -> Result<Withdrawable, OracleError> {
        (**self).withdrawable(account)
    }

    fn core_user_exists(&self, account: &Address) -> Result<bool, OracleError> {
        (**self).core_user_exists(account)
    }
}

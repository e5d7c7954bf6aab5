//! Simulated ledger store
//!
//! Holds the mutable simulated state (accounts, tokens, price overrides,
//! multiplier tables, withdrawal queue). The view layer only reads it
//! through [`LedgerStore`]; the mutators on [`SimulatedLedger`] exist for
//! fixtures and tests.

pub mod account;
pub mod simulated;
pub mod store;
pub mod validator_set;
pub mod withdraw_queue;

pub use account::*;
pub use simulated::*;
pub use store::*;
pub use validator_set::*;
pub use withdraw_queue::*;

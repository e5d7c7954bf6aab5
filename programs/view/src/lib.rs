//! Read-side view over the simulated ledger
//!
//! Every query either serves a locally recorded override or falls through
//! to the external oracle, and rebases stored vault equity and delegations
//! against the current global multipliers on the way out.
//!
//! Nothing here mutates state or caches derived values between calls.

pub mod error;
pub mod resolver;
pub mod view;
pub mod prices;
pub mod balances;
pub mod vault;
pub mod delegation;
pub mod positions;
pub mod margin;

pub use error::ViewError;
pub use margin::{MarginAggregator, MarkToMarketMargin};
pub use resolver::{Fallback, LocalStore, OracleDelegate, Origin, ValueSource};
pub use view::CoreView;

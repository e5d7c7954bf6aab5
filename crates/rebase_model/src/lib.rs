//! Pure Rust rebasing model
//! No ledger dependencies, no unwrap/panic, all functions total

pub mod error;
pub mod math;
pub mod multiplier;
pub mod rebase;

// Re-export commonly used types
pub use error::*;
pub use multiplier::*;
pub use rebase::*;

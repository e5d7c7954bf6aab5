//! View-layer errors
//!
//! Missing entities are not errors; they read as default records.

use ledgerview_ledger::CodecError;
use ledgerview_oracle::OracleError;
use rebase_model::ArithmeticError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    /// Rebased or accumulated value does not fit its field
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    /// Oracle failure, propagated unchanged
    #[error("oracle: {0}")]
    Oracle(#[from] OracleError),

    /// Undecodable withdrawal queue entry
    #[error("withdraw queue entry {index}: {source}")]
    Codec {
        index: usize,
        #[source]
        source: CodecError,
    },
}

//! Oracle failures (propagated unchanged by the view layer)

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    #[error("oracle is offline")]
    Offline,

    #[error("oracle rejected {accessor}: {reason}")]
    Rejected {
        accessor: &'static str,
        reason: String,
    },
}

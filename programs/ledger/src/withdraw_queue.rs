//! FIFO queue of pending withdrawal requests
//!
//! Requests are stored as fixed-width encoded records:
//!
//! ```text
//! WithdrawRequest record (28 bytes):
//!   account: [u8; 20]   - owner address
//!   amount:  u64 (LE)   - requested amount
//! ```
//!
//! The queue is the only source of "pending withdrawals". It is not indexed
//! by owner; readers scan it front to back.

use std::collections::VecDeque;

use ledgerview_common::{Address, ADDRESS_LEN};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Encoded record size in bytes
pub const WITHDRAW_RECORD_LEN: usize = ADDRESS_LEN + 8;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("withdraw record must be {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("withdraw record codec: {0}")]
    Bincode(#[from] bincode::Error),
}

/// Pending withdrawal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WithdrawRequest {
    pub account: Address,
    pub amount: u64,
}

/// On-queue layout
#[derive(Serialize, Deserialize)]
struct WireRecord {
    account: [u8; ADDRESS_LEN],
    amount: u64,
}

impl WithdrawRequest {
    pub fn new(account: Address, amount: u64) -> Self {
        Self { account, amount }
    }

    /// Encode into a fixed-width record
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        let wire = WireRecord {
            account: self.account.0,
            amount: self.amount,
        };
        let bytes = bincode::serialize(&wire)?;
        check_len(bytes.len())?;
        Ok(bytes)
    }

    /// Decode a record produced by [`WithdrawRequest::encode`]
    pub fn decode(record: &[u8]) -> Result<Self, CodecError> {
        check_len(record.len())?;
        let wire: WireRecord = bincode::deserialize(record)?;
        Ok(Self {
            account: Address(wire.account),
            amount: wire.amount,
        })
    }
}

fn check_len(actual: usize) -> Result<(), CodecError> {
    if actual != WITHDRAW_RECORD_LEN {
        return Err(CodecError::Length {
            expected: WITHDRAW_RECORD_LEN,
            actual,
        });
    }
    Ok(())
}

/// Index-addressable FIFO of encoded withdrawal records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WithdrawQueue {
    records: VecDeque<Vec<u8>>,
}

impl WithdrawQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode and append a request
    pub fn push_back(&mut self, request: WithdrawRequest) -> Result<(), CodecError> {
        let record = request.encode()?;
        self.records.push_back(record);
        Ok(())
    }

    /// Append an already-encoded record as-is
    pub fn push_record(&mut self, record: Vec<u8>) {
        self.records.push_back(record);
    }

    /// Remove the oldest record (settlement side)
    pub fn pop_front(&mut self) -> Option<Vec<u8>> {
        self.records.pop_front()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Encoded record at `index` (0 = oldest)
    pub fn at(&self, index: usize) -> Option<&[u8]> {
        self.records.get(index).map(Vec::as_slice)
    }

    /// Encoded records, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.records.iter().map(Vec::as_slice)
    }
}

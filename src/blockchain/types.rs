//! Chain-specific types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ErrorKind;
use crate::rpc::RpcError;

/// The four values that fully identify a log for a proof request.
///
/// Built once per request, either from explicit user input or from a
/// receipt, and passed onward unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionCoordinates {
    pub chain_id: u64,
    pub block_number: u64,
    pub tx_index: u32,
    pub log_index: u32,
}

impl TransactionCoordinates {
    /// Create coordinates from already range-checked values.
    pub const fn new(chain_id: u64, block_number: u64, tx_index: u32, log_index: u32) -> Self {
        Self {
            chain_id,
            block_number,
            tx_index,
            log_index,
        }
    }

    /// Create coordinates from 64-bit values decoded from an RPC response,
    /// rejecting a transaction index that does not fit the wire type.
    pub fn from_receipt_values(
        chain_id: u64,
        block_number: u64,
        tx_index: u64,
        log_index: u32,
    ) -> BlockchainResult<Self> {
        let tx_index = u32::try_from(tx_index).map_err(|_| BlockchainError::FieldOutOfRange {
            field: "transactionIndex",
            value: tx_index,
        })?;
        Ok(Self::new(chain_id, block_number, tx_index, log_index))
    }
}

impl std::fmt::Display for TransactionCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "chain {} block {} tx {} log {}",
            self.chain_id, self.block_number, self.tx_index, self.log_index
        )
    }
}

/// Result of `eth_getTransactionByHash`. Numeric fields stay hex strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    pub hash: String,
    pub block_number: Option<String>,
    pub block_hash: Option<String>,
    pub from: String,
    pub to: Option<String>,
    pub chain_id: Option<String>,
}

/// Result of `eth_getTransactionReceipt`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    #[serde(default)]
    pub transaction_hash: String,
    pub transaction_index: String,
    pub block_number: String,
    #[serde(default)]
    pub block_hash: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

/// One log entry of a receipt. Its index is its position in `logs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogEntry {
    pub log_index: Option<String>,
    pub transaction_index: Option<String>,
    pub address: String,
    pub data: String,
    pub topics: Vec<String>,
}

impl LogEntry {
    /// The first topic, which conventionally carries the event signature hash.
    pub fn signature_topic(&self) -> Option<&str> {
        self.topics.first().map(String::as_str)
    }
}

/// Errors that can occur while resolving a transaction.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// The RPC call itself failed.
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// The node does not know the transaction.
    #[error("Transaction {0} not found")]
    TransactionNotFound(String),

    /// The node has no receipt for the transaction (unknown or still pending).
    #[error("Receipt for transaction {0} not found")]
    ReceiptNotFound(String),

    /// A hex quantity could not be parsed.
    #[error("Invalid hex value: {0}")]
    InvalidHex(String),

    /// A hex quantity does not fit in 64 bits.
    #[error("Hex value too large for u64: {0}")]
    Overflow(String),

    /// A decoded value does not fit the field it is destined for.
    #[error("{field} {value} is out of range")]
    FieldOutOfRange { field: &'static str, value: u64 },

    /// The receipt carries no logs at all.
    #[error("No logs found in transaction receipt")]
    NoLogs,

    /// The requested log index is beyond the receipt's logs.
    #[error("Log index {index} is out of range, transaction has {count} logs")]
    IndexOutOfRange { index: u32, count: usize },

    /// No log's first topic matches the event signature.
    #[error("No log found with event signature: {0}")]
    NoMatchingLog(String),

    /// The transaction object has no chain ID.
    #[error("Chain ID not found in transaction, please provide it with --chain-id")]
    MissingChainId,
}

impl BlockchainError {
    /// Taxonomy bucket for this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Rpc(e) => e.kind(),
            Self::InvalidHex(_) => ErrorKind::Decode,
            Self::Overflow(_) | Self::FieldOutOfRange { .. } | Self::IndexOutOfRange { .. } => {
                ErrorKind::Validation
            }
            Self::TransactionNotFound(_)
            | Self::ReceiptNotFound(_)
            | Self::NoLogs
            | Self::NoMatchingLog(_)
            | Self::MissingChainId => ErrorKind::Domain,
        }
    }
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

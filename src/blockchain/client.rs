//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to an Ethereum JSON-RPC endpoint
//! - Fetch transactions and receipts by hash
//! - Surface unknown transactions as distinct errors instead of empty values

use std::time::Duration;

use crate::blockchain::types::{BlockchainError, BlockchainResult, Transaction, TransactionReceipt};
use crate::config::BlockchainConfig;
use crate::rpc::JsonRpcTransport;

const GET_TRANSACTION_BY_HASH: &str = "eth_getTransactionByHash";
const GET_TRANSACTION_RECEIPT: &str = "eth_getTransactionReceipt";

/// Blockchain RPC client bound to a single endpoint.
#[derive(Debug, Clone)]
pub struct BlockchainClient {
    transport: JsonRpcTransport,
}

impl BlockchainClient {
    /// Create a new blockchain client.
    ///
    /// # Arguments
    /// * `rpc_url` - JSON-RPC endpoint of a node for the transaction's chain
    /// * `timeout` - Overall timeout applied to every call
    pub fn new(rpc_url: &str, timeout: Duration) -> BlockchainResult<Self> {
        let transport = JsonRpcTransport::new(rpc_url, timeout)?;
        tracing::debug!(rpc_url = %transport.endpoint(), "Blockchain client initialized");
        Ok(Self { transport })
    }

    /// Create a client for `rpc_url` using the configured timeout.
    pub fn from_config(rpc_url: &str, config: &BlockchainConfig) -> BlockchainResult<Self> {
        Self::new(rpc_url, Duration::from_secs(config.rpc_timeout_secs))
    }

    /// Fetch a transaction by hash.
    pub async fn fetch_transaction(&self, tx_hash: &str) -> BlockchainResult<Transaction> {
        let tx_hash = normalize_tx_hash(tx_hash);
        tracing::debug!(tx_hash = %tx_hash, "Fetching transaction");

        let tx: Option<Transaction> = self
            .transport
            .call(GET_TRANSACTION_BY_HASH, [tx_hash.as_str()])
            .await?;
        tx.ok_or(BlockchainError::TransactionNotFound(tx_hash))
    }

    /// Fetch the receipt of a mined transaction.
    pub async fn fetch_receipt(&self, tx_hash: &str) -> BlockchainResult<TransactionReceipt> {
        let tx_hash = normalize_tx_hash(tx_hash);
        tracing::debug!(tx_hash = %tx_hash, "Fetching transaction receipt");

        let receipt: Option<TransactionReceipt> = self
            .transport
            .call(GET_TRANSACTION_RECEIPT, [tx_hash.as_str()])
            .await?;
        receipt.ok_or(BlockchainError::ReceiptNotFound(tx_hash))
    }

    /// The endpoint this client talks to.
    pub fn rpc_url(&self) -> &str {
        self.transport.endpoint().as_str()
    }
}

/// Trim surrounding whitespace and make sure the hash carries a `0x` prefix.
pub fn normalize_tx_hash(tx_hash: &str) -> String {
    let tx_hash = tx_hash.trim();
    if tx_hash.starts_with("0x") {
        tx_hash.to_string()
    } else {
        format!("0x{}", tx_hash)
    }
}

//! Transaction hash → proof coordinates resolution.
//!
//! # Log selection
//! ```text
//! no logs in receipt          → NoLogs (always, whatever else was given)
//! explicit log index          → must be < logs.len(), else IndexOutOfRange
//! event signature             → first log whose topic[0] == keccak256(sig)
//! nothing                     → log 0
//! ```
//! The chain ID comes from the caller when given, otherwise from the
//! transaction object. It is never guessed.

use alloy::primitives::{keccak256, B256};

use crate::blockchain::client::BlockchainClient;
use crate::blockchain::hex::hex_to_u64;
use crate::blockchain::types::{
    BlockchainError, BlockchainResult, LogEntry, Transaction, TransactionCoordinates,
    TransactionReceipt,
};

/// Optional inputs that steer resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Explicit log index; takes precedence over `event_signature`.
    pub log_index: Option<u32>,
    /// Event signature such as `Transfer(address,address,uint256)`.
    pub event_signature: Option<String>,
    /// Chain ID to use instead of the one in the transaction object.
    pub chain_id: Option<u64>,
}

/// Turns a transaction hash into [`TransactionCoordinates`].
#[derive(Debug, Clone)]
pub struct BlockchainResolver {
    client: BlockchainClient,
}

impl BlockchainResolver {
    /// Create a resolver that queries `client`.
    pub fn new(client: BlockchainClient) -> Self {
        Self { client }
    }

    /// Fetch the transaction and its receipt, then pick the log.
    pub async fn resolve(
        &self,
        tx_hash: &str,
        options: &ResolveOptions,
    ) -> BlockchainResult<TransactionCoordinates> {
        tracing::debug!(rpc_url = %self.client.rpc_url(), tx_hash, "Resolving transaction");

        let tx = self.client.fetch_transaction(tx_hash).await?;
        let receipt = self.client.fetch_receipt(tx_hash).await?;

        let coordinates = coordinates_from(&tx, &receipt, options)?;
        tracing::debug!(
            chain_id = coordinates.chain_id,
            block_number = coordinates.block_number,
            tx_index = coordinates.tx_index,
            log_index = coordinates.log_index,
            "Transaction resolved"
        );
        Ok(coordinates)
    }

    /// The underlying RPC client.
    pub fn client(&self) -> &BlockchainClient {
        &self.client
    }
}

/// Keccak-256 of the event signature text, i.e. its canonical topic.
pub fn compute_event_topic_hash(signature: &str) -> B256 {
    keccak256(signature.trim().as_bytes())
}

/// Build coordinates from an already fetched transaction and receipt.
pub fn coordinates_from(
    tx: &Transaction,
    receipt: &TransactionReceipt,
    options: &ResolveOptions,
) -> BlockchainResult<TransactionCoordinates> {
    let log_index = select_log_index(
        &receipt.logs,
        options.log_index,
        options.event_signature.as_deref(),
    )?;

    let chain_id = match (options.chain_id, tx.chain_id.as_deref()) {
        (Some(chain_id), _) => chain_id,
        (None, Some(raw)) => hex_to_u64(raw)?,
        (None, None) => return Err(BlockchainError::MissingChainId),
    };

    let block_number = hex_to_u64(&receipt.block_number)?;
    let tx_index = hex_to_u64(&receipt.transaction_index)?;

    TransactionCoordinates::from_receipt_values(chain_id, block_number, tx_index, log_index)
}

/// Choose which log of a receipt the proof is for.
pub fn select_log_index(
    logs: &[LogEntry],
    log_index: Option<u32>,
    event_signature: Option<&str>,
) -> BlockchainResult<u32> {
    if logs.is_empty() {
        return Err(BlockchainError::NoLogs);
    }

    if let Some(index) = log_index {
        if index as usize >= logs.len() {
            return Err(BlockchainError::IndexOutOfRange {
                index,
                count: logs.len(),
            });
        }
        tracing::debug!(log_index = index, "Using specified log index");
        return Ok(index);
    }

    if let Some(signature) = event_signature {
        let topic = format!("{:#x}", compute_event_topic_hash(signature));
        tracing::debug!(signature = signature.trim(), %topic, "Searching logs for event signature");

        return logs
            .iter()
            .position(|log| {
                log.signature_topic()
                    .is_some_and(|first| first.eq_ignore_ascii_case(&topic))
            })
            .map(|index| index as u32)
            .ok_or_else(|| BlockchainError::NoMatchingLog(signature.to_string()));
    }

    tracing::debug!("No log index or event signature provided, using first log");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const TRANSFER: &str = "Transfer(address,address,uint256)";
    const TRANSFER_TOPIC: &str = "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef";
    const APPROVAL: &str = "Approval(address,address,uint256)";

    fn log_with_topic(topic: &str) -> LogEntry {
        LogEntry {
            topics: vec![topic.to_string()],
            ..Default::default()
        }
    }

    fn logs(count: usize) -> Vec<LogEntry> {
        (0..count).map(|_| log_with_topic("0x01")).collect()
    }

    fn receipt(log_entries: Vec<LogEntry>) -> TransactionReceipt {
        TransactionReceipt {
            transaction_index: "0x3".into(),
            block_number: "0x1036640".into(),
            logs: log_entries,
            ..Default::default()
        }
    }

    fn tx(chain_id: Option<&str>) -> Transaction {
        Transaction {
            hash: "0xabc".into(),
            chain_id: chain_id.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_topic_hash() {
        assert_eq!(format!("{:#x}", compute_event_topic_hash(TRANSFER)), TRANSFER_TOPIC);
        assert_eq!(
            compute_event_topic_hash(&format!("  {TRANSFER} ")),
            compute_event_topic_hash(TRANSFER)
        );
    }

    #[test]
    fn test_explicit_index_in_range() {
        for count in 1..5usize {
            for index in 0..6u32 {
                let result = select_log_index(&logs(count), Some(index), None);
                assert_eq!(result.is_ok(), (index as usize) < count, "index {index} of {count}");
            }
        }
    }

    #[test]
    fn test_index_out_of_range_cites_both_numbers() {
        let err = select_log_index(&logs(2), Some(5), None).unwrap_err();
        assert!(matches!(err, BlockchainError::IndexOutOfRange { index: 5, count: 2 }));
        let message = err.to_string();
        assert!(message.contains('5') && message.contains('2'));
    }

    #[test]
    fn test_no_logs_wins_over_everything() {
        assert!(matches!(select_log_index(&[], None, None), Err(BlockchainError::NoLogs)));
        assert!(matches!(select_log_index(&[], Some(0), None), Err(BlockchainError::NoLogs)));
        assert!(matches!(
            select_log_index(&[], None, Some(TRANSFER)),
            Err(BlockchainError::NoLogs)
        ));

        // Missing chain ID would also fail, but the empty receipt is reported.
        let err = coordinates_from(&tx(None), &receipt(Vec::new()), &ResolveOptions::default())
            .unwrap_err();
        assert!(matches!(err, BlockchainError::NoLogs));
    }

    #[test]
    fn test_signature_selects_second_of_three() {
        let approval_topic = format!("{:#x}", compute_event_topic_hash(APPROVAL));
        let entries = vec![
            log_with_topic(&approval_topic),
            log_with_topic(&TRANSFER_TOPIC.to_uppercase().replace("0X", "0x")),
            log_with_topic(TRANSFER_TOPIC),
        ];
        assert_eq!(select_log_index(&entries, None, Some(TRANSFER)).unwrap(), 1);
    }

    #[test]
    fn test_explicit_index_beats_signature() {
        let entries = vec![log_with_topic(TRANSFER_TOPIC), log_with_topic("0x02")];
        assert_eq!(select_log_index(&entries, Some(1), Some(TRANSFER)).unwrap(), 1);
    }

    #[test]
    fn test_no_matching_log() {
        let entries = vec![log_with_topic("0x01"), LogEntry::default()];
        let err = select_log_index(&entries, None, Some(TRANSFER)).unwrap_err();
        assert!(matches!(err, BlockchainError::NoMatchingLog(ref sig) if sig == TRANSFER));
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn test_defaults_to_first_log() {
        assert_eq!(select_log_index(&logs(3), None, None).unwrap(), 0);
    }

    #[test]
    fn test_coordinates_from_receipt() {
        let options = ResolveOptions::default();
        let coords = coordinates_from(&tx(Some("0x1")), &receipt(logs(3)), &options).unwrap();
        assert_eq!(coords, TransactionCoordinates::new(1, 17_000_000, 3, 0));
    }

    #[test]
    fn test_missing_chain_id() {
        let err = coordinates_from(&tx(None), &receipt(logs(1)), &ResolveOptions::default())
            .unwrap_err();
        assert!(matches!(err, BlockchainError::MissingChainId));
        assert!(err.to_string().contains("--chain-id"));
    }

    #[test]
    fn test_explicit_chain_id_overrides_transaction() {
        let options = ResolveOptions {
            chain_id: Some(10),
            ..Default::default()
        };
        let coords = coordinates_from(&tx(None), &receipt(logs(1)), &options).unwrap();
        assert_eq!(coords.chain_id, 10);

        let coords = coordinates_from(&tx(Some("0x1")), &receipt(logs(1)), &options).unwrap();
        assert_eq!(coords.chain_id, 10);
    }

    #[test]
    fn test_malformed_block_number() {
        let mut bad = receipt(logs(1));
        bad.block_number = "latest".into();
        let err = coordinates_from(&tx(Some("0x1")), &bad, &ResolveOptions::default()).unwrap_err();
        assert!(matches!(err, BlockchainError::InvalidHex(_)));
    }
}

mod common;

use std::time::Duration;

use common::{rpc_result, start_rpc_backend, RecordedRequest};
use proof_cli::blockchain::{
    BlockchainClient, BlockchainError, BlockchainResolver, ResolveOptions, TransactionCoordinates,
};
use proof_cli::ErrorKind;
use serde_json::{json, Value};

const TX_HASH: &str = "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";
const TRANSFER_TOPIC: &str = "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef";
const APPROVAL_TOPIC: &str = "0x8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925";

fn log(topic: &str) -> Value {
    json!({
        "address": "0x4200000000000000000000000000000000000006",
        "data": "0x",
        "topics": [topic],
    })
}

fn chain(tx: Value, logs: Vec<Value>) -> impl Fn(&RecordedRequest, usize) -> (u16, String) {
    move |request, _| match request.method() {
        "eth_getTransactionByHash" => rpc_result(tx.clone()),
        "eth_getTransactionReceipt" => rpc_result(json!({
            "transactionHash": TX_HASH,
            "transactionIndex": "0x5",
            "blockNumber": "0x1036640",
            "blockHash": "0x01",
            "status": "0x1",
            "logs": logs.clone(),
        })),
        _ => (404, String::new()),
    }
}

fn tx_with_chain_id() -> Value {
    json!({"hash": TX_HASH, "from": "0x01", "chainId": "0xaa37dc"})
}

fn resolver(url: &str) -> BlockchainResolver {
    BlockchainResolver::new(BlockchainClient::new(url, Duration::from_secs(5)).unwrap())
}

#[tokio::test]
async fn test_resolve_by_event_signature() {
    let backend = start_rpc_backend(chain(
        tx_with_chain_id(),
        vec![log(APPROVAL_TOPIC), log(TRANSFER_TOPIC), log(APPROVAL_TOPIC)],
    ))
    .await;

    let options = ResolveOptions {
        event_signature: Some("Transfer(address,address,uint256)".into()),
        ..Default::default()
    };
    let coordinates = resolver(&backend.url()).resolve(TX_HASH, &options).await.unwrap();

    assert_eq!(coordinates, TransactionCoordinates::new(11155420, 17_000_000, 5, 1));

    let requests = backend.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method(), "eth_getTransactionByHash");
    assert_eq!(requests[1].method(), "eth_getTransactionReceipt");
    assert_eq!(requests[0].params(), &json!([TX_HASH]));
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_resolve_defaults_to_first_log() {
    let logs = vec![log(TRANSFER_TOPIC), log(TRANSFER_TOPIC)];
    let backend = start_rpc_backend(chain(tx_with_chain_id(), logs)).await;
    let coordinates = resolver(&backend.url())
        .resolve(TX_HASH, &ResolveOptions::default())
        .await
        .unwrap();
    assert_eq!(coordinates.log_index, 0);
}

#[tokio::test]
async fn test_resolve_normalizes_hash_prefix() {
    let backend = start_rpc_backend(chain(tx_with_chain_id(), vec![log(TRANSFER_TOPIC)])).await;
    resolver(&backend.url())
        .resolve(TX_HASH.trim_start_matches("0x"), &ResolveOptions::default())
        .await
        .unwrap();

    for request in backend.requests() {
        assert_eq!(request.params(), &json!([TX_HASH]));
    }
}

#[tokio::test]
async fn test_resolve_missing_chain_id() {
    let tx = json!({"hash": TX_HASH, "from": "0x01"});
    let backend = start_rpc_backend(chain(tx.clone(), vec![log(TRANSFER_TOPIC)])).await;

    let err = resolver(&backend.url())
        .resolve(TX_HASH, &ResolveOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, BlockchainError::MissingChainId));
    assert_eq!(err.kind(), ErrorKind::Domain);

    let backend = start_rpc_backend(chain(tx, vec![log(TRANSFER_TOPIC)])).await;
    let options = ResolveOptions {
        chain_id: Some(10),
        ..Default::default()
    };
    let coordinates = resolver(&backend.url()).resolve(TX_HASH, &options).await.unwrap();
    assert_eq!(coordinates.chain_id, 10);
}

#[tokio::test]
async fn test_resolve_log_index_out_of_range() {
    let logs = vec![log(TRANSFER_TOPIC), log(TRANSFER_TOPIC)];
    let backend = start_rpc_backend(chain(tx_with_chain_id(), logs)).await;
    let options = ResolveOptions {
        log_index: Some(5),
        ..Default::default()
    };
    let err = resolver(&backend.url()).resolve(TX_HASH, &options).await.unwrap_err();

    assert!(matches!(err, BlockchainError::IndexOutOfRange { index: 5, count: 2 }));
    assert_eq!(
        err.to_string(),
        "Log index 5 is out of range, transaction has 2 logs"
    );
}

#[tokio::test]
async fn test_resolve_no_logs() {
    let backend = start_rpc_backend(chain(tx_with_chain_id(), Vec::new())).await;
    let options = ResolveOptions {
        log_index: Some(0),
        event_signature: Some("Transfer(address,address,uint256)".into()),
        chain_id: Some(1),
    };
    let err = resolver(&backend.url()).resolve(TX_HASH, &options).await.unwrap_err();
    assert!(matches!(err, BlockchainError::NoLogs));
}

#[tokio::test]
async fn test_resolve_transaction_not_found() {
    let backend = start_rpc_backend(chain(Value::Null, vec![log(TRANSFER_TOPIC)])).await;
    let err = resolver(&backend.url())
        .resolve(TX_HASH, &ResolveOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, BlockchainError::TransactionNotFound(_)));
    assert_eq!(backend.request_count(), 1);
}

//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! transaction hash + RPC URL
//!     → client.rs (eth_getTransactionByHash, eth_getTransactionReceipt)
//!     → hex.rs (decode hex quantities)
//!     → resolver.rs (pick the log, read the chain ID)
//!     → TransactionCoordinates
//! ```
//!
//! # Constraints
//! - Read-only: nothing here signs or sends transactions
//! - The chain ID is never guessed; it comes from the caller or the node
//! - All RPC calls share the configured timeout

pub mod client;
pub mod hex;
pub mod resolver;
pub mod types;

pub use client::BlockchainClient;
pub use hex::hex_to_u64;
pub use resolver::{compute_event_topic_hash, BlockchainResolver, ResolveOptions};
pub use types::{
    BlockchainError, BlockchainResult, LogEntry, Transaction, TransactionCoordinates,
    TransactionReceipt,
};

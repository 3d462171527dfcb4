//! Proof request CLI library

pub mod blockchain;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod observability;
pub mod output;
pub mod prover;
pub mod rpc;

pub use blockchain::{BlockchainResolver, TransactionCoordinates};
pub use config::schema::CliConfig;
pub use error::ErrorKind;
pub use lifecycle::Shutdown;
pub use prover::ProofServiceClient;

//! Subcommand implementations.
//!
//! Each command writes its user-facing output to the given writer so `main`
//! can pass stdout and tests can pass a buffer. Logs go through `tracing`.

pub mod request;
pub mod status;

use thiserror::Error;

use crate::blockchain::BlockchainError;
use crate::config::ConfigError;
use crate::error::ErrorKind;
use crate::prover::{JobId, ProverError};

/// Errors surfaced by a subcommand.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Blockchain(#[from] BlockchainError),

    #[error(transparent)]
    Prover(#[from] ProverError),

    #[error(
        "RPC URL is required when using --tx-hash. Set it using --rpc-url, the PROOF_RPC_URL environment variable, or blockchain.rpc_url in the config file"
    )]
    MissingRpcUrl,

    #[error(
        "chain-id, block-number, tx-index, and log-index are required without --tx-hash (missing: {0})"
    )]
    MissingCoordinates(String),

    #[error("Job {0} completed without a proof")]
    MissingProof(JobId),

    #[error("Cancelled while {0}")]
    Cancelled(&'static str),

    #[error("Failed to format proof as JSON: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CommandError {
    /// Taxonomy bucket for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(e) => e.kind(),
            Self::Blockchain(e) => e.kind(),
            Self::Prover(e) => e.kind(),
            Self::MissingRpcUrl | Self::MissingCoordinates(_) => ErrorKind::Validation,
            Self::MissingProof(_) | Self::Format(_) => ErrorKind::Decode,
            Self::Cancelled(_) => ErrorKind::Cancelled,
            Self::Output(_) => ErrorKind::Transport,
        }
    }
}

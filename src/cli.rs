//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(name = "proof-cli")]
#[command(about = "Request and track proofs for blockchain transaction logs", long_about = None)]
pub struct Cli {
    /// Config file (defaults to ~/.proof-cli.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// API key for the proving service
    #[arg(long, global = true, env = "PROOF_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Proving service URL
    #[arg(long, global = true, env = "PROOF_API_URL")]
    pub api_url: Option<String>,

    /// Print progress and pretty-printed proofs
    #[arg(long, global = true, env = "PROOF_DEBUG")]
    pub debug: bool,

    /// Maximum number of status checks while waiting
    #[arg(long, global = true, env = "PROOF_MAX_ATTEMPTS")]
    pub max_attempts: Option<u32>,

    /// Milliseconds between status checks
    #[arg(long, global = true, env = "PROOF_INTERVAL", value_name = "MS")]
    pub interval: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Request a new proof, by coordinates or by transaction hash
    Request(RequestArgs),
    /// Check the status of a proof job
    Status(StatusArgs),
    /// Print the version number
    Version,
}

#[derive(Debug, Clone, Default, Args)]
pub struct RequestArgs {
    /// Source chain ID (read from the transaction when --tx-hash is used)
    #[arg(long)]
    pub chain_id: Option<u64>,

    /// Source block number
    #[arg(long, conflicts_with = "tx_hash")]
    pub block_number: Option<u64>,

    /// Transaction index in the block
    #[arg(long, conflicts_with = "tx_hash")]
    pub tx_index: Option<u32>,

    /// Log index in the transaction
    #[arg(long)]
    pub log_index: Option<u32>,

    /// Transaction hash to resolve through the RPC endpoint
    #[arg(long)]
    pub tx_hash: Option<String>,

    /// Blockchain RPC URL, required with --tx-hash
    #[arg(long, env = "PROOF_RPC_URL")]
    pub rpc_url: Option<String>,

    /// Event signature that selects the log, e.g. 'Transfer(address,address,uint256)'
    #[arg(long, requires = "tx_hash")]
    pub event_signature: Option<String>,

    /// Wait for the proof to be generated
    #[arg(long)]
    pub wait: bool,

    /// Print the proof as raw JSON even in debug mode
    #[arg(long)]
    pub raw: bool,
}

#[derive(Debug, Clone, Args)]
pub struct StatusArgs {
    /// Job ID returned by `request`
    pub job_id: String,

    /// Print the proof as raw JSON even in debug mode
    #[arg(long)]
    pub raw: bool,
}

impl Cli {
    /// Flag and environment values that override the config file.
    pub fn to_overrides(&self) -> ConfigOverrides {
        let rpc_url = match &self.command {
            Command::Request(args) => args.rpc_url.clone(),
            _ => None,
        };
        ConfigOverrides {
            api_key: self.api_key.clone(),
            api_url: self.api_url.clone(),
            // An unset flag must not turn off `debug = true` from the file.
            debug: self.debug.then_some(true),
            max_attempts: self.max_attempts,
            interval_ms: self.interval,
            rpc_url,
        }
    }
}

//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the CLI.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Proving service endpoint used when none is configured.
pub const DEFAULT_API_URL: &str = "https://proof.testnet.polymer.zone";

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CliConfig {
    /// Proving service connection.
    pub api: ApiConfig,

    /// Polling behaviour for `--wait`.
    pub polling: PollingConfig,

    /// Blockchain RPC used to resolve transaction hashes.
    pub blockchain: BlockchainConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Proving service connection settings.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// Bearer token sent with every request.
    pub api_key: String,

    /// JSON-RPC endpoint of the proving service.
    pub api_url: String,

    /// Overall timeout per request in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 60,
        }
    }
}

// The API key must never end up in logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Polling configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PollingConfig {
    /// Maximum number of status queries.
    pub max_attempts: u32,

    /// Delay between status queries in milliseconds.
    pub interval_ms: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            max_attempts: 20,
            interval_ms: 3000,
        }
    }
}

/// Blockchain RPC configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct BlockchainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: Option<String>,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for BlockchainConfig {
    fn default() -> Self {
        Self {
            rpc_url: None,
            rpc_timeout_secs: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Verbose progress output and debug-level logs.
    pub debug: bool,

    /// Log level (trace, debug, info, warn, error) when `debug` is off.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            debug: false,
            log_level: "info".to_string(),
        }
    }
}

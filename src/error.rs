//! Error taxonomy shared by every subsystem.
//!
//! Each subsystem keeps its own error enum (`RpcError`, `BlockchainError`,
//! `ProverError`, ...) and maps every variant onto one [`ErrorKind`], so
//! callers can branch on the category without parsing messages.

use std::fmt;

/// Coarse classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Network or connection failure before a response arrived.
    Transport,
    /// Non-2xx HTTP status or a JSON-RPC error envelope.
    Protocol,
    /// Response body did not have the expected shape.
    Decode,
    /// Bad user-supplied input or configuration.
    Validation,
    /// The remote data rules the request out (no logs, failed job, ...).
    Domain,
    /// Polling ran out of attempts.
    Timeout,
    /// The operation was interrupted by a shutdown signal.
    Cancelled,
}

impl ErrorKind {
    /// Short lowercase label, used in logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Protocol => "protocol",
            Self::Decode => "decode",
            Self::Validation => "validation",
            Self::Domain => "domain",
            Self::Timeout => "timeout",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

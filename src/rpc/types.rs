//! JSON-RPC envelope types and transport errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error::ErrorKind;

/// Protocol version sent in every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// Request id. Calls are strictly sequential, so a constant is enough.
pub const REQUEST_ID: u64 = 1;

/// Outgoing request envelope.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest<P> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: P,
}

impl<P: Serialize> JsonRpcRequest<P> {
    /// Build a request for `method` with positional `params`.
    pub fn new(method: &'static str, params: P) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id: REQUEST_ID,
            method,
            params,
        }
    }
}

/// Incoming response envelope.
///
/// A missing `result` decodes as `null`, which callers may map to `Option`.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<JsonRpcErrorObject>,
}

/// Error envelope returned by the remote side.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct JsonRpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// Errors raised while performing a single JSON-RPC call.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The endpoint is not a valid URL.
    #[error("Invalid endpoint URL '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request parameters could not be serialized.
    #[error("Failed to encode {method} request: {source}")]
    Encode {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Connection, TLS, timeout or body-read failure.
    #[error("{method} request to {endpoint} failed: {source}")]
    Transport {
        method: &'static str,
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success HTTP status.
    #[error("{method} request to {endpoint} failed with status {status}: {body}")]
    HttpStatus {
        method: &'static str,
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The server answered with a JSON-RPC error envelope.
    #[error("{method} returned error {code}: {message}")]
    Remote {
        method: &'static str,
        code: i64,
        message: String,
    },

    /// The body (or its `result`) did not have the expected shape.
    #[error("Failed to decode {method} response: {source}")]
    Decode {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl RpcError {
    /// Taxonomy bucket for this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidEndpoint { .. } | Self::Client(_) => ErrorKind::Validation,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::HttpStatus { .. } | Self::Remote { .. } => ErrorKind::Protocol,
            Self::Encode { .. } | Self::Decode { .. } => ErrorKind::Decode,
        }
    }
}

/// Result type for JSON-RPC calls.
pub type RpcResult<T> = Result<T, RpcError>;

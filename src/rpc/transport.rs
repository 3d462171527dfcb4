//! HTTP transport for JSON-RPC calls.
//!
//! # Responsibilities
//! - POST one envelope per call with a fixed overall timeout
//! - Attach `Authorization: Bearer` when a token is configured
//! - Surface HTTP status, error envelopes and decode failures distinctly

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::rpc::types::{JsonRpcRequest, JsonRpcResponse, RpcError, RpcResult};

/// A JSON-RPC endpoint plus the HTTP client used to reach it.
#[derive(Clone)]
pub struct JsonRpcTransport {
    http: reqwest::Client,
    endpoint: Url,
    bearer_token: Option<String>,
}

impl JsonRpcTransport {
    /// Create a transport for `endpoint` whose calls time out after `timeout`.
    pub fn new(endpoint: &str, timeout: Duration) -> RpcResult<Self> {
        let endpoint = Url::parse(endpoint).map_err(|source| RpcError::InvalidEndpoint {
            url: endpoint.to_string(),
            source,
        })?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RpcError::Client)?;

        Ok(Self {
            http,
            endpoint,
            bearer_token: None,
        })
    }

    /// Send `Authorization: Bearer <token>` on every call.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// The endpoint this transport talks to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Perform one call and decode its `result` as `R`.
    pub async fn call<P, R>(&self, method: &'static str, params: P) -> RpcResult<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = JsonRpcRequest::new(method, params);
        let body = serde_json::to_vec(&request)
            .map_err(|source| RpcError::Encode { method, source })?;

        tracing::debug!(
            endpoint = %self.endpoint,
            method,
            body = %String::from_utf8_lossy(&body),
            "Sending JSON-RPC request"
        );

        let mut builder = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body);
        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|source| self.transport_error(method, source))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| self.transport_error(method, source))?;

        tracing::debug!(
            method,
            status = status.as_u16(),
            body = %String::from_utf8_lossy(&bytes),
            "Received JSON-RPC response"
        );

        if !status.is_success() {
            return Err(RpcError::HttpStatus {
                method,
                endpoint: self.endpoint.to_string(),
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        let envelope: JsonRpcResponse =
            serde_json::from_slice(&bytes).map_err(|source| RpcError::Decode { method, source })?;

        if let Some(error) = envelope.error {
            return Err(RpcError::Remote {
                method,
                code: error.code,
                message: error.message,
            });
        }

        serde_json::from_value(envelope.result)
            .map_err(|source| RpcError::Decode { method, source })
    }

    fn transport_error(&self, method: &'static str, source: reqwest::Error) -> RpcError {
        RpcError::Transport {
            method,
            endpoint: self.endpoint.to_string(),
            source,
        }
    }
}

impl std::fmt::Debug for JsonRpcTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonRpcTransport")
            .field("endpoint", &self.endpoint.as_str())
            .field("authenticated", &self.bearer_token.is_some())
            .finish()
    }
}

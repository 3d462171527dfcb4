//! JSON-RPC transport subsystem.
//!
//! # Data Flow
//! ```text
//! caller (blockchain client / proof service client)
//!     → transport.rs (envelope, bearer auth, POST with timeout)
//!     → HTTP status check → error envelope check
//!     → types.rs (decode `result` into the caller's type)
//! ```
//!
//! # Design Decisions
//! - One transport per endpoint; nothing is shared between clients
//! - Every call is a single POST; retries belong to the caller
//! - Bodies are logged at debug level, credentials never are

pub mod transport;
pub mod types;

pub use transport::JsonRpcTransport;
pub use types::{JsonRpcRequest, JsonRpcResponse, RpcError, RpcResult};

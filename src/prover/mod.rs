//! Proving service subsystem.
//!
//! # Data Flow
//! ```text
//! TransactionCoordinates
//!     → client.rs (log_requestProof) → JobId
//!     → client.rs (log_queryProof)   → ProofStatus
//!     → poll.rs (repeat on pending/processing until terminal)
//! ```
//!
//! # Design Decisions
//! - Job state lives remotely; nothing is cached between polls
//! - The only retry in the system is the bounded poll loop
//! - Ctrl-C cancels a wait through the lifecycle shutdown signal

pub mod client;
pub mod poll;
pub mod types;

pub use client::ProofServiceClient;
pub use poll::PollPolicy;
pub use types::{JobId, ProofState, ProofStatus, ProverError, ProverResult};

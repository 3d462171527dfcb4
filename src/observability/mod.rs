//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (debug: request/response bodies, info: job ids)
//!
//! Consumer:
//!     → logging.rs (fmt layer on stderr, filtered by RUST_LOG or config)
//! ```
//!
//! # Design Decisions
//! - Logs go to stderr so stdout carries only command output
//! - `--debug` raises the crate filter to debug

pub mod logging;

pub use logging::init_logging;

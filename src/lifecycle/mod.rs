//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     first SIGINT (Ctrl-C)  → Shutdown::trigger
//!     second SIGINT          → process exit (130)
//!
//! Shutdown (shutdown.rs):
//!     trigger → every network phase of a command (hash resolution, proof
//!               request, status query, poll sleep) is abandoned mid-flight
//! ```
//!
//! # Design Decisions
//! - A dropped coordinator never cancels; only an explicit trigger does
//! - The trigger is a sticky `watch` flag, so a phase that starts after it
//!   is never started

pub mod shutdown;
pub mod signals;

pub use shutdown::{cancelled, unless_cancelled, Shutdown};
pub use signals::spawn_ctrl_c_handler;

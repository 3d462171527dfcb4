//! OS signal handling.
//!
//! # Responsibilities
//! - Translate the first SIGINT (Ctrl-C) into a `Shutdown` trigger
//! - Exit immediately on a second SIGINT
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - The first Ctrl-C lets the running command stop at its current network
//!   call and report what it was doing

use tokio::task::JoinHandle;

use crate::lifecycle::Shutdown;

/// Exit status for a process stopped by SIGINT.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Spawn a task that triggers `shutdown` on the first Ctrl-C and exits the
/// process on the second.
pub fn spawn_ctrl_c_handler(shutdown: &Shutdown) -> JoinHandle<()> {
    let shutdown = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            return;
        }
        tracing::debug!("Interrupt received, cancelling");
        shutdown.trigger();

        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("Second interrupt received, exiting");
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
    })
}

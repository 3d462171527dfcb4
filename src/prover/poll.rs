//! Bounded polling of a proof job.
//!
//! # State Transitions
//! ```text
//! pending | processing  → sleep(interval), poll again
//! complete | completed  → return the status
//! failed                → ProofFailed (remote message)
//! anything else         → UnknownStatus
//! max_attempts reached  → PollingTimeout
//! shutdown signal       → Cancelled (interrupts a poll or a sleep)
//! ```
//! The interval is fixed: no backoff, no jitter, and no sleep after the
//! final or a terminal observation.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;

use crate::config::PollingConfig;
use crate::lifecycle::cancelled;
use crate::prover::types::{JobId, ProofState, ProofStatus, ProverError, ProverResult};

/// How many times to poll and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl PollPolicy {
    pub const fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
        }
    }
}

impl From<&PollingConfig> for PollPolicy {
    fn from(config: &PollingConfig) -> Self {
        Self::new(config.max_attempts, Duration::from_millis(config.interval_ms))
    }
}

/// Call `fetch` until the job reaches a terminal state or attempts run out.
pub async fn poll_until_terminal<F, Fut>(
    job_id: &JobId,
    policy: &PollPolicy,
    shutdown: &mut watch::Receiver<bool>,
    mut fetch: F,
) -> ProverResult<ProofStatus>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ProverResult<ProofStatus>>,
{
    for attempt in 1..=policy.max_attempts {
        tracing::debug!(
            job_id = %job_id,
            attempt,
            max_attempts = policy.max_attempts,
            "Polling proof status"
        );

        let status = tokio::select! {
            biased;
            _ = cancelled(shutdown) => {
                return Err(ProverError::Cancelled {
                    job_id: job_id.clone(),
                    attempts: attempt - 1,
                });
            }
            status = fetch() => status?,
        };

        match &status.state {
            ProofState::Completed => {
                tracing::debug!(job_id = %job_id, attempt, "Proof completed");
                return Ok(status);
            }
            ProofState::Failed => {
                return Err(ProverError::ProofFailed {
                    job_id: job_id.clone(),
                    message: status.error.unwrap_or_default(),
                });
            }
            ProofState::Unknown(raw) => {
                return Err(ProverError::UnknownStatus {
                    job_id: job_id.clone(),
                    status: raw.clone(),
                });
            }
            ProofState::Pending | ProofState::Processing => {
                tracing::debug!(
                    job_id = %job_id,
                    status = %status.status,
                    "Job not finished, waiting"
                );
            }
        }

        if attempt == policy.max_attempts {
            break;
        }

        tokio::select! {
            biased;
            _ = cancelled(shutdown) => {
                return Err(ProverError::Cancelled {
                    job_id: job_id.clone(),
                    attempts: attempt,
                });
            }
            _ = tokio::time::sleep(policy.interval) => {}
        }
    }

    Err(ProverError::PollingTimeout {
        job_id: job_id.clone(),
        attempts: policy.max_attempts,
    })
}

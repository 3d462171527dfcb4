//! Proving service client.
//!
//! # Responsibilities
//! - Submit proof requests for a log (`log_requestProof`)
//! - Query job status (`log_queryProof`)
//! - Poll a job to completion with a bounded, cancellable loop

use std::time::Duration;

use serde_json::Value;
use tokio::sync::watch;

use crate::blockchain::TransactionCoordinates;
use crate::config::ApiConfig;
use crate::prover::poll::{poll_until_terminal, PollPolicy};
use crate::prover::types::{JobId, ProofStatus, ProofStatusPayload, ProverResult};
use crate::rpc::JsonRpcTransport;

const REQUEST_PROOF: &str = "log_requestProof";
const QUERY_PROOF: &str = "log_queryProof";

/// Authenticated client for the proving service.
#[derive(Debug, Clone)]
pub struct ProofServiceClient {
    transport: JsonRpcTransport,
}

impl ProofServiceClient {
    /// Create a client from the API section of the configuration.
    pub fn new(config: &ApiConfig) -> ProverResult<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let transport = JsonRpcTransport::new(&config.api_url, timeout)?
            .with_bearer_token(config.api_key.clone());
        Ok(Self { transport })
    }

    /// Submit a proof request and return the job identifier.
    pub async fn request_proof(&self, coordinates: &TransactionCoordinates) -> ProverResult<JobId> {
        tracing::debug!(
            api_url = %self.transport.endpoint(),
            chain_id = coordinates.chain_id,
            block_number = coordinates.block_number,
            tx_index = coordinates.tx_index,
            log_index = coordinates.log_index,
            "Requesting proof"
        );

        let params = (
            coordinates.chain_id,
            coordinates.block_number,
            coordinates.tx_index,
            coordinates.log_index,
        );
        let result: Value = self.transport.call(REQUEST_PROOF, params).await?;
        let job_id = JobId::from_result(&result)?;

        tracing::info!(job_id = %job_id, "Proof request submitted");
        Ok(job_id)
    }

    /// Fetch the current status of a job.
    pub async fn get_status(&self, job_id: &JobId) -> ProverResult<ProofStatus> {
        let wire_id = job_id.to_wire()?;
        let payload: ProofStatusPayload = self.transport.call(QUERY_PROOF, [wire_id]).await?;
        Ok(ProofStatus::from(payload))
    }

    /// Poll until the proof is ready, the job fails, attempts run out, or
    /// `shutdown` fires.
    pub async fn wait_for_proof(
        &self,
        job_id: &JobId,
        policy: &PollPolicy,
        shutdown: &mut watch::Receiver<bool>,
    ) -> ProverResult<ProofStatus> {
        tracing::debug!(
            job_id = %job_id,
            max_attempts = policy.max_attempts,
            interval_ms = policy.interval.as_millis() as u64,
            "Waiting for proof"
        );
        poll_until_terminal(job_id, policy, shutdown, move || self.get_status(job_id)).await
    }
}

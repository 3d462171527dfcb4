//! Proof job types and error definitions.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::error::ErrorKind;
use crate::rpc::RpcError;

/// Identifier the proving service assigns to a proof request.
///
/// Kept in string form; converted back to a number for `log_queryProof`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(String);

impl JobId {
    /// Wrap a user- or service-supplied identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    /// Normalize a `log_requestProof` result, which may be a string or a number.
    pub fn from_result(result: &Value) -> ProverResult<Self> {
        match result {
            Value::String(id) if !id.trim().is_empty() => Ok(Self::new(id.as_str())),
            Value::Number(n) => {
                if let Some(id) = n.as_u64() {
                    Ok(Self(id.to_string()))
                } else if let Some(id) = n.as_i64() {
                    Ok(Self(id.to_string()))
                } else {
                    let id = n.as_f64().unwrap_or_default();
                    Ok(Self(format!("{:.0}", id)))
                }
            }
            other => Err(ProverError::UnexpectedJobId(other.to_string())),
        }
    }

    /// Numeric form sent on the wire.
    pub fn to_wire(&self) -> ProverResult<u64> {
        if let Ok(id) = self.0.parse::<u64>() {
            return Ok(id);
        }
        // "12345.0" style identifiers are numeric too.
        match self.0.parse::<f64>() {
            // `u64::MAX as f64` rounds up to 2^64, which does not fit.
            Ok(id)
                if id.is_finite() && id >= 0.0 && id.fract() == 0.0 && id < u64::MAX as f64 =>
            {
                Ok(id as u64)
            }
            _ => Err(ProverError::InvalidJobId(self.0.clone())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// State of a proof job as reported by one poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofState {
    Pending,
    Processing,
    Completed,
    Failed,
    /// Any status string the client does not know.
    Unknown(String),
}

impl ProofState {
    /// Map the wire status. `complete` and `completed` are both accepted.
    pub fn from_wire(status: &str) -> Self {
        match status {
            "pending" => Self::Pending,
            "processing" => Self::Processing,
            "complete" | "completed" => Self::Completed,
            "failed" => Self::Failed,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Whether polling should stop at this state.
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending | Self::Processing)
    }
}

/// `log_queryProof` result as sent by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct ProofStatusPayload {
    pub status: String,
    #[serde(default)]
    pub proof: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Snapshot of a job's state.
///
/// `proof` is only kept for completed jobs and `error` only for failed ones.
#[derive(Debug, Clone, PartialEq)]
pub struct ProofStatus {
    pub state: ProofState,
    /// Status string exactly as the service sent it.
    pub status: String,
    pub proof: Option<Value>,
    pub error: Option<String>,
}

impl From<ProofStatusPayload> for ProofStatus {
    fn from(payload: ProofStatusPayload) -> Self {
        let state = ProofState::from_wire(&payload.status);
        let proof = payload.proof.filter(|_| state == ProofState::Completed);
        let error = payload
            .error
            .filter(|message| state == ProofState::Failed && !message.is_empty());
        Self {
            state,
            status: payload.status,
            proof,
            error,
        }
    }
}

/// Errors that can occur while talking to the proving service.
#[derive(Debug, Error)]
pub enum ProverError {
    /// Transport failure, non-success status or error envelope.
    #[error(transparent)]
    Submission(#[from] RpcError),

    /// `log_requestProof` returned something that is not a job identifier.
    #[error("Unexpected job ID in response: {0}")]
    UnexpectedJobId(String),

    /// The job identifier is not numeric.
    #[error("Invalid job ID: {0}")]
    InvalidJobId(String),

    /// The service reported the job as failed.
    #[error("Proof generation failed for job {job_id}: {message}")]
    ProofFailed { job_id: JobId, message: String },

    /// The service reported a status this client does not understand.
    #[error("Unknown status '{status}' for job {job_id}")]
    UnknownStatus { job_id: JobId, status: String },

    /// Every attempt observed a non-terminal state.
    #[error("Max polling attempts ({attempts}) reached without completion for job {job_id}")]
    PollingTimeout { job_id: JobId, attempts: u32 },

    /// Waiting was interrupted by a shutdown signal.
    #[error("Waiting for job {job_id} cancelled after {attempts} attempts")]
    Cancelled { job_id: JobId, attempts: u32 },
}

impl ProverError {
    /// Taxonomy bucket for this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Submission(e) => e.kind(),
            Self::UnexpectedJobId(_) => ErrorKind::Decode,
            Self::InvalidJobId(_) => ErrorKind::Validation,
            Self::ProofFailed { .. } | Self::UnknownStatus { .. } => ErrorKind::Domain,
            Self::PollingTimeout { .. } => ErrorKind::Timeout,
            Self::Cancelled { .. } => ErrorKind::Cancelled,
        }
    }
}

/// Result type for proof service operations.
pub type ProverResult<T> = Result<T, ProverError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_id_normalization() {
        let from_float: Value = serde_json::from_str("12345.0").unwrap();
        assert_eq!(JobId::from_result(&from_float).unwrap().as_str(), "12345");
        assert_eq!(JobId::from_result(&json!("12345")).unwrap().as_str(), "12345");
        assert_eq!(JobId::from_result(&json!(12345)).unwrap().as_str(), "12345");
    }

    #[test]
    fn test_job_id_unexpected_shape() {
        for value in [json!(null), json!({"id": 1}), json!([1]), json!(true), json!("  ")] {
            let err = JobId::from_result(&value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Decode, "{value}");
        }
    }

    #[test]
    fn test_job_id_to_wire() {
        assert_eq!(JobId::new("12345").to_wire().unwrap(), 12345);
        assert_eq!(JobId::new(" 42 ").to_wire().unwrap(), 42);
        assert_eq!(JobId::new("12345.0").to_wire().unwrap(), 12345);

        for bad in ["abc", "", "-1", "1.5", "NaN"] {
            let err = JobId::new(bad).to_wire().unwrap_err();
            assert!(matches!(err, ProverError::InvalidJobId(_)), "{bad}");
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
    }

    #[test]
    fn test_job_id_to_wire_upper_bound() {
        assert_eq!(JobId::new("18446744073709551615").to_wire().unwrap(), u64::MAX);
        assert!(matches!(
            JobId::new("18446744073709551616.0").to_wire(),
            Err(ProverError::InvalidJobId(_))
        ));
        assert!(matches!(
            JobId::new("18446744073709551616").to_wire(),
            Err(ProverError::InvalidJobId(_))
        ));
    }

    #[test]
    fn test_state_synonyms() {
        assert_eq!(ProofState::from_wire("complete"), ProofState::Completed);
        assert_eq!(ProofState::from_wire("completed"), ProofState::Completed);
        assert_eq!(ProofState::from_wire("pending"), ProofState::Pending);
        assert_eq!(ProofState::from_wire("processing"), ProofState::Processing);
        assert_eq!(ProofState::from_wire("failed"), ProofState::Failed);
        assert_eq!(
            ProofState::from_wire("Completed"),
            ProofState::Unknown("Completed".to_string())
        );
        assert!(!ProofState::Pending.is_terminal());
        assert!(ProofState::Unknown("queued".into()).is_terminal());
    }

    #[test]
    fn test_status_keeps_proof_only_when_completed() {
        let payload: ProofStatusPayload =
            serde_json::from_value(json!({"status": "completed", "proof": "0xdead"})).unwrap();
        let status = ProofStatus::from(payload);
        assert_eq!(status.state, ProofState::Completed);
        assert_eq!(status.proof, Some(json!("0xdead")));

        let payload: ProofStatusPayload =
            serde_json::from_value(json!({"status": "pending", "proof": "0xdead", "error": "x"}))
                .unwrap();
        let status = ProofStatus::from(payload);
        assert!(status.proof.is_none());
        assert!(status.error.is_none());

        let payload: ProofStatusPayload =
            serde_json::from_value(json!({"status": "failed", "error": "out of gas"})).unwrap();
        let status = ProofStatus::from(payload);
        assert_eq!(status.error.as_deref(), Some("out of gas"));
    }

    #[test]
    fn test_error_display() {
        let err = ProverError::PollingTimeout {
            job_id: JobId::new("7"),
            attempts: 3,
        };
        assert!(err.to_string().contains("(3)"));
        assert_eq!(err.kind(), ErrorKind::Timeout);
    }
}

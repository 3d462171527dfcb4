//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Require an API key before any call to the proving service
//! - Validate value ranges (attempts, interval and timeouts > 0)
//! - Check that configured URLs parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: CliConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use url::Url;

use crate::config::schema::CliConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "API key is required. Set it using --api-key, the PROOF_API_KEY environment variable, or api.api_key in the config file"
    )]
    MissingApiKey,

    #[error("Invalid API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },

    #[error("Invalid RPC URL '{url}': {reason}")]
    InvalidRpcUrl { url: String, reason: String },

    #[error("max-attempts must be greater than 0")]
    ZeroMaxAttempts,

    #[error("interval must be greater than 0")]
    ZeroInterval,

    #[error("{0} must be greater than 0")]
    ZeroTimeout(&'static str),

    #[error("Unknown log level '{0}'")]
    InvalidLogLevel(String),
}

/// Check every semantic rule and report all violations at once.
pub fn validate_config(config: &CliConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.api.api_key.trim().is_empty() {
        errors.push(ValidationError::MissingApiKey);
    }
    if let Err(e) = Url::parse(&config.api.api_url) {
        errors.push(ValidationError::InvalidApiUrl {
            url: config.api.api_url.clone(),
            reason: e.to_string(),
        });
    }
    if let Some(rpc_url) = &config.blockchain.rpc_url {
        if let Err(e) = Url::parse(rpc_url) {
            errors.push(ValidationError::InvalidRpcUrl {
                url: rpc_url.clone(),
                reason: e.to_string(),
            });
        }
    }

    if config.polling.max_attempts == 0 {
        errors.push(ValidationError::ZeroMaxAttempts);
    }
    if config.polling.interval_ms == 0 {
        errors.push(ValidationError::ZeroInterval);
    }
    if config.api.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("api.timeout_secs"));
    }
    if config.blockchain.rpc_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("blockchain.rpc_timeout_secs"));
    }

    if config.observability.log_level.parse::<tracing::Level>().is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

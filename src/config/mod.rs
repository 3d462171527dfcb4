//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! ~/.proof-cli.toml or --config FILE (TOML)
//!     → loader.rs (parse & deserialize)
//!     → ConfigOverrides (flags, then PROOF_* environment variables)
//!     → validation.rs (semantic checks)
//!     → CliConfig (validated, immutable)
//!     → passed by reference to client constructors
//! ```
//!
//! # Design Decisions
//! - Config is loaded once at startup and never mutated afterwards
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{config_path, load_config, ConfigError, ConfigOverrides};
pub use schema::{ApiConfig, BlockchainConfig, CliConfig, ObservabilityConfig, PollingConfig};
pub use validation::{validate_config, ValidationError};

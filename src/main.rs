//! proof-cli
//!
//! Requests proofs for blockchain transaction logs from a proving service
//! and polls for completion.
//!
//! # Architecture Overview
//!
//! ```text
//!   flags / PROOF_* env / ~/.proof-cli.toml
//!                 │
//!                 ▼
//!          ┌─────────────┐
//!          │   config    │  load → override → validate
//!          └──────┬──────┘
//!                 │
//!                 ▼
//!          ┌─────────────┐      ┌──────────────┐      ┌──────────────┐
//!          │  commands   │─────▶│  blockchain  │─────▶│ chain RPC    │
//!          │ request /   │      │  resolver    │      │ (eth_*)      │
//!          │ status      │      └──────────────┘      └──────────────┘
//!          │             │      ┌──────────────┐      ┌──────────────┐
//!          │             │─────▶│   prover     │─────▶│ proving API  │
//!          └──────┬──────┘      │ client/poll  │      │ (log_*)      │
//!                 │             └──────────────┘      └──────────────┘
//!                 ▼
//!          stdout (job id, status, proof)     stderr (logs, errors)
//! ```

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use proof_cli::cli::{Cli, Command};
use proof_cli::commands::{self, CommandError};
use proof_cli::config::{self, load_config};
use proof_cli::lifecycle::{spawn_ctrl_c_handler, Shutdown};
use proof_cli::observability::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Command::Version = cli.command {
        println!("proof-cli v{}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(kind = %e.kind(), "Command failed");
            eprintln!("Error: {}", error_chain(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let path = config::config_path(cli.config.as_deref());
    let config = load_config(path.as_deref(), &cli.to_overrides())?;
    init_logging(&config.observability);

    tracing::debug!(
        api_url = %config.api.api_url,
        max_attempts = config.polling.max_attempts,
        interval_ms = config.polling.interval_ms,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    let _signals = spawn_ctrl_c_handler(&shutdown);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = match &cli.command {
        Command::Request(args) => {
            commands::request::run(args, &config, &shutdown, &mut out).await
        }
        Command::Status(args) => commands::status::run(args, &config, &shutdown, &mut out).await,
        Command::Version => Ok(()),
    };
    out.flush()?;
    result
}

/// `outer: inner: root`, skipping sources already contained in the message.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

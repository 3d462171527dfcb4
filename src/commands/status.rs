//! `status` subcommand.

use std::io::Write;

use crate::cli::StatusArgs;
use crate::commands::CommandError;
use crate::config::CliConfig;
use crate::lifecycle::{unless_cancelled, Shutdown};
use crate::output::{render_proof, OutputMode};
use crate::prover::{JobId, ProofServiceClient, ProofState, ProofStatus};

/// Query one job and print its status.
pub async fn run<W: Write>(
    args: &StatusArgs,
    config: &CliConfig,
    shutdown: &Shutdown,
    out: &mut W,
) -> Result<(), CommandError> {
    let debug = config.observability.debug;
    let mut cancel = shutdown.subscribe();
    let client = ProofServiceClient::new(&config.api)?;
    let job_id = JobId::new(args.job_id.as_str());

    if debug {
        writeln!(out, "Checking status for job ID: {}...", job_id)?;
    }
    let status = unless_cancelled(&mut cancel, client.get_status(&job_id))
        .await
        .ok_or(CommandError::Cancelled("querying job status"))??;
    write_status(&status, debug, args.raw, out)
}

/// Print a status snapshot.
///
/// Plain mode prints the status word and, for completed jobs, the raw proof
/// on the next line. Debug mode adds labels and the remote error text.
pub fn write_status<W: Write>(
    status: &ProofStatus,
    debug: bool,
    raw: bool,
    out: &mut W,
) -> Result<(), CommandError> {
    if debug {
        writeln!(out, "Status: {}", status.status)?;
        if let Some(error) = &status.error {
            writeln!(out, "Error: {}", error)?;
        }
    } else {
        writeln!(out, "{}", status.status)?;
    }

    if let (ProofState::Completed, Some(proof)) = (&status.state, &status.proof) {
        if debug {
            writeln!(out, "Proof is ready!")?;
        }
        writeln!(out, "{}", render_proof(proof, OutputMode::select(debug, raw))?)?;
    }
    Ok(())
}

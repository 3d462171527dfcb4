//! `request` subcommand.

use std::io::Write;

use crate::blockchain::{
    BlockchainClient, BlockchainResolver, ResolveOptions, TransactionCoordinates,
};
use crate::cli::RequestArgs;
use crate::commands::CommandError;
use crate::config::CliConfig;
use crate::lifecycle::{unless_cancelled, Shutdown};
use crate::output::{render_proof, OutputMode};
use crate::prover::{PollPolicy, ProofServiceClient};

/// Submit a proof request and optionally wait for the proof.
///
/// Without debug, stdout gets exactly one value: the job id, or the proof
/// when `--wait` is set. A shutdown trigger abandons whichever network call
/// is in flight; nothing is submitted after it.
pub async fn run<W: Write>(
    args: &RequestArgs,
    config: &CliConfig,
    shutdown: &Shutdown,
    out: &mut W,
) -> Result<(), CommandError> {
    let debug = config.observability.debug;
    let mut cancel = shutdown.subscribe();

    let coordinates = match &args.tx_hash {
        Some(tx_hash) => {
            let resolving = resolve_coordinates(tx_hash, args, config, out);
            unless_cancelled(&mut cancel, resolving)
                .await
                .ok_or(CommandError::Cancelled("resolving transaction"))??
        }
        None => direct_coordinates(args)?,
    };

    let client = ProofServiceClient::new(&config.api)?;
    if debug {
        writeln!(out, "Requesting proof...")?;
    }
    let job_id = unless_cancelled(&mut cancel, client.request_proof(&coordinates))
        .await
        .ok_or(CommandError::Cancelled("requesting proof"))??;

    if debug {
        writeln!(out, "Proof request submitted successfully")?;
        writeln!(out, "Job ID: {}", job_id)?;
    } else if !args.wait {
        writeln!(out, "{}", job_id)?;
    }

    if !args.wait {
        return Ok(());
    }

    let policy = PollPolicy::from(&config.polling);
    if debug {
        writeln!(
            out,
            "Waiting for proof to be generated (max {} attempts, {}ms interval)...",
            policy.max_attempts,
            policy.interval.as_millis()
        )?;
    }

    let status = client.wait_for_proof(&job_id, &policy, &mut cancel).await?;
    let proof = status.proof.ok_or(CommandError::MissingProof(job_id))?;
    if debug {
        writeln!(out, "Proof generated successfully!")?;
    }

    let rendered = render_proof(&proof, OutputMode::select(debug, args.raw))?;
    writeln!(out, "{}", rendered)?;
    Ok(())
}

/// Coordinates given directly on the command line; all four are required.
pub fn direct_coordinates(args: &RequestArgs) -> Result<TransactionCoordinates, CommandError> {
    match (args.chain_id, args.block_number, args.tx_index, args.log_index) {
        (Some(chain_id), Some(block_number), Some(tx_index), Some(log_index)) => Ok(
            TransactionCoordinates::new(chain_id, block_number, tx_index, log_index),
        ),
        _ => {
            let missing: Vec<&str> = [
                ("chain-id", args.chain_id.is_none()),
                ("block-number", args.block_number.is_none()),
                ("tx-index", args.tx_index.is_none()),
                ("log-index", args.log_index.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, absent)| absent.then_some(name))
            .collect();
            Err(CommandError::MissingCoordinates(missing.join(", ")))
        }
    }
}

async fn resolve_coordinates<W: Write>(
    tx_hash: &str,
    args: &RequestArgs,
    config: &CliConfig,
    out: &mut W,
) -> Result<TransactionCoordinates, CommandError> {
    let debug = config.observability.debug;
    let rpc_url = config
        .blockchain
        .rpc_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .ok_or(CommandError::MissingRpcUrl)?;

    if debug {
        writeln!(out, "Connecting to RPC endpoint: {}", rpc_url)?;
        writeln!(out, "Fetching transaction: {}", tx_hash)?;
        if let Some(signature) = &args.event_signature {
            writeln!(out, "Searching for log with event signature: {}", signature)?;
        }
    }

    let client = BlockchainClient::from_config(rpc_url, &config.blockchain)?;
    let resolver = BlockchainResolver::new(client);
    let options = ResolveOptions {
        log_index: args.log_index,
        event_signature: args.event_signature.clone(),
        chain_id: args.chain_id,
    };
    let coordinates = resolver.resolve(tx_hash, &options).await?;

    if debug {
        writeln!(out, "Transaction details:")?;
        writeln!(out, "  Chain ID: {}", coordinates.chain_id)?;
        writeln!(out, "  Block Number: {}", coordinates.block_number)?;
        writeln!(out, "  Transaction Index: {}", coordinates.tx_index)?;
        writeln!(out, "  Log Index: {}", coordinates.log_index)?;
    }
    Ok(coordinates)
}

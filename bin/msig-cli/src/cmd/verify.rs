//! `verify` subcommand.

use std::process::ExitCode;

use anyhow::Context;
use msig_config::{load_params, VerifierParams};
use msig_crypto::{
    predicate::MultisigPredicate,
    threshold_signature::{OutcomeKind, VerificationTrace, WitnessSet},
};

use tracing::{info, warn};

use crate::{
    args::{CmdContext, SubcVerify},
    util::{decode_witness_hex, init_logging, resolve_digest},
};

/// Exit code for a well-formed request that does not meet the threshold.
const REJECTED_EXIT_CODE: u8 = 1;

/// Executes the `verify` subcommand.
///
/// Prints `authorized` or `rejected`, optionally preceded by the trace, and
/// exits with 0 or 1 accordingly.
pub(crate) fn exec_verify(cmd: SubcVerify, ctx: &CmdContext) -> anyhow::Result<ExitCode> {
    let params = load_params(&cmd.params)
        .with_context(|| format!("failed to load params from {}", cmd.params.display()))?;
    init_logging(ctx, "verify", Some(&params.logging));

    let trace = run_verify(&params, &cmd)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&trace)?);
    } else {
        if cmd.trace {
            print!("{}", render_trace(&trace, params.signers.len()));
        }
        println!("{}", if trace.authorized { "authorized" } else { "rejected" });
    }

    Ok(if trace.authorized {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(REJECTED_EXIT_CODE)
    })
}

/// Checks the witnesses named on the command line against `params`.
fn run_verify(params: &VerifierParams, cmd: &SubcVerify) -> anyhow::Result<VerificationTrace> {
    let config = params.to_config()?;
    let digest = resolve_digest(cmd.digest.as_deref(), cmd.message.as_deref())?;

    let raw = cmd
        .witness
        .iter()
        .map(|w| decode_witness_hex(w))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let reported_count = cmd.count.unwrap_or(raw.len());
    let witnesses = WitnessSet::from_raw(reported_count, &raw);

    let trace = MultisigPredicate::new(config).trace(&digest, &witnesses);
    if trace.authorized {
        info!(%digest, matched = trace.matched_count(), "witnesses authorized");
    } else {
        warn!(
            %digest,
            matched = trace.matched_count(),
            required = trace.threshold,
            "witnesses rejected"
        );
    }

    Ok(trace)
}

/// Renders a trace as one line per witness followed by a summary.
fn render_trace(trace: &VerificationTrace, total_signers: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("digest {}\n", trace.digest));

    for outcome in &trace.outcomes {
        let line = match &outcome.kind {
            OutcomeKind::Absent => "absent".to_string(),
            OutcomeKind::Malformed { len } => format!("malformed ({len} bytes)"),
            OutcomeKind::RecoveryFailed => "recovery failed".to_string(),
            OutcomeKind::Unauthorized { recovered } => format!("unauthorized {recovered}"),
            OutcomeKind::Duplicate {
                recovered,
                signer_index,
            } => format!("duplicate of signer {signer_index} ({recovered})"),
            OutcomeKind::Matched {
                recovered,
                signer_index,
            } => format!("matched signer {signer_index} ({recovered})"),
        };
        out.push_str(&format!("witness {}: {line}\n", outcome.position));
    }

    out.push_str(&format!(
        "matched {}/{} required, unmatched signers {:?}\n",
        trace.matched_count(),
        trace.threshold,
        trace.unmatched_signers(total_signers)
    ));
    out
}

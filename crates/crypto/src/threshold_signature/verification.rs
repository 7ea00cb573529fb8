//! Threshold verification of witness sets.
//!
//! Matching is many-to-many: every present witness is recovered once and
//! compared against every signer slot that has not been satisfied yet. A slot
//! is consumed by the first witness that recovers to it, so one signature can
//! never count for two slots and duplicated witnesses count once. Witness
//! order does not matter.

use bitvec::bitvec;
use tracing::{debug, debug_span};

use super::{
    MessageDigest, OutcomeKind, RecoveryScheme, Secp256k1Recovery, ThresholdConfig,
    VerificationTrace, WitnessEntry, WitnessOutcome, WitnessSet,
};

/// Verifies a witness set against a threshold configuration.
///
/// Returns `true` iff at least `config.threshold()` distinct signer slots are
/// satisfied by some witness recovering to that slot's address. Malformed,
/// absent, unrecoverable and unauthorized witnesses are non-matching; this
/// function never fails.
pub fn verify_threshold_witnesses(
    config: &ThresholdConfig,
    digest: &MessageDigest,
    witnesses: &WitnessSet,
) -> bool {
    verify_threshold_witnesses_with(&Secp256k1Recovery, config, digest, witnesses)
}

/// Like [`verify_threshold_witnesses`] but with a caller-chosen recovery scheme.
pub fn verify_threshold_witnesses_with<S: RecoveryScheme + ?Sized>(
    scheme: &S,
    config: &ThresholdConfig,
    digest: &MessageDigest,
    witnesses: &WitnessSet,
) -> bool {
    let matched = match_witnesses(scheme, config, digest, witnesses, |_| {});
    matched >= config.threshold() as usize
}

/// Verifies a witness set and records the outcome of every position.
///
/// The decision is identical to [`verify_threshold_witnesses`].
pub fn verify_with_trace(
    config: &ThresholdConfig,
    digest: &MessageDigest,
    witnesses: &WitnessSet,
) -> VerificationTrace {
    verify_with_trace_using(&Secp256k1Recovery, config, digest, witnesses)
}

/// Like [`verify_with_trace`] but with a caller-chosen recovery scheme.
pub fn verify_with_trace_using<S: RecoveryScheme + ?Sized>(
    scheme: &S,
    config: &ThresholdConfig,
    digest: &MessageDigest,
    witnesses: &WitnessSet,
) -> VerificationTrace {
    let mut outcomes = Vec::with_capacity(witnesses.len());
    let matched = match_witnesses(scheme, config, digest, witnesses, |outcome| {
        outcomes.push(outcome)
    });

    let matched_signers: Vec<usize> = outcomes
        .iter()
        .filter_map(|o: &WitnessOutcome| o.kind.matched_index())
        .collect();
    debug_assert_eq!(matched_signers.len(), matched);

    VerificationTrace {
        digest: *digest,
        threshold: config.threshold(),
        outcomes,
        matched_signers,
        authorized: matched >= config.threshold() as usize,
    }
}

/// Counts the distinct signer slots satisfied by `witnesses`, reporting each
/// position's outcome to `on_outcome`.
fn match_witnesses<S, F>(
    scheme: &S,
    config: &ThresholdConfig,
    digest: &MessageDigest,
    witnesses: &WitnessSet,
    mut on_outcome: F,
) -> usize
where
    S: RecoveryScheme + ?Sized,
    F: FnMut(WitnessOutcome),
{
    let _span = debug_span!(
        "verify_threshold",
        %digest,
        signers = config.len(),
        threshold = config.threshold(),
        witnesses = witnesses.len()
    )
    .entered();

    let signers = config.signers();
    let mut consumed = bitvec![0; signers.len()];
    let mut matched = 0usize;

    for (position, entry) in witnesses.entries().iter().enumerate() {
        let kind = match entry {
            WitnessEntry::Absent => OutcomeKind::Absent,
            WitnessEntry::Malformed { len } => OutcomeKind::Malformed { len: *len },
            WitnessEntry::Present(witness) => match scheme.recover(digest, witness) {
                None => OutcomeKind::RecoveryFailed,
                Some(recovered) => {
                    // Placeholders are never candidates, whatever was recovered.
                    let slot = signers
                        .iter()
                        .enumerate()
                        .filter(|(_, signer)| !signer.is_placeholder())
                        .find(|(_, signer)| **signer == recovered)
                        .map(|(index, _)| index);

                    match slot {
                        None => OutcomeKind::Unauthorized { recovered },
                        Some(signer_index) if consumed[signer_index] => OutcomeKind::Duplicate {
                            recovered,
                            signer_index,
                        },
                        Some(signer_index) => {
                            consumed.set(signer_index, true);
                            matched += 1;
                            OutcomeKind::Matched {
                                recovered,
                                signer_index,
                            }
                        }
                    }
                }
            },
        };

        debug!(%position, ?kind, "witness checked");
        on_outcome(WitnessOutcome { position, kind });
    }

    debug!(
        %matched,
        required = config.threshold(),
        "threshold verification finished"
    );
    matched
}

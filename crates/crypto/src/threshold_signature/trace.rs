//! Diagnostic trace of a verification run.
//!
//! The trace is for offline debugging only. Authorization decisions must be
//! taken from [`VerificationTrace::authorized`] (or the plain boolean
//! verifier), never from individual outcomes.

use serde::{Deserialize, Serialize};

use super::MessageDigest;
use crate::keys::SignerAddress;

/// What happened to one witness position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum OutcomeKind {
    /// The host reported the position but supplied no data.
    Absent,
    /// The supplied data had the wrong length.
    Malformed { len: usize },
    /// The witness did not yield a public key for the digest.
    RecoveryFailed,
    /// The recovered signer is not in the signer set.
    Unauthorized { recovered: SignerAddress },
    /// The recovered signer's slot was already satisfied by an earlier witness.
    Duplicate {
        recovered: SignerAddress,
        signer_index: usize,
    },
    /// The recovered signer satisfied a previously unmatched slot.
    Matched {
        recovered: SignerAddress,
        signer_index: usize,
    },
}

impl OutcomeKind {
    /// Returns the recovered address, if recovery succeeded.
    pub fn recovered(&self) -> Option<&SignerAddress> {
        match self {
            OutcomeKind::Unauthorized { recovered }
            | OutcomeKind::Duplicate { recovered, .. }
            | OutcomeKind::Matched { recovered, .. } => Some(recovered),
            _ => None,
        }
    }

    /// Returns the signer slot consumed by this witness, if any.
    pub fn matched_index(&self) -> Option<usize> {
        match self {
            OutcomeKind::Matched { signer_index, .. } => Some(*signer_index),
            _ => None,
        }
    }
}

/// The outcome for one witness position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessOutcome {
    /// Position in the witness list.
    pub position: usize,
    /// What happened.
    #[serde(flatten)]
    pub kind: OutcomeKind,
}

/// Full record of a verification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationTrace {
    /// Digest the witnesses were checked against.
    pub digest: MessageDigest,
    /// Threshold in force.
    pub threshold: u8,
    /// Per-position outcomes in witness order.
    pub outcomes: Vec<WitnessOutcome>,
    /// Signer slots that were satisfied, in the order they were matched.
    pub matched_signers: Vec<usize>,
    /// The authorization decision.
    pub authorized: bool,
}

impl VerificationTrace {
    /// Number of distinct signer slots satisfied.
    pub fn matched_count(&self) -> usize {
        self.matched_signers.len()
    }

    /// Signer slots left unsatisfied, given the number of slots in the config.
    pub fn unmatched_signers(&self, total_signers: usize) -> Vec<usize> {
        (0..total_signers)
            .filter(|i| !self.matched_signers.contains(i))
            .collect()
    }
}

//! Threshold (M-of-N) authorization over recoverable ECDSA witnesses.
//!
//! A [`ThresholdConfig`] fixes the ordered signer slots and the number of
//! distinct signers required. [`verify_threshold_witnesses`] recovers a signer
//! from each witness against a [`MessageDigest`] and counts how many slots
//! are satisfied. [`verify_with_trace`] does the same and records what
//! happened to every witness position.

mod config;
mod digest;
mod errors;
mod recovery;
mod trace;
mod verification;
mod witness;

pub use config::{ThresholdConfig, MAX_SIGNERS};
pub use digest::{MessageDigest, DIGEST_LEN};
pub use errors::ThresholdSignatureError;
pub use recovery::{RecoveryScheme, Secp256k1Recovery};
pub use trace::{OutcomeKind, VerificationTrace, WitnessOutcome};
pub use verification::{
    verify_threshold_witnesses, verify_threshold_witnesses_with, verify_with_trace,
    verify_with_trace_using,
};
pub use witness::{Witness, WitnessEntry, WitnessSet, WITNESS_LEN};

//! Spend predicate gated on threshold authorization.

use thiserror::Error;
use tracing::{info, warn};

use crate::threshold_signature::{
    verify_with_trace_using, MessageDigest, RecoveryScheme, Secp256k1Recovery, ThresholdConfig,
    VerificationTrace, WitnessSet,
};

/// Rejection reasons of a [`MultisigPredicate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorizationError {
    /// Fewer distinct signers than required were found among the witnesses.
    #[error("insufficient signatures: matched {matched}, required {required}")]
    InsufficientSignatures { matched: usize, required: usize },
}

/// A predicate that permits a spend when the transaction digest carries
/// enough signer witnesses.
///
/// The configuration is fixed at construction and never changes; the
/// predicate holds no other state, so one instance can evaluate any number
/// of transactions concurrently.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MultisigPredicate<S = Secp256k1Recovery> {
    config: ThresholdConfig,
    scheme: S,
}

impl MultisigPredicate {
    /// Creates a predicate over secp256k1 witnesses.
    pub fn new(config: ThresholdConfig) -> Self {
        Self::with_scheme(config, Secp256k1Recovery)
    }
}

impl<S: RecoveryScheme> MultisigPredicate<S> {
    /// Creates a predicate with a custom recovery scheme.
    pub fn with_scheme(config: ThresholdConfig, scheme: S) -> Self {
        Self { config, scheme }
    }

    /// Borrow the threshold configuration.
    pub fn config(&self) -> &ThresholdConfig {
        &self.config
    }

    /// Returns whether the spend is permitted.
    pub fn evaluate(&self, digest: &MessageDigest, witnesses: &WitnessSet) -> bool {
        self.authorize(digest, witnesses).is_ok()
    }

    /// Checks the witnesses, rejecting the transaction if the threshold is
    /// not met.
    pub fn authorize(
        &self,
        digest: &MessageDigest,
        witnesses: &WitnessSet,
    ) -> Result<(), AuthorizationError> {
        let trace = self.trace(digest, witnesses);
        if trace.authorized {
            info!(%digest, matched = trace.matched_count(), "spend authorized");
            Ok(())
        } else {
            warn!(
                %digest,
                matched = trace.matched_count(),
                required = self.config.threshold(),
                "spend rejected"
            );
            Err(AuthorizationError::InsufficientSignatures {
                matched: trace.matched_count(),
                required: self.config.threshold() as usize,
            })
        }
    }

    /// Runs the verification and returns the diagnostic trace.
    pub fn trace(&self, digest: &MessageDigest, witnesses: &WitnessSet) -> VerificationTrace {
        verify_with_trace_using(&self.scheme, &self.config, digest, witnesses)
    }
}

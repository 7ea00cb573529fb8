//! Error types for threshold signature configuration.

use thiserror::Error;

use crate::keys::SignerAddress;

/// Errors that can occur while building a threshold configuration.
///
/// Verification itself never fails: malformed or unauthorized witnesses are
/// counted as non-matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThresholdSignatureError {
    /// The signer set is empty.
    #[error("signer set is empty")]
    EmptySignerSet,

    /// The signer set exceeds the supported size.
    #[error("too many signers: {count} (max: {max})")]
    TooManySigners { count: usize, max: usize },

    /// The threshold is zero.
    #[error("threshold must be at least 1")]
    ZeroThreshold,

    /// Invalid threshold value.
    #[error("invalid threshold: {threshold} exceeds total signers {total_signers}")]
    InvalidThreshold { threshold: u8, total_signers: usize },

    /// The same non-placeholder address is configured in two slots.
    #[error("duplicate signer {address} at indices {first} and {second}")]
    DuplicateSigner {
        address: SignerAddress,
        first: usize,
        second: usize,
    },
}

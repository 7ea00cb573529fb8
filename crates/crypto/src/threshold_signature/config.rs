//! Configuration types for threshold verification.

use std::{collections::HashMap, num::NonZero};

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::ThresholdSignatureError;
use crate::keys::SignerAddress;

/// Maximum number of signers allowed in a threshold configuration.
pub const MAX_SIGNERS: usize = 256;

/// Configuration for a threshold signature authority.
///
/// Defines who can sign (`signers`) and how many must sign (`threshold`).
/// The threshold is stored as `NonZero<u8>` so that a configuration can never
/// approve a request without signatures. A value of this type is immutable;
/// build a new one to change the signer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholdConfig", into = "RawThresholdConfig")]
pub struct ThresholdConfig {
    /// Ordered signer slots. Zero addresses are unconfigured placeholders.
    signers: Vec<SignerAddress>,
    /// Minimum number of distinct signers required (always >= 1).
    threshold: NonZero<u8>,
}

impl ThresholdConfig {
    /// Create a new threshold configuration.
    ///
    /// # Errors
    ///
    /// Returns `ThresholdSignatureError` if:
    /// - `EmptySignerSet`: no signers were given
    /// - `TooManySigners`: more than [`MAX_SIGNERS`] signers were given
    /// - `ZeroThreshold`: the threshold is zero
    /// - `InvalidThreshold`: the threshold exceeds the number of signers
    /// - `DuplicateSigner`: a non-placeholder address appears twice
    pub fn try_new(
        signers: Vec<SignerAddress>,
        threshold: u8,
    ) -> Result<Self, ThresholdSignatureError> {
        if signers.is_empty() {
            return Err(ThresholdSignatureError::EmptySignerSet);
        }

        if signers.len() > MAX_SIGNERS {
            return Err(ThresholdSignatureError::TooManySigners {
                count: signers.len(),
                max: MAX_SIGNERS,
            });
        }

        let threshold = NonZero::new(threshold).ok_or(ThresholdSignatureError::ZeroThreshold)?;

        if threshold.get() as usize > signers.len() {
            return Err(ThresholdSignatureError::InvalidThreshold {
                threshold: threshold.get(),
                total_signers: signers.len(),
            });
        }

        // Placeholders may repeat, real addresses may not.
        let mut seen = HashMap::with_capacity(signers.len());
        for (index, address) in signers.iter().enumerate() {
            if address.is_placeholder() {
                continue;
            }
            if let Some(first) = seen.insert(*address, index) {
                return Err(ThresholdSignatureError::DuplicateSigner {
                    address: *address,
                    first,
                    second: index,
                });
            }
        }

        let config = Self { signers, threshold };

        let configured = config.configured_signers();
        if configured < config.threshold() as usize {
            warn!(
                threshold = config.threshold(),
                %configured,
                placeholders = config.len() - configured,
                "threshold exceeds configured signers, no request can be authorized"
            );
        }

        Ok(config)
    }

    /// Get the signer slots.
    pub fn signers(&self) -> &[SignerAddress] {
        &self.signers
    }

    /// Get the threshold value.
    pub fn threshold(&self) -> u8 {
        self.threshold.get()
    }

    /// Get the number of signer slots.
    pub fn len(&self) -> usize {
        self.signers.len()
    }

    /// Check if there are no signer slots.
    ///
    /// Always false for a validated configuration.
    pub fn is_empty(&self) -> bool {
        self.signers.is_empty()
    }

    /// Number of slots holding a real (non-placeholder) address.
    pub fn configured_signers(&self) -> usize {
        self.signers.iter().filter(|s| !s.is_placeholder()).count()
    }

    /// Returns the slot index of `address`, ignoring placeholders.
    pub fn position_of(&self, address: &SignerAddress) -> Option<usize> {
        if address.is_placeholder() {
            return None;
        }
        self.signers.iter().position(|s| s == address)
    }
}

/// Unvalidated wire form of [`ThresholdConfig`].
#[derive(Serialize, Deserialize)]
struct RawThresholdConfig {
    signers: Vec<SignerAddress>,
    threshold: u8,
}

impl TryFrom<RawThresholdConfig> for ThresholdConfig {
    type Error = ThresholdSignatureError;

    fn try_from(raw: RawThresholdConfig) -> Result<Self, Self::Error> {
        ThresholdConfig::try_new(raw.signers, raw.threshold)
    }
}

impl From<ThresholdConfig> for RawThresholdConfig {
    fn from(config: ThresholdConfig) -> Self {
        Self {
            threshold: config.threshold(),
            signers: config.signers,
        }
    }
}

impl BorshSerialize for ThresholdConfig {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        BorshSerialize::serialize(&self.signers, writer)?;
        BorshSerialize::serialize(&self.threshold.get(), writer)
    }
}

impl BorshDeserialize for ThresholdConfig {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let signers = Vec::<SignerAddress>::deserialize_reader(reader)?;
        let threshold = u8::deserialize_reader(reader)?;
        ThresholdConfig::try_new(signers, threshold)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }
}

impl<'a> Arbitrary<'a> for ThresholdConfig {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let count = u.int_in_range(1..=20usize)?;
        let mut signers = Vec::with_capacity(count);
        for _ in 0..count {
            let address = SignerAddress::arbitrary(u)?;
            if !signers.contains(&address) {
                signers.push(address);
            }
        }
        // Every duplicate may have been dropped, in which case only one remains.
        let threshold = u.int_in_range(1..=(signers.len() as u8))?;
        ThresholdConfig::try_new(signers, threshold).map_err(|_| arbitrary::Error::IncorrectFormat)
    }
}

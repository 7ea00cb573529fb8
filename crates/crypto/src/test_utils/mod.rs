//! Deterministic signer fixtures for tests.

use secp256k1::SecretKey;
use sha2::{Digest, Sha256};

use crate::{
    keys::SignerAddress,
    signing::sign_digest,
    threshold_signature::{MessageDigest, ThresholdConfig, Witness},
};

/// A secret key and its signer address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestSigner {
    /// The signing key.
    pub secret: SecretKey,
    /// Address derived from `secret`.
    pub address: SignerAddress,
}

impl TestSigner {
    /// Derives a signer deterministically from `seed`.
    pub fn from_seed(seed: u64) -> Self {
        let mut counter = 0u64;
        loop {
            let mut hasher = Sha256::new();
            hasher.update(b"msig-test-signer");
            hasher.update(seed.to_be_bytes());
            hasher.update(counter.to_be_bytes());
            let bytes: [u8; 32] = hasher.finalize().into();
            if let Ok(secret) = SecretKey::from_slice(&bytes) {
                return Self::from_secret(secret);
            }
            counter += 1;
        }
    }

    /// Wraps an existing secret key.
    pub fn from_secret(secret: SecretKey) -> Self {
        Self {
            address: SignerAddress::from_secret_key(&secret),
            secret,
        }
    }

    /// Signs `digest`.
    pub fn sign(&self, digest: &MessageDigest) -> Witness {
        sign_digest(&self.secret, digest)
    }
}

/// Returns `count` distinct signers derived from seeds `0..count`.
pub fn test_signers(count: usize) -> Vec<TestSigner> {
    (0..count as u64).map(TestSigner::from_seed).collect()
}

/// Builds a configuration over the addresses of `signers`.
pub fn config_for(signers: &[TestSigner], threshold: u8) -> ThresholdConfig {
    let addresses = signers.iter().map(|s| s.address).collect();
    ThresholdConfig::try_new(addresses, threshold).expect("test config should be valid")
}

/// A witness that never recovers to any signer (`r = 0`).
pub fn garbage_witness(fill: u8) -> Witness {
    let mut bytes = [fill; 64];
    bytes[..32].fill(0);
    Witness::new(bytes)
}

//! A signer set, threshold and digest bundled for end-to-end checks.

use msig_crypto::{
    keys::SignerAddress,
    predicate::MultisigPredicate,
    test_utils::TestSigner,
    threshold_signature::{
        verify_threshold_witnesses, verify_with_trace, MessageDigest, ThresholdConfig,
        VerificationTrace, Witness, WitnessSet,
    },
};

use super::signers::{random_signers, seeded_rng, DEFAULT_SEED};

/// Message signed by default.
const DEFAULT_MESSAGE: &[u8] = b"msig integration scenario";

/// A fixed signer set with one key per slot.
///
/// Slots turned into placeholders keep their key, so tests can show that a
/// real signature from that key still does not satisfy the zero slot.
#[derive(Debug, Clone)]
pub struct MultisigScenario {
    signers: Vec<TestSigner>,
    slots: Vec<SignerAddress>,
    threshold: u8,
    digest: MessageDigest,
}

impl MultisigScenario {
    /// Creates a scenario with `signer_count` random signers.
    pub fn new(signer_count: usize, threshold: u8) -> Self {
        Self::with_seed(signer_count, threshold, DEFAULT_SEED)
    }

    /// Creates a scenario drawing signers from `seed`.
    pub fn with_seed(signer_count: usize, threshold: u8, seed: u64) -> Self {
        let signers = random_signers(&mut seeded_rng(seed), signer_count);
        let slots = signers.iter().map(|s| s.address).collect();
        Self {
            signers,
            slots,
            threshold,
            digest: MessageDigest::from_message(DEFAULT_MESSAGE),
        }
    }

    /// Replaces the address in `slot` with the zero placeholder.
    pub fn with_placeholder(mut self, slot: usize) -> Self {
        self.slots[slot] = SignerAddress::ZERO;
        self
    }

    /// Uses the digest of `message`.
    pub fn with_message(mut self, message: &[u8]) -> Self {
        self.digest = MessageDigest::from_message(message);
        self
    }

    /// Validated configuration for the current slots.
    pub fn config(&self) -> ThresholdConfig {
        ThresholdConfig::try_new(self.slots.clone(), self.threshold)
            .expect("scenario config should be valid")
    }

    pub fn digest(&self) -> MessageDigest {
        self.digest
    }

    pub fn signer(&self, index: usize) -> &TestSigner {
        &self.signers[index]
    }

    /// Signature of the signer at `index` over the scenario digest.
    pub fn sign(&self, index: usize) -> Witness {
        self.signers[index].sign(&self.digest)
    }

    /// Witness set signed by the signers at `indices`, in that order.
    pub fn witnesses(&self, indices: &[usize]) -> WitnessSet {
        indices.iter().map(|&i| self.sign(i)).collect()
    }

    pub fn predicate(&self) -> MultisigPredicate {
        MultisigPredicate::new(self.config())
    }

    pub fn verify(&self, witnesses: &WitnessSet) -> bool {
        verify_threshold_witnesses(&self.config(), &self.digest, witnesses)
    }

    pub fn trace(&self, witnesses: &WitnessSet) -> VerificationTrace {
        verify_with_trace(&self.config(), &self.digest, witnesses)
    }
}

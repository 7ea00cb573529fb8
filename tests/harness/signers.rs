//! Signer fixtures drawn from a seeded RNG.

use msig_crypto::test_utils::TestSigner;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use secp256k1::SecretKey;

/// Default seed for scenario fixtures.
pub const DEFAULT_SEED: u64 = 0x6d_73_69_67;

/// Returns a deterministic RNG for `seed`.
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Draws `count` signers from `rng`.
///
/// Keys are drawn independently, so the addresses are distinct with
/// overwhelming probability.
pub fn random_signers<R: RngCore + CryptoRng>(rng: &mut R, count: usize) -> Vec<TestSigner> {
    (0..count)
        .map(|_| TestSigner::from_secret(SecretKey::new(rng)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_signers() {
        let a = random_signers(&mut seeded_rng(7), 3);
        let b = random_signers(&mut seeded_rng(7), 3);
        let c = random_signers(&mut seeded_rng(8), 3);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

//! Message digests that signers agree to.

use borsh::{BorshDeserialize, BorshSerialize};
use sha2::{Digest, Sha256};

use crate::encoding::impl_hex_bytes;

/// Length of a [`MessageDigest`] in bytes.
pub const DIGEST_LEN: usize = 32;

/// A 32-byte hash of the message or transaction being authorized.
///
/// Every witness in one verification is recovered against the same digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize)]
pub struct MessageDigest([u8; DIGEST_LEN]);

impl_hex_bytes!(MessageDigest, DIGEST_LEN);

impl MessageDigest {
    /// Wraps an already computed hash.
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Hashes the canonical message bytes with SHA-256.
    pub fn from_message(message: &[u8]) -> Self {
        Self(Sha256::digest(message).into())
    }

    /// Returns a copy with a single bit flipped.
    ///
    /// `bit` is taken modulo the digest width, counting from the most
    /// significant bit of the first byte.
    pub fn with_flipped_bit(mut self, bit: usize) -> Self {
        let bit = bit % (DIGEST_LEN * 8);
        self.0[bit / 8] ^= 0x80 >> (bit % 8);
        self
    }
}

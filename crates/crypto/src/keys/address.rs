//! Signer addresses derived from secp256k1 public keys.

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use secp256k1::{PublicKey, SecretKey, SECP256K1};
use sha2::{Digest, Sha256};

use crate::encoding::impl_hex_bytes;

/// Length of a [`SignerAddress`] in bytes.
pub const ADDRESS_LEN: usize = 32;

/// A signer identity.
///
/// The address is the SHA-256 hash of the 64-byte uncompressed public key
/// (`x || y`, without the `0x04` tag byte).
///
/// The all-zero address marks an unconfigured signer slot. It is never
/// produced by hashing a real public key, and the verifier never compares a
/// recovered signer against it.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, BorshSerialize, BorshDeserialize, Arbitrary,
)]
pub struct SignerAddress([u8; ADDRESS_LEN]);

impl_hex_bytes!(SignerAddress, ADDRESS_LEN);

impl SignerAddress {
    /// The placeholder address for unconfigured signer slots.
    pub const ZERO: Self = Self([0; ADDRESS_LEN]);

    /// Wraps raw address bytes.
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Derives the address of a public key.
    pub fn from_public_key(pk: &PublicKey) -> Self {
        let uncompressed = pk.serialize_uncompressed();
        Self(Sha256::digest(&uncompressed[1..]).into())
    }

    /// Derives the address of the public key belonging to `sk`.
    pub fn from_secret_key(sk: &SecretKey) -> Self {
        Self::from_public_key(&PublicKey::from_secret_key(SECP256K1, sk))
    }

    /// Whether this is the unconfigured placeholder.
    pub fn is_placeholder(&self) -> bool {
        *self == Self::ZERO
    }
}

impl From<PublicKey> for SignerAddress {
    fn from(pk: PublicKey) -> Self {
        Self::from_public_key(&pk)
    }
}

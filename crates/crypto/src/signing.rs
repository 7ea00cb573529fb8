//! Producing witnesses.

use secp256k1::{Message, SecretKey, SECP256K1};

use crate::threshold_signature::{MessageDigest, Witness};

/// Sign a digest with ECDSA and return the compact recoverable witness.
///
/// libsecp256k1 always produces low-s signatures, so the top bit of `s` is
/// free to carry the recovery parity.
pub fn sign_digest(secret_key: &SecretKey, digest: &MessageDigest) -> Witness {
    let message = Message::from_digest(digest.to_bytes());
    let sig = SECP256K1.sign_ecdsa_recoverable(&message, secret_key);
    let (recovery_id, compact) = sig.serialize_compact();
    Witness::from_recoverable_parts(recovery_id.to_i32() as u8, compact)
}

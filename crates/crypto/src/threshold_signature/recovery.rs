//! Signer recovery from witnesses.

use secp256k1::{
    ecdsa::{RecoverableSignature, RecoveryId},
    Message, SECP256K1,
};
use tracing::trace;

use super::{MessageDigest, Witness};
use crate::keys::SignerAddress;

/// Recovers the signer of a witness over a digest.
///
/// Recovery failure is an expected outcome and is reported as `None`.
pub trait RecoveryScheme {
    /// Returns the address that produced `witness` over `digest`, if any.
    fn recover(&self, digest: &MessageDigest, witness: &Witness) -> Option<SignerAddress>;
}

impl<S: RecoveryScheme + ?Sized> RecoveryScheme for &S {
    fn recover(&self, digest: &MessageDigest, witness: &Witness) -> Option<SignerAddress> {
        (**self).recover(digest, witness)
    }
}

/// Recoverable ECDSA over secp256k1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Secp256k1Recovery;

impl RecoveryScheme for Secp256k1Recovery {
    fn recover(&self, digest: &MessageDigest, witness: &Witness) -> Option<SignerAddress> {
        let message = Message::from_digest(digest.to_bytes());

        let recovery_id = RecoveryId::from_i32(witness.recovery_id() as i32).ok()?;
        let signature = match RecoverableSignature::from_compact(&witness.compact(), recovery_id) {
            Ok(signature) => signature,
            Err(e) => {
                trace!(%e, "witness is not a valid compact signature");
                return None;
            }
        };

        match SECP256K1.recover_ecdsa(&message, &signature) {
            Ok(pk) => Some(SignerAddress::from_public_key(&pk)),
            Err(e) => {
                trace!(%e, "public key recovery failed");
                None
            }
        }
    }
}

//! Signer key and address types.
//!
//! - [`address`] - 32-byte signer addresses derived from secp256k1 public keys

pub mod address;

pub use address::{SignerAddress, ADDRESS_LEN};

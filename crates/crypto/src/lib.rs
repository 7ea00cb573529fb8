//! Threshold signature authorization.
//!
//! Decides whether a transaction digest carries valid signatures from at
//! least M of a fixed set of N signers. See [`threshold_signature`] for the
//! verifier and [`predicate`] for the spend gate built on top of it.

mod encoding;

pub mod keys;
pub mod predicate;
pub mod signing;
pub mod threshold_signature;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use encoding::ParseBytesError;

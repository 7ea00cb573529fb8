//! Verifier parameter files.
//!
//! Signer sets and thresholds are deployment-time constants. This crate
//! loads them from TOML or JSON files and turns them into a validated
//! [`ThresholdConfig`](msig_crypto::threshold_signature::ThresholdConfig).

mod params;

pub use params::{load_params, LoggingConfig, ParamsError, VerifierParams};

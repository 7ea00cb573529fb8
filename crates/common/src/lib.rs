//! Shared runtime plumbing for the msig binaries.

pub mod logging;

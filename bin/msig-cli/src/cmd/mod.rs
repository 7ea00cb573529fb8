//! Subcommand implementations.

mod keys;
mod sign;
mod verify;

pub(crate) use keys::{exec_address, exec_genkey};
pub(crate) use sign::exec_sign;
pub(crate) use verify::exec_verify;

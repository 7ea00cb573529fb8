//! Utility functions for the `msig-cli` binary.
//!
//! Key resolution, digest and witness parsing, and logging setup shared by
//! the subcommands.

use std::{
    env, fs,
    path::{Path, PathBuf},
    process::ExitCode,
    str::FromStr,
};

use anyhow::Context;
use msig_common::logging::{self, format_service_name, FileLoggingConfig, LoggerConfig};
use msig_config::LoggingConfig;
use msig_crypto::threshold_signature::MessageDigest;
use secp256k1::SecretKey;
use zeroize::Zeroizing;

use crate::{
    args::{CmdContext, Subcommand},
    cmd::{exec_address, exec_genkey, exec_sign, exec_verify},
};

/// Secret key environment variable.
pub(crate) const SECRET_KEY_ENVVAR: &str = "MSIG_SECRET_KEY";

/// Base name reported by the logger.
const SERVICE_NAME: &str = "msig-cli";

/// Executes a subcommand.
pub(crate) fn exec_subc(cmd: Subcommand, ctx: &CmdContext) -> anyhow::Result<ExitCode> {
    match cmd {
        Subcommand::GenKey(subc) => exec_genkey(subc, ctx),
        Subcommand::Address(subc) => exec_address(subc, ctx),
        Subcommand::Sign(subc) => exec_sign(subc, ctx),
        Subcommand::Verify(subc) => exec_verify(subc, ctx),
    }
}

/// Builds the logger configuration.
///
/// Command line flags take priority over the `[logging]` section of a params
/// file.
pub(crate) fn build_logger_config(
    ctx: &CmdContext,
    label: &str,
    params: Option<&LoggingConfig>,
) -> LoggerConfig {
    let json_format = ctx.json_logs || params.and_then(|p| p.json_format).unwrap_or(false);

    let mut config = LoggerConfig::new(format_service_name(SERVICE_NAME, Some(label)))
        .with_json_logging(json_format);

    let log_dir = ctx
        .log_dir
        .clone()
        .or_else(|| params.and_then(|p| p.log_dir.clone()));

    if let Some(dir) = log_dir {
        let prefix = params
            .and_then(|p| p.log_file_prefix.clone())
            .unwrap_or_else(|| SERVICE_NAME.to_string());
        config = config
            .with_file_logging(FileLoggingConfig::new(dir, prefix).with_json_format(json_format));
    }

    config
}

/// Installs the global logger.
pub(crate) fn init_logging(ctx: &CmdContext, label: &str, params: Option<&LoggingConfig>) {
    logging::init(build_logger_config(ctx, label, params));
}

/// Parses a hex secret key, with or without a `0x` prefix.
pub(crate) fn parse_secret_key(s: &str) -> anyhow::Result<SecretKey> {
    let s = s.trim();
    let s = s.strip_prefix("0x").unwrap_or(s);
    SecretKey::from_str(s).context("invalid secret key")
}

/// Reads a hex secret key from a file.
fn read_secret_key(path: &Path) -> anyhow::Result<SecretKey> {
    let contents = Zeroizing::new(
        fs::read_to_string(path)
            .with_context(|| format!("failed to read key file {}", path.display()))?,
    );
    parse_secret_key(&contents)
}

/// Parses a hex secret key from an environment variable.
fn parse_secret_key_from_env(env: &'static str) -> anyhow::Result<SecretKey> {
    let env_val = match env::var(env) {
        Ok(v) => Zeroizing::new(v),
        Err(_) => anyhow::bail!("got --key-from-env but {env} not set or invalid"),
    };
    parse_secret_key(&env_val)
}

/// Resolves a [`SecretKey`] from the file path (if provided) or environment
/// variable (if `--key-from-env` set). Only one source should be specified.
///
/// Callers erase the key with [`SecretKey::non_secure_erase`] once done.
pub(crate) fn resolve_secret_key(
    path: &Option<PathBuf>,
    from_env: bool,
    env: &'static str,
) -> anyhow::Result<Option<SecretKey>> {
    match (path, from_env) {
        (Some(_), true) => anyhow::bail!("got key path and --key-from-env, pick a lane"),
        (Some(path), false) => Ok(Some(read_secret_key(path)?)),
        (None, true) => parse_secret_key_from_env(env).map(Some),
        _ => Ok(None),
    }
}

/// Resolves the digest from an explicit hex value or the SHA-256 of a file.
pub(crate) fn resolve_digest(
    digest: Option<&str>,
    message: Option<&Path>,
) -> anyhow::Result<MessageDigest> {
    match (digest, message) {
        (Some(_), Some(_)) => anyhow::bail!("got --digest and --message, pick a lane"),
        (Some(hex), None) => MessageDigest::from_str(hex.trim()).context("invalid digest"),
        (None, Some(path)) => {
            let bytes = fs::read(path)
                .with_context(|| format!("failed to read message file {}", path.display()))?;
            Ok(MessageDigest::from_message(&bytes))
        }
        (None, None) => anyhow::bail!("one of --digest or --message is required"),
    }
}

/// Decodes witness hex without checking its length.
///
/// Wrong-length witnesses are passed on so the verifier can report them as
/// malformed.
pub(crate) fn decode_witness_hex(s: &str) -> anyhow::Result<Vec<u8>> {
    let s = s.trim();
    let s = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(s).with_context(|| format!("witness is not valid hex: {s}"))
}

//! `genkey` and `address` subcommands.

use std::{fs, process::ExitCode};

use anyhow::Context;
use msig_crypto::keys::SignerAddress;
use secp256k1::{rand::thread_rng, SecretKey};
use tracing::debug;
use zeroize::Zeroizing;

use crate::{
    args::{CmdContext, SubcAddress, SubcGenKey},
    util::{init_logging, parse_secret_key, resolve_secret_key, SECRET_KEY_ENVVAR},
};

/// Executes the `genkey` subcommand.
///
/// The secret key is printed on the first line (or written to `--output`),
/// the signer address on the last line.
pub(crate) fn exec_genkey(cmd: SubcGenKey, ctx: &CmdContext) -> anyhow::Result<ExitCode> {
    init_logging(ctx, "genkey", None);

    if let Some(path) = &cmd.output {
        if path.exists() && !cmd.force {
            anyhow::bail!("not overwriting file, add --force to overwrite");
        }
    }

    let mut secret = SecretKey::new(&mut thread_rng());
    let address = SignerAddress::from_secret_key(&secret);
    let secret_hex = Zeroizing::new(secret.display_secret().to_string());
    secret.non_secure_erase();

    match &cmd.output {
        Some(path) => {
            fs::write(path, secret_hex.as_bytes())
                .with_context(|| format!("failed to write to file {}", path.display()))?;
            debug!(path = %path.display(), "wrote secret key");
        }
        None => println!("{}", secret_hex.as_str()),
    }
    println!("{address}");

    Ok(ExitCode::SUCCESS)
}

/// Executes the `address` subcommand.
pub(crate) fn exec_address(cmd: SubcAddress, ctx: &CmdContext) -> anyhow::Result<ExitCode> {
    init_logging(ctx, "address", None);

    let from_sources = resolve_secret_key(&cmd.key_file, cmd.key_from_env, SECRET_KEY_ENVVAR)?;
    let mut secret = match (cmd.secret.as_deref(), from_sources) {
        (Some(_), Some(_)) => anyhow::bail!("got a positional key and a key source, pick a lane"),
        (Some(hex), None) => parse_secret_key(hex)?,
        (None, Some(secret)) => secret,
        (None, None) => anyhow::bail!("privkey unset"),
    };

    println!("{}", SignerAddress::from_secret_key(&secret));
    secret.non_secure_erase();

    Ok(ExitCode::SUCCESS)
}

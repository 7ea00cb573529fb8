//! `sign` subcommand.

use std::process::ExitCode;

use msig_crypto::{keys::SignerAddress, signing::sign_digest};
use tracing::debug;

use crate::{
    args::{CmdContext, SubcSign},
    util::{init_logging, resolve_digest, resolve_secret_key, SECRET_KEY_ENVVAR},
};

/// Executes the `sign` subcommand.
///
/// Prints the 64-byte compact witness as hex.
pub(crate) fn exec_sign(cmd: SubcSign, ctx: &CmdContext) -> anyhow::Result<ExitCode> {
    init_logging(ctx, "sign", None);

    let digest = resolve_digest(cmd.digest.as_deref(), cmd.message.as_deref())?;
    let Some(mut secret) = resolve_secret_key(&cmd.key_file, cmd.key_from_env, SECRET_KEY_ENVVAR)?
    else {
        anyhow::bail!("privkey unset");
    };

    let witness = sign_digest(&secret, &digest);
    debug!(
        signer = %SignerAddress::from_secret_key(&secret),
        %digest,
        "signed digest"
    );
    secret.non_secure_erase();

    println!("{witness}");

    Ok(ExitCode::SUCCESS)
}

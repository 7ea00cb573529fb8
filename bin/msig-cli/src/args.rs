//! Command line arguments for the `msig-cli` binary.

use std::path::PathBuf;

use argh::FromArgs;

/// Args.
#[derive(FromArgs)]
pub(crate) struct Args {
    #[argh(switch, description = "emit logs as JSON instead of compact text")]
    pub(crate) json_logs: bool,

    #[argh(
        option,
        description = "directory for rolling log files (default console only)"
    )]
    pub(crate) log_dir: Option<PathBuf>,

    #[argh(subcommand)]
    pub(crate) subc: Subcommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub(crate) enum Subcommand {
    GenKey(SubcGenKey),
    Address(SubcAddress),
    Sign(SubcSign),
    Verify(SubcVerify),
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "genkey",
    description = "generates a secret key and prints it with its signer address"
)]
pub(crate) struct SubcGenKey {
    #[argh(option, description = "write the secret key to a file instead of stdout")]
    pub(crate) output: Option<PathBuf>,

    #[argh(switch, description = "force overwrite", short = 'f')]
    pub(crate) force: bool,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "address",
    description = "prints the signer address of a secret key"
)]
pub(crate) struct SubcAddress {
    #[argh(positional, description = "secret key hex")]
    pub(crate) secret: Option<String>,

    #[argh(option, description = "reads key from specified file", short = 'k')]
    pub(crate) key_file: Option<PathBuf>,

    #[argh(
        switch,
        description = "reads key from envvar MSIG_SECRET_KEY",
        short = 'E'
    )]
    pub(crate) key_from_env: bool,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "sign",
    description = "signs a digest and prints the compact witness"
)]
pub(crate) struct SubcSign {
    #[argh(option, description = "32-byte digest hex", short = 'd')]
    pub(crate) digest: Option<String>,

    #[argh(option, description = "file whose SHA-256 is signed", short = 'm')]
    pub(crate) message: Option<PathBuf>,

    #[argh(option, description = "reads key from specified file", short = 'k')]
    pub(crate) key_file: Option<PathBuf>,

    #[argh(
        switch,
        description = "reads key from envvar MSIG_SECRET_KEY",
        short = 'E'
    )]
    pub(crate) key_from_env: bool,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "verify",
    description = "checks witnesses against a signer set and threshold"
)]
pub(crate) struct SubcVerify {
    #[argh(option, description = "params file (.toml or .json)", short = 'p')]
    pub(crate) params: PathBuf,

    #[argh(option, description = "32-byte digest hex", short = 'd')]
    pub(crate) digest: Option<String>,

    #[argh(option, description = "file whose SHA-256 is verified", short = 'm')]
    pub(crate) message: Option<PathBuf>,

    #[argh(
        option,
        description = "witness hex, repeatable, in position order",
        short = 'w'
    )]
    pub(crate) witness: Vec<String>,

    #[argh(
        option,
        description = "reported witness count (default number of --witness)"
    )]
    pub(crate) count: Option<usize>,

    #[argh(switch, description = "print the per-witness trace")]
    pub(crate) trace: bool,

    #[argh(switch, description = "print the trace as JSON")]
    pub(crate) json: bool,
}

/// Settings shared by every subcommand.
#[derive(Debug)]
pub(crate) struct CmdContext {
    /// Emit logs as JSON.
    pub(crate) json_logs: bool,

    /// Directory for rolling log files.
    pub(crate) log_dir: Option<PathBuf>,
}

/// Resolves the command context and subcommand from the parsed command line arguments.
pub(crate) fn resolve_context_and_subcommand(args: Args) -> (CmdContext, Subcommand) {
    let ctx = CmdContext {
        json_logs: args.json_logs,
        log_dir: args.log_dir,
    };
    (ctx, args.subc)
}

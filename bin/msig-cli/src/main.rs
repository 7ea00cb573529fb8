//! Command line tool for producing and checking threshold signature witnesses.
//!
//! # Warning
//!
//! Key generation and signing are intended for testing and development only.

mod args;
mod cmd;
mod util;

use std::process::ExitCode;

use args::resolve_context_and_subcommand;
use util::exec_subc;

fn main() -> ExitCode {
    let args: args::Args = argh::from_env();
    let inner = || -> anyhow::Result<ExitCode> {
        let (ctx, subc) = resolve_context_and_subcommand(args);
        exec_subc(subc, &ctx)
    };
    match inner() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("ERROR\n{e:?}");
            ExitCode::from(2)
        }
    }
}

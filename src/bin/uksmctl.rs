#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! uksmctl — small tool to control UKSM.

use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use uksmtools::cli::args::CtlCli;
use uksmtools::cli::{OutputCtx, write_error};
use uksmtools::commands;
use uksmtools::sys;
use uksmtools::types::ErrorOutput;
use uksmtools::uksm::{Uksm, UksmError};

fn main() {
    // Privilege and capability checks come before flag parsing: without root
    // and the kernel interface there is nothing to control.
    let uksm = Uksm::new();
    if let Err(err) = preflight(&uksm) {
        eprintln!("{err}");
        process::exit(err.exit_code());
    }

    let cli = CtlCli::parse();
    if cli.verbose > 2 {
        CtlCli::command()
            .error(ErrorKind::TooManyValues, "Invalid -v switches count")
            .exit();
    }

    let ctx = OutputCtx::new(cli.json, cli.verbose);
    if let Err(err) = commands::dispatch_control(&cli, &ctx, &uksm) {
        write_error(&ErrorOutput::from_uksm_error(&err), ctx.json);
        process::exit(err.exit_code());
    }
}

fn preflight(uksm: &Uksm) -> Result<(), UksmError> {
    if !sys::is_root() {
        return Err(UksmError::PermissionDenied);
    }
    uksm.probe()
}

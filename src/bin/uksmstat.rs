#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! uksmstat — small tool to show UKSM statistics.

use std::process;

use clap::Parser;

use uksmtools::cli::args::StatCli;
use uksmtools::cli::{OutputCtx, write_error};
use uksmtools::commands;
use uksmtools::types::ErrorOutput;
use uksmtools::uksm::Uksm;

fn main() {
    // The capability probe comes before flag parsing; reading statistics
    // needs no privileges beyond an existing interface.
    let uksm = Uksm::new();
    if let Err(err) = uksm.probe() {
        eprintln!("{err}");
        process::exit(err.exit_code());
    }

    let cli = StatCli::parse();
    let ctx = OutputCtx::new(cli.json, cli.verbosity());
    if let Err(err) = commands::dispatch_stat(&cli, &ctx, &uksm) {
        write_error(&ErrorOutput::from_uksm_error(&err), ctx.json);
        process::exit(err.exit_code());
    }
}

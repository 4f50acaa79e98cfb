/// Command dispatch: routes parsed options to their operation handlers.
pub mod control;
pub mod counters;
pub mod status;

use crate::cli::OutputCtx;
use crate::cli::args::{CtlCli, StatCli};
use crate::sys;
use crate::uksm::{Uksm, UksmError};

/// Dispatch `uksmctl` options.
///
/// When several operation flags are given, the first of activate,
/// deactivate, toggle wins. No operation flag at all is a silent no-op.
///
/// # Errors
///
/// Returns `UksmError` on any attribute access failure.
pub fn dispatch_control(cli: &CtlCli, ctx: &OutputCtx, uksm: &Uksm) -> Result<(), UksmError> {
    if cli.activate {
        control::activate(uksm, ctx)
    } else if cli.deactivate {
        control::deactivate(uksm, ctx)
    } else if cli.toggle {
        control::toggle(uksm, ctx)
    } else {
        Ok(())
    }
}

/// Dispatch `uksmstat` options.
///
/// The active-state report comes first; requested counters follow in fixed
/// order (unshared, shared, scanned). The first failing attribute aborts the
/// process before later counters are attempted.
///
/// # Errors
///
/// Returns `UksmError` on attribute access failure or when the page size
/// cannot be determined.
pub fn dispatch_stat(cli: &StatCli, ctx: &OutputCtx, uksm: &Uksm) -> Result<(), UksmError> {
    if cli.active {
        status::run(uksm, ctx)?;
    }

    let requested = cli.counters();
    if requested.is_empty() {
        return Ok(());
    }

    // One query per invocation; every counter scales by the same constant.
    let page_size = sys::page_size()?;
    for counter in requested {
        counters::run(uksm, counter, page_size, cli.unit(), cli.precision(), ctx)?;
    }
    Ok(())
}

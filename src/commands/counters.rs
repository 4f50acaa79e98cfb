/// Counter reporting: read one counter, scale it, print one line.
use crate::cli::OutputCtx;
use crate::cli::output::print_json;
use crate::format::{self, Unit};
use crate::types::CounterOutput;
use crate::uksm::{Counter, Uksm, UksmError};

/// Read `counter` and print its size line.
///
/// # Errors
///
/// Returns `UksmError` if the attribute cannot be read or parsed; the
/// caller stops at the first failure, so later counters are not attempted.
pub fn run(
    uksm: &Uksm,
    counter: Counter,
    page_size: u64,
    unit: Unit,
    precision: usize,
    ctx: &OutputCtx,
) -> Result<(), UksmError> {
    let pages = uksm.counter(counter)?;
    if ctx.json {
        print_json(&CounterOutput {
            counter: counter.name().to_owned(),
            pages,
            bytes: pages.saturating_mul(page_size),
            value: format::scale(pages, page_size, unit),
            unit: unit.suffix().to_owned(),
        });
        return Ok(());
    }
    println!(
        "{}",
        format::render(counter.label(), pages, page_size, unit, precision, ctx.verbosity)
    );
    Ok(())
}

/// `uksmstat -a`: report whether UKSM is active.
use crate::cli::OutputCtx;
use crate::cli::output::print_json;
use crate::types::StatusOutput;
use crate::uksm::{Uksm, UksmError};

/// Read the `run` attribute and report its state.
///
/// Prints `UKSM is active` for 1 and `UKSM is inactive` for 0. Any other
/// value prints nothing: the attribute is kernel-owned, so an unexpected
/// reading is not this tool's error to raise.
///
/// # Errors
///
/// Returns `UksmError` if the attribute cannot be read or parsed.
pub fn run(uksm: &Uksm, ctx: &OutputCtx) -> Result<(), UksmError> {
    match uksm.run_raw()? {
        1 => {
            if ctx.json {
                print_json(&StatusOutput { active: true });
            } else {
                println!("UKSM is active");
            }
        }
        0 => {
            if ctx.json {
                print_json(&StatusOutput { active: false });
            } else {
                println!("UKSM is inactive");
            }
        }
        _ => {}
    }
    Ok(())
}

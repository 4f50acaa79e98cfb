/// `uksmctl` operations: activate, deactivate, toggle.
use crate::cli::OutputCtx;
use crate::cli::output::print_json;
use crate::types::RunOutput;
use crate::uksm::{RunState, Uksm, UksmError};

/// Write the active state unconditionally.
///
/// # Errors
///
/// Returns `UksmError::Io` if the `run` attribute cannot be written.
pub fn activate(uksm: &Uksm, ctx: &OutputCtx) -> Result<(), UksmError> {
    set(uksm, ctx, "activate", RunState::Active)
}

/// Write the inactive state unconditionally.
///
/// # Errors
///
/// Returns `UksmError::Io` if the `run` attribute cannot be written.
pub fn deactivate(uksm: &Uksm, ctx: &OutputCtx) -> Result<(), UksmError> {
    set(uksm, ctx, "deactivate", RunState::Inactive)
}

fn set(uksm: &Uksm, ctx: &OutputCtx, action: &str, state: RunState) -> Result<(), UksmError> {
    uksm.set_run_state(state)?;
    if ctx.json {
        print_json(&RunOutput {
            action: action.to_owned(),
            active_before: None,
            active_after: state.is_active(),
        });
        return Ok(());
    }
    report(ctx.verbosity, state);
    Ok(())
}

/// Read the run state, write its complement.
///
/// At `-vv` the transition is announced before the result line. Any non-zero
/// current value reads as active and therefore toggles to inactive.
///
/// # Errors
///
/// Returns `UksmError` if the `run` attribute cannot be read or written.
pub fn toggle(uksm: &Uksm, ctx: &OutputCtx) -> Result<(), UksmError> {
    let (before, after) = uksm.toggle()?;
    if ctx.json {
        print_json(&RunOutput {
            action: "toggle".to_owned(),
            active_before: Some(before.is_active()),
            active_after: after.is_active(),
        });
        return Ok(());
    }
    if ctx.verbosity >= 2 {
        match before {
            RunState::Inactive => println!("UKSM was inactive, activating"),
            RunState::Active => println!("UKSM was active, deactivating"),
        }
    }
    report(ctx.verbosity, after);
    Ok(())
}

/// Plain-mode result line: silent, the digit written, or words.
fn report(verbosity: u8, state: RunState) {
    match verbosity {
        0 => {}
        1 => println!("{}", state.as_raw()),
        _ => match state {
            RunState::Active => println!("UKSM activated"),
            RunState::Inactive => println!("UKSM deactivated"),
        },
    }
}

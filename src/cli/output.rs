/// Output formatting: plain lines by default, compact JSON with `--json`.
use std::io::Write;

use serde::Serialize;

use crate::types::ErrorOutput;

/// Output context passed to all command handlers.
#[derive(Debug, Clone)]
pub struct OutputCtx {
    /// Emit compact JSON objects instead of plain lines.
    pub json: bool,
    /// Verbosity level (0..=2) controlling plain-mode detail.
    pub verbosity: u8,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(json: bool, verbosity: u8) -> Self {
        Self { json, verbosity }
    }
}

/// Print one value to stdout as a compact JSON line.
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

/// Write a structured error to stderr.
///
/// Plain mode prints the bare diagnostic (the message already names the
/// failing resource); JSON mode prints the envelope.
pub fn write_error(err: &ErrorOutput, json: bool) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    if json {
        let s = serde_json::to_string(err).unwrap_or_default();
        let _ = writeln!(out, "{s}");
    } else {
        let _ = writeln!(out, "{}", err.error.message);
    }
}

/// Shared serializable output types for both binaries.
///
/// These types are what gets written in `--json` mode — one compact object
/// per line on stdout, and the error envelope on stderr. They are decoupled
/// from the internal `RunState` / `Counter` domain types.
use serde::{Deserialize, Serialize};

use crate::uksm::UksmError;

/// Run state as reported by `uksmstat -a`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusOutput {
    /// Whether UKSM is currently active.
    pub active: bool,
}

/// One counter reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterOutput {
    /// Machine-readable counter name ("unshared", "sharing", "scanned").
    pub counter: String,
    /// Raw page count read from the attribute file.
    pub pages: u64,
    /// Page count scaled to bytes.
    pub bytes: u64,
    /// Byte count scaled to the selected unit.
    pub value: f64,
    /// Unit suffix ("B", "KiB", "MiB", "GiB").
    pub unit: String,
}

/// Result of a run-state change performed by `uksmctl`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutput {
    /// The operation performed ("activate", "deactivate", "toggle").
    pub action: String,
    /// Run state before the write; absent for unconditional writes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_before: Option<bool>,
    /// Run state after the write.
    pub active_after: bool,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Path of the failing resource, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorOutput {
    /// Construct from a `UksmError`.
    #[must_use]
    pub fn from_uksm_error(err: &UksmError) -> Self {
        let (code, path) = match err {
            UksmError::PermissionDenied => ("permission_denied", None),
            UksmError::FeatureUnavailable { path } => ("feature_unavailable", Some(path)),
            UksmError::Io { path, .. } => ("attribute_io", Some(path)),
            UksmError::Malformed { path, .. } => ("attribute_malformed", Some(path)),
            UksmError::PageSize => ("page_size", None),
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
                path: path.map(|p| p.display().to_string()),
            },
        }
    }
}

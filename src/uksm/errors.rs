/// Errors from the UKSM domain layer.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while talking to the UKSM sysfs interface.
#[derive(Debug, Error)]
pub enum UksmError {
    /// Controlling UKSM requires root privileges.
    #[error("You have to be root in order to use uksmctl")]
    PermissionDenied,

    /// The kernel does not expose the UKSM sysfs directory.
    #[error("Unable to find uksm interface in {}", .path.display())]
    FeatureUnavailable {
        /// The probed sysfs root.
        path: PathBuf,
    },

    /// Opening, reading, or writing an attribute file failed.
    #[error("Unable to open {}: {source}", .path.display())]
    Io {
        /// The attribute file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An attribute file did not start with an integer token.
    #[error("Malformed attribute {}: {content:?}", .path.display())]
    Malformed {
        /// The attribute file with unexpected content.
        path: PathBuf,
        /// The content that failed to parse.
        content: String,
    },

    /// The system page size query failed.
    #[error("Unable to get page size")]
    PageSize,
}

/// Exit code mapping for `UksmError` variants.
impl UksmError {
    /// Return the CLI exit code for this error.
    ///
    /// Usage errors never reach this mapping; clap reports them itself and
    /// exits with its own status (2).
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PermissionDenied => 3,
            Self::FeatureUnavailable { .. } => 4,
            Self::Io { .. } | Self::Malformed { .. } => 5,
            Self::PageSize => 6,
        }
    }
}

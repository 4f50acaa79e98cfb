/// Domain layer: typed access to the UKSM sysfs interface.
pub mod errors;

pub use errors::UksmError;

use std::path::{Path, PathBuf};

use crate::sysfs;

/// Fixed location of the UKSM sysfs interface.
pub const SYSFS_ROOT: &str = "/sys/kernel/mm/uksm";

/// The run-state attribute file name.
const RUN_ATTR: &str = "run";

/// UKSM run state, as stored in the `run` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// UKSM is not scanning (`run` = 0).
    Inactive,
    /// UKSM is scanning and merging pages (`run` = 1).
    Active,
}

impl RunState {
    /// Interpret a raw attribute value. Any non-zero value counts as active.
    #[must_use]
    pub fn from_raw(raw: u64) -> Self {
        if raw == 0 { Self::Inactive } else { Self::Active }
    }

    /// The opposite state.
    #[must_use]
    pub fn complement(self) -> Self {
        match self {
            Self::Inactive => Self::Active,
            Self::Active => Self::Inactive,
        }
    }

    /// The value written to the `run` attribute.
    #[must_use]
    pub fn as_raw(self) -> u64 {
        match self {
            Self::Inactive => 0,
            Self::Active => 1,
        }
    }

    /// Whether this state is [`RunState::Active`].
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// The three page counters exported by UKSM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    /// Pages scanned but not deduplicated.
    Unshared,
    /// Pages currently deduplicated (memory saved).
    Sharing,
    /// Cumulative pages scanned since boot.
    Scanned,
}

impl Counter {
    /// Attribute file name under the sysfs root.
    #[must_use]
    pub fn attr(self) -> &'static str {
        match self {
            Self::Unshared => "pages_unshared",
            Self::Sharing => "pages_sharing",
            Self::Scanned => "pages_scanned",
        }
    }

    /// Display label used at verbosity level 2.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unshared => "Unshared pages",
            Self::Sharing => "Shared pages",
            Self::Scanned => "Scanned pages",
        }
    }

    /// Machine-readable name used in JSON output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Unshared => "unshared",
            Self::Sharing => "sharing",
            Self::Scanned => "scanned",
        }
    }
}

/// Handle to a UKSM sysfs tree.
///
/// Production code binds the fixed kernel path via [`Uksm::new`]; tests bind
/// a temporary directory via [`Uksm::at`].
#[derive(Debug, Clone)]
pub struct Uksm {
    root: PathBuf,
}

impl Default for Uksm {
    fn default() -> Self {
        Self::new()
    }
}

impl Uksm {
    /// Handle bound to [`SYSFS_ROOT`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: PathBuf::from(SYSFS_ROOT),
        }
    }

    /// Handle bound to an arbitrary root directory.
    #[must_use]
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory this handle is bound to.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Verify the UKSM interface is present.
    ///
    /// The root must exist and be a directory; a plain file at the same path
    /// is rejected as well.
    ///
    /// # Errors
    ///
    /// Returns `UksmError::FeatureUnavailable` when the running kernel does
    /// not expose UKSM.
    pub fn probe(&self) -> Result<(), UksmError> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(UksmError::FeatureUnavailable {
                path: self.root.clone(),
            })
        }
    }

    fn attr_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Read the raw value of the `run` attribute.
    ///
    /// # Errors
    ///
    /// Returns `UksmError` if the attribute cannot be read or parsed.
    pub fn run_raw(&self) -> Result<u64, UksmError> {
        sysfs::read_u64(&self.attr_path(RUN_ATTR))
    }

    /// Read the current run state. Any non-zero raw value reads as active.
    ///
    /// # Errors
    ///
    /// Returns `UksmError` if the attribute cannot be read or parsed.
    pub fn run_state(&self) -> Result<RunState, UksmError> {
        self.run_raw().map(RunState::from_raw)
    }

    /// Write a run state unconditionally.
    ///
    /// # Errors
    ///
    /// Returns `UksmError::Io` if the attribute cannot be written.
    pub fn set_run_state(&self, state: RunState) -> Result<(), UksmError> {
        sysfs::write_u64(&self.attr_path(RUN_ATTR), state.as_raw())
    }

    /// Flip the run state; returns the state before and after the write.
    ///
    /// Read-then-write, not atomic against concurrent writers of the same
    /// attribute. The kernel interface offers nothing stronger, so a lost
    /// update is tolerated rather than locked against.
    ///
    /// # Errors
    ///
    /// Returns `UksmError` if the attribute cannot be read or written.
    pub fn toggle(&self) -> Result<(RunState, RunState), UksmError> {
        let before = self.run_state()?;
        let after = before.complement();
        self.set_run_state(after)?;
        Ok((before, after))
    }

    /// Read one page counter.
    ///
    /// # Errors
    ///
    /// Returns `UksmError` if the attribute cannot be read or parsed.
    pub fn counter(&self, counter: Counter) -> Result<u64, UksmError> {
        sysfs::read_u64(&self.attr_path(counter.attr()))
    }
}

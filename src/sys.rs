/// Process-wide system queries.
use crate::uksm::UksmError;

/// The system page size in bytes.
///
/// Queried once per invocation; the value is constant for the process
/// lifetime and multiplies page counts into bytes.
///
/// # Errors
///
/// Returns `UksmError::PageSize` if `sysconf` reports no page size.
pub fn page_size() -> Result<u64, UksmError> {
    // SAFETY: Safe C FFI call; sysconf(_SC_PAGESIZE) only reads a
    // process-wide constant.
    let raw = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    u64::try_from(raw)
        .ok()
        .filter(|&size| size > 0)
        .ok_or(UksmError::PageSize)
}

/// Whether the process runs with root privileges.
#[must_use]
pub fn is_root() -> bool {
    // SAFETY: Safe C FFI call with no arguments; geteuid cannot fail.
    unsafe { libc::geteuid() == 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_is_a_positive_power_of_two() {
        let size = page_size().unwrap();
        assert!(size > 0);
        assert_eq!(size & (size - 1), 0);
    }
}

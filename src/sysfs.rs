/// Attribute file I/O: one integer out, one integer in.
///
/// sysfs attributes are single-line pseudo-files. Reads parse the first
/// whitespace-delimited token; writes emit decimal digits with no trailing
/// newline (the kernel side accepts either). Handles are scoped to the one
/// operation that uses them, so they are closed before any error can
/// terminate the process.
use std::fs;
use std::path::Path;

use crate::uksm::UksmError;

/// Read one unsigned integer from an attribute file.
///
/// # Errors
///
/// Returns `UksmError::Io` if the file cannot be opened or read, and
/// `UksmError::Malformed` if its content does not start with an integer.
pub fn read_u64(path: &Path) -> Result<u64, UksmError> {
    let content = fs::read_to_string(path).map_err(|source| UksmError::Io {
        path: path.to_owned(),
        source,
    })?;
    content
        .split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| UksmError::Malformed {
            path: path.to_owned(),
            content: content.trim_end().to_owned(),
        })
}

/// Write one unsigned integer to an attribute file, truncating.
///
/// # Errors
///
/// Returns `UksmError::Io` if the file cannot be opened or written.
pub fn write_u64(path: &Path, value: u64) -> Result<(), UksmError> {
    fs::write(path, value.to_string()).map_err(|source| UksmError::Io {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_plain_integer() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run");
        fs::write(&path, "1").unwrap();
        assert_eq!(read_u64(&path).unwrap(), 1);
    }

    #[test]
    fn test_read_tolerates_kernel_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages_sharing");
        fs::write(&path, "1000\n").unwrap();
        assert_eq!(read_u64(&path).unwrap(), 1000);
    }

    #[test]
    fn test_read_takes_first_token() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("attr");
        fs::write(&path, "42 17\n").unwrap();
        assert_eq!(read_u64(&path).unwrap(), 42);
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent");
        assert!(matches!(read_u64(&path), Err(UksmError::Io { .. })));
    }

    #[test]
    fn test_read_garbage_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("attr");
        fs::write(&path, "not-a-number\n").unwrap();
        let err = read_u64(&path).unwrap_err();
        match err {
            UksmError::Malformed { path: p, content } => {
                assert_eq!(p, path);
                assert_eq!(content, "not-a-number");
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_read_empty_file_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("attr");
        fs::write(&path, "").unwrap();
        assert!(matches!(read_u64(&path), Err(UksmError::Malformed { .. })));
    }

    #[test]
    fn test_write_emits_no_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run");
        write_u64(&path, 1).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1");
    }

    #[test]
    fn test_write_truncates_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run");
        fs::write(&path, "4096\n").unwrap();
        write_u64(&path, 0).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "0");
    }
}

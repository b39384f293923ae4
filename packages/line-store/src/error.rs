//! Error types for the storage layer.
//!
//! Errors at this level are transport-focused. Semantic errors like "block
//! not found" or "duplicate marker" belong in higher layers.

use std::io;
use std::path::PathBuf;

/// Errors raised by line storage backends.
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    /// An underlying read, write, or metadata operation failed.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The path exists but does not refer to a regular file.
    #[error("{} exists but is not a regular file", .path.display())]
    NotAFile { path: PathBuf },
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> StorageError {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn io_error_display_names_path() {
        let e = StorageError::io(
            "some/data.tex",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let display = format!("{}", e);
        assert!(display.contains("some/data.tex"));
        assert!(display.contains("denied"));
    }

    #[test]
    fn io_error_has_source() {
        let e = StorageError::io("x", io::Error::other("boom"));
        assert!(StdError::source(&e).is_some());
    }

    #[test]
    fn not_a_file_has_no_source() {
        let e = StorageError::NotAFile {
            path: PathBuf::from("a-directory"),
        };
        assert!(StdError::source(&e).is_none());
        assert!(format!("{}", e).contains("a-directory"));
    }
}

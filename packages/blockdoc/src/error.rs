//! Error types for the named-block layer.
//!
//! These are semantic errors - name resolution, marker structure, insertion
//! conflicts. Transport failures bubble up from the storage layer via
//! [`Error::Storage`].

use blockdoc_line_store::StorageError;

/// Which of a block's two delimiters an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Start,
    End,
}

impl std::fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkerKind::Start => write!(f, "start"),
            MarkerKind::End => write!(f, "end"),
        }
    }
}

/// Errors raised by block operations.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The operation requires an existing document and none was found.
    #[error("document {document} does not exist")]
    MissingDocument { document: String },

    /// A requested block has no start or no end marker.
    #[error("block '{name}' has no {kind} marker")]
    NotFound { name: String, kind: MarkerKind },

    /// A requested block has more than one start or end marker.
    #[error("block '{name}' has {count} {kind} markers, expected exactly one")]
    Duplicate {
        name: String,
        kind: MarkerKind,
        count: usize,
    },

    /// A block's end marker precedes or coincides with its start marker.
    #[error("block '{name}' is malformed: end marker at line {end} does not follow start marker at line {start}")]
    Malformed {
        name: String,
        start: usize,
        end: usize,
    },

    /// Attempted to create a block whose name already resolves, partially or
    /// fully, in the document.
    #[error("block '{name}' already exists")]
    AlreadyExists { name: String },

    /// The block name does not satisfy the naming rules.
    #[error("invalid block name '{name}': names match [A-Za-z0-9][A-Za-z0-9_.:-]*")]
    InvalidName { name: String },

    /// Error from the storage layer.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn not_found_display_names_block_and_marker() {
        let e = Error::NotFound {
            name: "alpha".to_string(),
            kind: MarkerKind::End,
        };
        let display = format!("{}", e);
        assert!(display.contains("alpha"));
        assert!(display.contains("end"));
    }

    #[test]
    fn duplicate_display_includes_count() {
        let e = Error::Duplicate {
            name: "alpha".to_string(),
            kind: MarkerKind::Start,
            count: 3,
        };
        assert!(format!("{}", e).contains("3"));
    }

    #[test]
    fn malformed_display_includes_both_indices() {
        let e = Error::Malformed {
            name: "alpha".to_string(),
            start: 9,
            end: 4,
        };
        let display = format!("{}", e);
        assert!(display.contains("9"));
        assert!(display.contains("4"));
    }

    #[test]
    fn storage_error_converts_and_has_source() {
        let inner = StorageError::Io {
            path: "doc.tex".into(),
            source: std::io::Error::other("disk full"),
        };
        let e: Error = inner.into();
        assert!(matches!(e, Error::Storage(_)));
        assert!(StdError::source(&e).is_some());
    }
}

use crate::{LineSink, LineSource, StorageError};

/// An in-memory line store.
///
/// Mirrors the semantics of [`crate::TextFileStore`] including the distinction
/// between "absent" and "empty": a fresh store does not exist until the first
/// write or append. Useful in tests and as scratch storage.
///
/// # Example
///
/// ```rust
/// use blockdoc_line_store::{LineSink, LineSource, MemoryLineStore};
///
/// let mut store = MemoryLineStore::new();
/// store.append_lines(&["% header".to_string()]).unwrap();
/// assert_eq!(store.read_lines().unwrap().unwrap(), vec!["% header"]);
/// ```
pub struct MemoryLineStore {
    lines: Option<Vec<String>>,
}

impl MemoryLineStore {
    /// Create a store whose resource does not exist yet.
    pub fn new() -> Self {
        Self { lines: None }
    }

    /// Create a store with existing content.
    pub fn with_lines(lines: Vec<String>) -> Self {
        Self { lines: Some(lines) }
    }

    /// The current content, if the resource exists.
    pub fn lines(&self) -> Option<&[String]> {
        self.lines.as_deref()
    }
}

impl Default for MemoryLineStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for MemoryLineStore {
    fn exists(&self) -> Result<bool, StorageError> {
        Ok(self.lines.is_some())
    }

    fn read_lines(&mut self) -> Result<Option<Vec<String>>, StorageError> {
        Ok(self.lines.clone())
    }
}

impl LineSink for MemoryLineStore {
    fn write_lines(&mut self, lines: &[String]) -> Result<(), StorageError> {
        self.lines = Some(lines.to_vec());
        Ok(())
    }

    fn append_lines(&mut self, lines: &[String]) -> Result<(), StorageError> {
        self.lines
            .get_or_insert_with(Vec::new)
            .extend(lines.iter().cloned());
        Ok(())
    }
}

//! Core traits for the storage layer.

use crate::StorageError;

/// Read ordered lines from a single text resource.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn LineSource>`.
pub trait LineSource: Send + Sync {
    /// Whether the resource currently exists.
    ///
    /// Absence is a normal state for this layer - a document that has never
    /// been initialized simply does not exist yet.
    fn exists(&self) -> Result<bool, StorageError>;

    /// Read every line of the resource, in order, without line terminators.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - The resource does not exist (not an error condition).
    /// * `Ok(Some(lines))` - The full content as lines.
    /// * `Err(StorageError)` - An underlying storage failure.
    fn read_lines(&mut self) -> Result<Option<Vec<String>>, StorageError>;
}

/// Write ordered lines to a single text resource.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn LineSink>`.
pub trait LineSink: Send + Sync {
    /// Replace the entire resource with `lines`, creating it if absent.
    fn write_lines(&mut self, lines: &[String]) -> Result<(), StorageError>;

    /// Append `lines` to the end of the resource, creating it if absent.
    ///
    /// Existing content is never reordered or rewritten.
    fn append_lines(&mut self, lines: &[String]) -> Result<(), StorageError>;
}

/// Combined read/write line storage.
///
/// Automatically implemented for any type implementing both [`LineSource`]
/// and [`LineSink`].
pub trait LineStore: LineSource + LineSink {}
impl<T: LineSource + LineSink> LineStore for T {}

// Blanket implementations for references and boxes

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn exists(&self) -> Result<bool, StorageError> {
        (**self).exists()
    }

    fn read_lines(&mut self) -> Result<Option<Vec<String>>, StorageError> {
        (*self).read_lines()
    }
}

impl<T: LineSink + ?Sized> LineSink for &mut T {
    fn write_lines(&mut self, lines: &[String]) -> Result<(), StorageError> {
        (*self).write_lines(lines)
    }

    fn append_lines(&mut self, lines: &[String]) -> Result<(), StorageError> {
        (*self).append_lines(lines)
    }
}

impl<T: LineSource + ?Sized> LineSource for Box<T> {
    fn exists(&self) -> Result<bool, StorageError> {
        self.as_ref().exists()
    }

    fn read_lines(&mut self) -> Result<Option<Vec<String>>, StorageError> {
        self.as_mut().read_lines()
    }
}

impl<T: LineSink + ?Sized> LineSink for Box<T> {
    fn write_lines(&mut self, lines: &[String]) -> Result<(), StorageError> {
        self.as_mut().write_lines(lines)
    }

    fn append_lines(&mut self, lines: &[String]) -> Result<(), StorageError> {
        self.as_mut().append_lines(lines)
    }
}

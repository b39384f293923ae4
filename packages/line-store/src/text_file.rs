use std::fs;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path;

use crate::{LineSink, LineSource, StorageError};

/// Line storage backed by a single file on the local filesystem.
///
/// Lines are persisted joined with `\n` and the file always ends with a
/// trailing newline when non-empty, so that appends compose with prior
/// writes. Reading splits on line boundaries and strips terminators.
///
/// The file is re-read and re-written whole on every operation. Documents at
/// this layer are manuscript-scale, and keeping the file plain, directly
/// editable text between runs is the point.
pub struct TextFileStore {
    path: path::PathBuf,
}

impl TextFileStore {
    /// Create a store over `path`.
    ///
    /// The file does not have to exist yet, but if the path exists it must be
    /// a regular file.
    pub fn new(path: impl Into<path::PathBuf>) -> Result<TextFileStore, StorageError> {
        let path = path.into();
        if path.exists() && !path.is_file() {
            return Err(StorageError::NotAFile { path });
        }
        Ok(TextFileStore { path })
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &path::Path {
        &self.path
    }
}

impl LineSource for TextFileStore {
    fn exists(&self) -> Result<bool, StorageError> {
        if self.path.exists() && !self.path.is_file() {
            return Err(StorageError::NotAFile {
                path: self.path.clone(),
            });
        }
        Ok(self.path.is_file())
    }

    fn read_lines(&mut self) -> Result<Option<Vec<String>>, StorageError> {
        if !self.exists()? {
            return Ok(None);
        }
        log::debug!("Reading {}...", self.path.display());
        let content = fs::read_to_string(&self.path)
            .map_err(|source| StorageError::io(&self.path, source))?;
        Ok(Some(content.lines().map(str::to_string).collect()))
    }
}

impl LineSink for TextFileStore {
    fn write_lines(&mut self, lines: &[String]) -> Result<(), StorageError> {
        log::debug!("Writing {} lines to {}...", lines.len(), self.path.display());
        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&self.path, content).map_err(|source| StorageError::io(&self.path, source))
    }

    fn append_lines(&mut self, lines: &[String]) -> Result<(), StorageError> {
        log::debug!(
            "Appending {} lines to {}...",
            lines.len(),
            self.path.display()
        );
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .read(true)
            .open(&self.path)
            .map_err(|source| StorageError::io(&self.path, source))?;

        // A hand-edited file may lack a trailing newline; appending straight
        // after it would glue the first new line onto the last existing one.
        let len = file
            .metadata()
            .map_err(|source| StorageError::io(&self.path, source))?
            .len();
        if len > 0 {
            let mut last = [0u8; 1];
            file.seek(SeekFrom::End(-1))
                .and_then(|_| file.read_exact(&mut last))
                .map_err(|source| StorageError::io(&self.path, source))?;
            if last[0] != b'\n' {
                file.write_all(b"\n")
                    .map_err(|source| StorageError::io(&self.path, source))?;
            }
        }

        for line in lines {
            file.write_all(line.as_bytes())
                .and_then(|_| file.write_all(b"\n"))
                .map_err(|source| StorageError::io(&self.path, source))?;
        }
        Ok(())
    }
}

use std::path;

use blockdoc_line_store::{LineStore, TextFileStore};

use crate::error::Error;
use crate::locate::locate;
use crate::marker;

/// Header written by [`Document::initialize`]: one comment line plus a blank
/// separator.
pub const DEFAULT_HEADER: &[&str] = &["% Machine generated data blocks. Do not edit by hand.", ""];

/// A handle over one flat-text document of named blocks.
///
/// The handle wraps a [`LineStore`] and performs every operation as a
/// blocking read-modify-write cycle against it. Lookup is scan-based: block
/// names are resolved by searching the whole document for their instantiated
/// markers, so uniqueness is enforced lazily at lookup time rather than
/// through a persisted index.
///
/// The document is a shared mutable resource; the handle provides no locking
/// or transaction isolation. Concurrent writers racing on the same path can
/// interleave read and write phases - callers serialize access externally if
/// they need it.
///
/// # Example
///
/// ```rust
/// use blockdoc::Document;
/// use blockdoc_line_store::MemoryLineStore;
///
/// let mut doc = Document::with_store(MemoryLineStore::new(), "<memory>");
/// doc.initialize(true).unwrap();
/// doc.add_block("alpha").unwrap();
/// doc.write_block("alpha", &["x = 1", "y = 2"]).unwrap();
/// assert_eq!(doc.read_block("alpha").unwrap(), vec!["x = 1", "y = 2"]);
/// ```
pub struct Document<S> {
    store: S,
    location: String,
}

impl Document<TextFileStore> {
    /// Open a document stored in the file at `path`.
    ///
    /// The file does not have to exist yet; create it with
    /// [`Document::initialize`].
    pub fn open(path: impl Into<path::PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        let location = path.display().to_string();
        let store = TextFileStore::new(path)?;
        Ok(Document { store, location })
    }
}

impl<S: LineStore> Document<S> {
    /// Wrap an arbitrary line store. `location` is used in error messages.
    pub fn with_store(store: S, location: impl Into<String>) -> Self {
        Document {
            store,
            location: location.into(),
        }
    }

    /// Where this document lives, as reported in errors.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Create or extend the document with the default header.
    ///
    /// If `clear` is true or the document does not exist, the header becomes
    /// the entire content, discarding anything that was there. Otherwise the
    /// header is appended to the end. Fails only on storage errors.
    pub fn initialize(&mut self, clear: bool) -> Result<(), Error> {
        self.initialize_with(clear, DEFAULT_HEADER)
    }

    /// Create or extend the document with a caller-supplied header.
    pub fn initialize_with<L: AsRef<str>>(
        &mut self,
        clear: bool,
        header: &[L],
    ) -> Result<(), Error> {
        let header: Vec<String> = header.iter().map(|line| line.as_ref().to_string()).collect();
        if clear || !self.store.exists()? {
            self.store.write_lines(&header)?;
        } else {
            self.store.append_lines(&header)?;
        }
        Ok(())
    }

    /// Append a new, empty block named `name` to the end of the document.
    ///
    /// Insertion is refused unless a lookup of `name` comes back clean as
    /// "not found": a successful lookup, a duplicate marker, or a malformed
    /// marker pair for this name all mean the name already resolves in the
    /// document, and yield [`Error::AlreadyExists`]. Existing content is
    /// never reordered.
    pub fn add_block(&mut self, name: &str) -> Result<(), Error> {
        if !marker::is_valid_name(name) {
            return Err(Error::InvalidName {
                name: name.to_string(),
            });
        }
        let lines = self.read_required()?;
        match locate(&lines, name) {
            Err(Error::NotFound { .. }) => {}
            Ok(_) | Err(Error::Duplicate { .. }) | Err(Error::Malformed { .. }) => {
                return Err(Error::AlreadyExists {
                    name: name.to_string(),
                })
            }
            Err(other) => return Err(other),
        }

        // Blank separator, then the marker pair with nothing between them:
        // a freshly created block has an empty body.
        self.store.append_lines(&[
            String::new(),
            marker::start_marker(name),
            marker::end_marker(name),
        ])?;
        Ok(())
    }

    /// Read the body of the block named `name`.
    ///
    /// Returns the lines strictly between the markers, empty for an empty
    /// block. Never mutates the document.
    pub fn read_block(&mut self, name: &str) -> Result<Vec<String>, Error> {
        let lines = self.read_required()?;
        let span = locate(&lines, name)?;
        Ok(lines[span.start + 1..span.end].to_vec())
    }

    /// Replace the entire body of the block named `name` with `body`.
    ///
    /// Everything up to and including the start marker, and everything from
    /// the end marker onward, is preserved byte-for-byte. Repeated writes
    /// replace the previous body, they never accumulate. Returns the new
    /// document content for caller convenience.
    ///
    /// The read and the write are two separate steps with no isolation in
    /// between.
    pub fn write_block<L: AsRef<str>>(
        &mut self,
        name: &str,
        body: &[L],
    ) -> Result<Vec<String>, Error> {
        let lines = self.read_required()?;
        let span = locate(&lines, name)?;

        let mut updated = Vec::with_capacity(lines.len() - span.body_len() + body.len());
        updated.extend_from_slice(&lines[..=span.start]);
        updated.extend(body.iter().map(|line| line.as_ref().to_string()));
        updated.extend_from_slice(&lines[span.end..]);

        self.store.write_lines(&updated)?;
        Ok(updated)
    }

    /// The names of all blocks in the document, in document order.
    ///
    /// Extracted from start marker lines; corrupt documents (duplicate or
    /// unpaired markers) are reported as-is, one entry per start marker.
    pub fn blocks(&mut self) -> Result<Vec<String>, Error> {
        let lines = self.read_required()?;
        Ok(lines
            .iter()
            .filter_map(|line| marker::start_marker_name(line))
            .map(str::to_string)
            .collect())
    }

    fn read_required(&mut self) -> Result<Vec<String>, Error> {
        match self.store.read_lines()? {
            Some(lines) => Ok(lines),
            None => Err(Error::MissingDocument {
                document: self.location.clone(),
            }),
        }
    }
}

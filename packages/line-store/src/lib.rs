//! Line-oriented text storage for blockdoc.
//!
//! This is the narrow waist of the blockdoc stack. Everything at this level is
//! ordered lines of text - no marker syntax, no block names, no uniqueness
//! rules. Those belong to the `blockdoc` crate.
//!
//! The storage contract is intentionally small: read all lines, overwrite all
//! lines, append lines, and an existence check. A document that does not exist
//! reads as `Ok(None)` rather than an error, so higher layers can decide what
//! absence means for a given operation.
//!
//! # Example
//!
//! ```rust
//! use blockdoc_line_store::{LineSink, LineSource, MemoryLineStore};
//!
//! let mut store = MemoryLineStore::new();
//! assert!(!store.exists().unwrap());
//!
//! store.write_lines(&["first".to_string(), "second".to_string()]).unwrap();
//! let lines = store.read_lines().unwrap().unwrap();
//! assert_eq!(lines, vec!["first", "second"]);
//! ```

mod error;
mod memory;
mod text_file;
mod traits;

pub use error::StorageError;
pub use memory::MemoryLineStore;
pub use text_file::TextFileStore;
pub use traits::{LineSink, LineSource, LineStore};

//! blockdoc: named, delimited, replaceable text regions in one flat document.
//!
//! A document is an ordered sequence of text lines. A block is a named region
//! of it, delimited by a start and an end marker line built from the block's
//! name:
//!
//! ```text
//! % Machine generated data blocks. Do not edit by hand.
//!
//! % ### <alpha> ###
//! x = 1
//! y = 2
//! % ### </alpha> ###
//! ```
//!
//! Blocks are created empty, read by name, and replaced whole - never
//! appended to. Names address the document with no persisted index:
//! uniqueness and ordering of the markers are validated by scanning at every
//! lookup, which keeps the document plain, directly-editable text between
//! automated runs. Typical use is machine-generated values (tables, fitted
//! constants, computed statistics) spliced into a manuscript that a
//! typesetting pipeline consumes afterwards.
//!
//! # Example
//!
//! ```no_run
//! use blockdoc::Document;
//!
//! # fn main() -> Result<(), blockdoc::Error> {
//! let mut doc = Document::open("doc.tex")?;
//! doc.initialize(true)?;
//! doc.add_block("alpha")?;
//! doc.write_block("alpha", &["x = 1", "y = 2"])?;
//! assert_eq!(doc.read_block("alpha")?, vec!["x = 1", "y = 2"]);
//! # Ok(())
//! # }
//! ```
//!
//! Storage is pluggable through the traits in `blockdoc-line-store`;
//! [`Document::open`] uses the on-disk `TextFileStore`.

mod document;
mod error;
pub mod marker;

pub(crate) mod locate;

pub use document::{Document, DEFAULT_HEADER};
pub use error::{Error, MarkerKind};
pub use locate::{locate, Span};

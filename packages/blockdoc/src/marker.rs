//! Marker line templates and block naming rules.
//!
//! A block is delimited by two literal marker lines built from its name:
//!
//! ```text
//! % ### <NAME> ###
//! ...body lines...
//! % ### </NAME> ###
//! ```
//!
//! The leading `%` keeps markers inert when the document is consumed by a
//! TeX-style typesetting pipeline. Lookup always matches the fully
//! instantiated marker for a concrete name, never a generic pattern, so body
//! text cannot be mistaken for a marker of a different block.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Names are restricted so they cannot collide with the marker syntax
    /// itself: no whitespace, no `<`, `>`, or `/`.
    static ref BLOCK_NAME: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.:-]*$").unwrap();

    /// Matches any start marker and captures its name. Used for listing
    /// blocks, not for locating a specific one.
    static ref ANY_START_MARKER: Regex = Regex::new(r"% ### <([^/>][^<>]*)> ###").unwrap();
}

/// The instantiated start marker line for `name`.
pub fn start_marker(name: &str) -> String {
    format!("% ### <{}> ###", name)
}

/// The instantiated end marker line for `name`.
pub fn end_marker(name: &str) -> String {
    format!("% ### </{}> ###", name)
}

/// Whether `name` is acceptable as a block name.
pub fn is_valid_name(name: &str) -> bool {
    BLOCK_NAME.is_match(name)
}

/// Extract the block name from a start marker line, if the line is one.
pub fn start_marker_name(line: &str) -> Option<&str> {
    ANY_START_MARKER
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str())
}

//! Scan-based block lookup.
//!
//! There is no persisted index: every lookup scans the whole document for the
//! two instantiated marker lines of the requested name and validates
//! uniqueness and ordering on the way. Linear cost per operation, but the
//! document stays plain directly-editable text, and at manuscript scale the
//! scan is negligible.

use crate::error::{Error, MarkerKind};
use crate::marker;

/// The location of a block inside a document.
///
/// Both fields are 0-based line indices of the marker lines themselves; the
/// block's body is the exclusive range `start + 1 .. end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Number of body lines between the markers.
    pub fn body_len(&self) -> usize {
        self.end - self.start - 1
    }
}

/// Find the block named `name` in `lines`.
///
/// A line counts as a marker when it contains the instantiated marker text
/// for `name` as an exact substring. Exactly one start and one end marker
/// must be present, and the start must precede the end.
///
/// # Errors
///
/// * [`Error::NotFound`] - zero start markers, or zero end markers.
/// * [`Error::Duplicate`] - more than one start or end marker.
/// * [`Error::Malformed`] - the end marker does not come strictly after the
///   start marker.
pub fn locate(lines: &[String], name: &str) -> Result<Span, Error> {
    let start = find_unique(lines, &marker::start_marker(name), name, MarkerKind::Start)?;
    let end = find_unique(lines, &marker::end_marker(name), name, MarkerKind::End)?;

    if end <= start {
        return Err(Error::Malformed {
            name: name.to_string(),
            start,
            end,
        });
    }
    Ok(Span { start, end })
}

fn find_unique(
    lines: &[String],
    marker_text: &str,
    name: &str,
    kind: MarkerKind,
) -> Result<usize, Error> {
    let mut matches = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.contains(marker_text))
        .map(|(index, _)| index);

    match (matches.next(), matches.next()) {
        (None, _) => Err(Error::NotFound {
            name: name.to_string(),
            kind,
        }),
        (Some(index), None) => Ok(index),
        (Some(_), Some(_)) => Err(Error::Duplicate {
            name: name.to_string(),
            kind,
            count: 2 + matches.count(),
        }),
    }
}

//! Predicates deciding whether a selection already covers a unit.

use crate::buffer::Document;
use crate::error::ExpandError;
use crate::position::Selection;
use crate::section::SectionRange;

/// Whether `sel` spans exactly one whole line, edge to edge.
///
/// # Errors
///
/// Returns [`ExpandError::OutOfRange`] if `sel` ends past the document.
pub fn is_full_line<D: Document + ?Sized>(doc: &D, sel: &Selection) -> Result<bool, ExpandError> {
    let (start, end) = sel.ordered();
    Ok(start.line == end.line && is_line_granular(doc, sel)?)
}

/// Whether `sel` starts at column 0 and ends at the end of its last line.
///
/// Like [`is_full_line`] but allowing several lines.
///
/// # Errors
///
/// Returns [`ExpandError::OutOfRange`] if `sel` ends past the document.
pub fn is_line_granular<D: Document + ?Sized>(
    doc: &D,
    sel: &Selection,
) -> Result<bool, ExpandError> {
    let (start, end) = sel.ordered();
    Ok(start.column == 0 && end.column == doc.line_len(end.line)?)
}

#[must_use]
/// Whether `sel` already selects the section `range`.
///
/// Line-granular and tolerant at the bottom: a selection starting on the
/// heading line and reaching at least the section's last line counts, so
/// trailing blank lines or a parent-sized selection do not defeat the match.
pub fn is_full_section(sel: &Selection, range: &SectionRange) -> bool {
    let (start, end) = sel.ordered();
    start.line == range.start_line && end.line >= range.end_line
}

#[cfg(test)]
#[path = "tests/classify.rs"]
mod tests;

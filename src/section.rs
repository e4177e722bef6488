//! Section boundaries derived from the heading list.
//!
//! A section runs from its heading line down to the line before the next
//! heading of the same or a shallower level. Deeper headings nest inside it:
//!
//! ```text
//! 0 # A        A: 0..=3
//! 1 text
//! 2 ## B       B: 2..=3
//! 3 text
//! 4 # C        C: 4..=5
//! 5 text
//! ```

use crate::buffer::Document;
use crate::error::ExpandError;
use crate::heading::Heading;
use crate::position::{Position, Selection};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
/// Inclusive line range covered by a section or the whole document.
pub struct SectionRange {
    /// First line, the heading itself for a section.
    pub start_line: usize,
    /// Last line, never before `start_line`.
    pub end_line: usize,
}

impl SectionRange {
    #[must_use]
    /// The range covering every line of `doc`.
    pub fn whole<D: Document + ?Sized>(doc: &D) -> Self {
        Self {
            start_line: 0,
            end_line: doc.last_line(),
        }
    }

    /// Selection from the start of `start_line` to the end of `end_line`.
    ///
    /// # Errors
    ///
    /// Returns [`ExpandError::OutOfRange`] if the range does not fit `doc`.
    pub fn to_selection<D: Document + ?Sized>(&self, doc: &D) -> Result<Selection, ExpandError> {
        Ok(Selection::new(
            Position::new(self.start_line, 0),
            Position::new(self.end_line, doc.line_len(self.end_line)?),
        ))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A heading together with its position in the heading list and its extent.
pub struct Section<'a> {
    /// Index into the heading list.
    pub index: usize,
    /// The heading that opens the section.
    pub heading: &'a Heading,
    /// Lines covered.
    pub range: SectionRange,
}

#[must_use]
/// Index of the nearest heading at or above `line`, if any.
pub fn locate(headings: &[Heading], line: usize) -> Option<usize> {
    headings.iter().rposition(|heading| heading.line <= line)
}

#[must_use]
/// Extent of the section opened by `headings[index]`.
///
/// Ends before the first later heading with level `<=` its own, or at the
/// document's last line when there is none.
///
/// # Panics
///
/// Panics if `index` is not a valid index into `headings`.
pub fn section_range<D: Document + ?Sized>(
    headings: &[Heading],
    index: usize,
    doc: &D,
) -> SectionRange {
    let current = &headings[index];
    let end_line = headings[index + 1..]
        .iter()
        .find(|next| next.level <= current.level)
        .map_or_else(|| doc.last_line(), |next| next.line.saturating_sub(1));
    SectionRange {
        start_line: current.line,
        end_line: end_line.max(current.line),
    }
}

#[must_use]
/// Index of the nearest earlier heading with a strictly smaller level.
///
/// Skipped levels are fine: under `# A` / `### C`, the parent of `C` is `A`.
/// `None` means the parent is the whole document.
///
/// # Panics
///
/// Panics if `index` is not a valid index into `headings`.
pub fn parent(headings: &[Heading], index: usize) -> Option<usize> {
    let level = headings[index].level;
    headings[..index].iter().rposition(|heading| heading.level < level)
}

#[must_use]
/// The section enclosing `line`, or `None` when `line` precedes every heading.
pub fn enclosing<'a, D: Document + ?Sized>(
    headings: &'a [Heading],
    line: usize,
    doc: &D,
) -> Option<Section<'a>> {
    let index = locate(headings, line)?;
    Some(Section {
        index,
        heading: &headings[index],
        range: section_range(headings, index, doc),
    })
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;

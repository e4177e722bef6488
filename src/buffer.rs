//! The host capability the expansion core runs against.
//!
//! Reading the document ([`Document`]) is split from owning the selections
//! ([`TextBuffer`]) so that the engine can be handed a read-only view while the
//! coordinator alone writes selections back.

use crate::error::ExpandError;
use crate::position::{Position, Selection, SelectionSet};

/// Line-indexed, read-only access to document text.
pub trait Document {
    /// Number of lines. A document always has at least one (possibly empty) line.
    fn line_count(&self) -> usize;

    /// Text of line `index`, without its line break.
    ///
    /// # Errors
    ///
    /// Returns [`ExpandError::OutOfRange`] when `index >= line_count()`.
    fn line(&self, index: usize) -> Result<&str, ExpandError>;

    /// Length of line `index` in `char`s.
    ///
    /// # Errors
    ///
    /// Returns [`ExpandError::OutOfRange`] when `index >= line_count()`.
    fn line_len(&self, index: usize) -> Result<usize, ExpandError> {
        Ok(self.line(index)?.chars().count())
    }

    /// Index of the last line.
    fn last_line(&self) -> usize {
        self.line_count().saturating_sub(1)
    }
}

/// A document together with the host's selection state.
pub trait TextBuffer: Document {
    /// Current selections in host order.
    fn selections(&self) -> SelectionSet;

    /// Replaces all selections at once.
    fn set_selections(&mut self, selections: SelectionSet);

    /// The primary cursor.
    fn cursor(&self) -> Position;
}

#[derive(Clone, Debug)]
/// In-memory host: owned lines plus a selection set.
///
/// Used by the command-line and terminal front ends and throughout the tests.
pub struct LineBuffer {
    lines: Vec<String>,
    selections: SelectionSet,
}

impl LineBuffer {
    #[must_use]
    /// Splits `text` on `\n` (dropping a trailing `\r` per line) with a caret at 0:0.
    ///
    /// A trailing newline yields a final empty line, and empty text yields one
    /// empty line, so the buffer is never without lines.
    pub fn new(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self {
            lines,
            selections: vec![Selection::default()],
        }
    }

    #[must_use]
    /// Replaces the initial selections, keeping at least a caret at 0:0.
    pub fn with_selections(mut self, selections: SelectionSet) -> Self {
        self.set_selections(selections);
        self
    }

    #[must_use]
    /// All lines of the buffer.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Clamps `pos` onto the document: the last line at most, and a column no
    /// longer than its line.
    #[must_use]
    pub fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.last_line());
        let len = self.lines[line].chars().count();
        Position::new(line, pos.column.min(len))
    }
}

impl Document for LineBuffer {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Result<&str, ExpandError> {
        self.lines
            .get(index)
            .map(String::as_str)
            .ok_or(ExpandError::OutOfRange {
                line: index,
                line_count: self.lines.len(),
            })
    }
}

impl TextBuffer for LineBuffer {
    fn selections(&self) -> SelectionSet {
        self.selections.clone()
    }

    fn set_selections(&mut self, selections: SelectionSet) {
        self.selections = if selections.is_empty() {
            vec![Selection::default()]
        } else {
            selections
        };
    }

    fn cursor(&self) -> Position {
        self.selections.first().map(|sel| sel.head).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "tests/buffer.rs"]
mod tests;

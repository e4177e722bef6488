//! Cursor positions and (multi-cursor) selections.
//!
//! A [`Selection`] has two ends: the `anchor` where it started and the `head`
//! where the cursor sits. Either may come first in the document. The effective
//! start and end are decided by line number alone, with the anchor winning ties:
//!
//! ```text
//! anchor=(3,4) head=(1,0)  -> start=(1,0) end=(3,4)
//! anchor=(2,5) head=(2,1)  -> start=(2,5) end=(2,1)   (same line, anchor first)
//! ```

use crate::error::ParseSelectionError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
/// A place in the document, addressed by zero-based line and column.
pub struct Position {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column, counted in `char`s of the line.
    pub column: usize,
}

impl Position {
    #[must_use]
    /// Creates a position at `line`, `column`.
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl FromStr for Position {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (line, column) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| ParseSelectionError::MissingColon(s.to_string()))?;
        let line = line
            .parse()
            .map_err(|_| ParseSelectionError::InvalidNumber(line.to_string()))?;
        let column = column
            .parse()
            .map_err(|_| ParseSelectionError::InvalidNumber(column.to_string()))?;
        Ok(Self { line, column })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
/// One cursor's selection. `anchor == head` is a caret.
pub struct Selection {
    /// The fixed end of the selection.
    pub anchor: Position,
    /// The moving end, where the cursor is drawn.
    pub head: Position,
}

impl Selection {
    #[must_use]
    /// Creates a selection from `anchor` to `head`.
    pub const fn new(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    #[must_use]
    /// Creates an empty selection at `at`.
    pub const fn caret(at: Position) -> Self {
        Self {
            anchor: at,
            head: at,
        }
    }

    #[must_use]
    /// Whether the selection is empty.
    pub fn is_caret(&self) -> bool {
        self.anchor == self.head
    }

    #[must_use]
    /// Effective `(start, end)` ordered by line; the anchor is the start on a tie.
    pub fn ordered(&self) -> (Position, Position) {
        if self.anchor.line <= self.head.line {
            (self.anchor, self.head)
        } else {
            (self.head, self.anchor)
        }
    }

    #[must_use]
    /// Effective start of the selection.
    pub fn start(&self) -> Position {
        self.ordered().0
    }

    #[must_use]
    /// Effective end of the selection.
    pub fn end(&self) -> Position {
        self.ordered().1
    }

    #[must_use]
    /// Whether `line` lies between the effective start and end lines.
    pub fn covers_line(&self, line: usize) -> bool {
        let (start, end) = self.ordered();
        (start.line..=end.line).contains(&line)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_caret() {
            write!(f, "{}", self.head)
        } else {
            write!(f, "{}..{}", self.anchor, self.head)
        }
    }
}

impl FromStr for Selection {
    type Err = ParseSelectionError;

    /// Parses `LINE:COL` (a caret) or `LINE:COL..LINE:COL` (anchor..head).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once("..") {
            Some((anchor, head)) => Ok(Self::new(anchor.parse()?, head.parse()?)),
            None => Ok(Self::caret(s.parse()?)),
        }
    }
}

/// Ordered selections, one per cursor.
///
/// Order is significant: hosts use it to keep cursor identity, so nothing here
/// sorts or merges selections.
pub type SelectionSet = Vec<Selection>;

#[cfg(test)]
#[path = "tests/position.rs"]
mod tests;

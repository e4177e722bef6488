//! Error types shared by the expansion engine and its hosts.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Failures of an expansion request.
pub enum ExpandError {
    /// The document contains no heading lines at all.
    #[error("No headings found in note.")]
    NoHeadingsFound,

    /// The reference line comes before every heading.
    #[error("No enclosing section found.")]
    NoEnclosingSection,

    /// A line index outside the document was requested.
    #[error("line {line} is out of range (document has {line_count} lines)")]
    OutOfRange {
        /// The requested line.
        line: usize,
        /// Number of lines in the document.
        line_count: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Failures parsing a textual `LINE:COL[..LINE:COL]` selection.
pub enum ParseSelectionError {
    /// A position lacked the `:` between line and column.
    #[error("expected LINE:COL, got {0:?}")]
    MissingColon(String),

    /// A line or column was not a non-negative integer.
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
}

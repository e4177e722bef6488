//! Heading scan: the only document structure expansion cares about.
//!
//! A heading is a whole line of one to six `#` characters, optionally followed
//! by whitespace and a title. `#tag`, `####### seven` and indented markers are
//! not headings.

use crate::buffer::Document;
use crate::error::ExpandError;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})(?:\s+(.*))?$").expect("heading pattern is valid"));

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// A heading line found in the document.
pub struct Heading {
    /// Line the heading sits on.
    pub line: usize,
    /// Number of leading `#` characters, 1 to 6.
    pub level: usize,
    /// Title after the marker, empty for a bare marker.
    pub text: String,
}

impl Heading {
    #[must_use]
    /// Parses one line, returning a heading at `line` if it matches.
    pub fn parse(line: usize, text: &str) -> Option<Self> {
        let caps = HEADING.captures(text)?;
        Some(Self {
            line,
            level: caps[1].len(),
            text: caps.get(2).map_or_else(String::new, |m| m.as_str().to_string()),
        })
    }
}

/// Scans every line of `doc` and returns its headings in line order.
///
/// An empty result means the document has no headings; callers report that
/// rather than treating it as "already expanded".
///
/// # Errors
///
/// Propagates [`ExpandError::OutOfRange`] from a misbehaving [`Document`].
pub fn build_headings<D: Document + ?Sized>(doc: &D) -> Result<Vec<Heading>, ExpandError> {
    let mut headings = Vec::new();
    for index in 0..doc.line_count() {
        if let Some(heading) = Heading::parse(index, doc.line(index)?) {
            headings.push(heading);
        }
    }
    log::debug!("scanned {} lines, {} headings", doc.line_count(), headings.len());
    Ok(headings)
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;

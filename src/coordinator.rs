//! Applies expansions across every selection and writes the result back once.
//!
//! The host's selection set is read a single time per command, the new set is
//! computed in full, and then it replaces the old one in one
//! [`TextBuffer::set_selections`] call. Selection order is kept as is; only
//! note expansion collapses several selections into one.

use crate::buffer::{Document, TextBuffer};
use crate::error::ExpandError;
use crate::expand::{expand, Granularity, LinePolicy, SectionScope};
use crate::heading::{build_headings, Heading};
use crate::position::{Selection, SelectionSet};
use crate::section::{self, SectionRange};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Informational conditions a host should show the user. Never fatal.
pub enum Notice {
    /// The document has no headings, so sections could not be expanded.
    NoHeadings,
    /// At least one selection sits above the first heading and was left alone.
    NoEnclosingSection,
}

impl Notice {
    #[must_use]
    /// Text shown to the user.
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoHeadings => "No headings found in note.",
            Self::NoEnclosingSection => "No enclosing section found.",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
/// What a command did to the selection set.
pub struct Report {
    /// Granularity finally applied, `None` when the command was cancelled.
    pub granularity: Option<Granularity>,
    /// Whether the selection set differs from before the command.
    pub changed: bool,
    /// Per-selection section scopes, when sections were expanded.
    pub scopes: Vec<SectionScope>,
    /// Condition to surface to the user, if any.
    pub notice: Option<Notice>,
}

impl Report {
    #[must_use]
    /// Heading level reached per selection: `0` for the whole document and
    /// `None` for a selection with no enclosing heading.
    pub fn levels(&self) -> Vec<Option<usize>> {
        self.scopes.iter().map(|scope| scope.level()).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A computed, not yet committed, expansion.
pub struct Outcome {
    /// Selections to write back.
    pub selections: SelectionSet,
    /// Summary of the change.
    pub report: Report,
}

impl Outcome {
    fn unchanged(granularity: Granularity, selections: &[Selection], notice: Notice) -> Self {
        Self {
            selections: selections.to_vec(),
            report: Report {
                granularity: Some(granularity),
                changed: false,
                scopes: Vec::new(),
                notice: Some(notice),
            },
        }
    }
}

/// Computes the expansion of `selections` at `granularity` without touching any host.
///
/// A document without headings is not an error here: the selections come
/// back unchanged with [`Notice::NoHeadings`].
///
/// # Errors
///
/// Returns [`ExpandError::OutOfRange`] on an internal boundary violation.
pub fn plan<D: Document + ?Sized>(
    doc: &D,
    selections: &[Selection],
    granularity: Granularity,
    policy: LinePolicy,
) -> Result<Outcome, ExpandError> {
    let expansion = match expand(doc, selections, granularity, policy) {
        Ok(expansion) => expansion,
        Err(ExpandError::NoHeadingsFound) => {
            return Ok(Outcome::unchanged(granularity, selections, Notice::NoHeadings));
        }
        Err(err) => return Err(err),
    };

    let notice = expansion
        .scopes
        .contains(&SectionScope::Unenclosed)
        .then_some(Notice::NoEnclosingSection);
    let changed = expansion.selections.as_slice() != selections;
    Ok(Outcome {
        selections: expansion.selections,
        report: Report {
            granularity: Some(expansion.granularity),
            changed,
            scopes: expansion.scopes,
            notice,
        },
    })
}

/// Writes a computed outcome back to the host and returns its report.
pub fn commit<B: TextBuffer + ?Sized>(buffer: &mut B, outcome: Outcome) -> Report {
    log::trace!("writing back {} selections", outcome.selections.len());
    buffer.set_selections(outcome.selections);
    outcome.report
}

/// Expands every selection in `buffer` at `granularity` and writes them back.
///
/// # Errors
///
/// Returns [`ExpandError::OutOfRange`] on an internal boundary violation; the
/// buffer is left untouched in that case.
pub fn apply<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    granularity: Granularity,
    policy: LinePolicy,
) -> Result<Report, ExpandError> {
    let before = buffer.selections();
    let outcome = plan(&*buffer, &before, granularity, policy)?;
    if outcome.report.notice == Some(Notice::NoHeadings) {
        return Ok(outcome.report);
    }
    Ok(commit(buffer, outcome))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// The section around the primary cursor.
pub struct CursorSection {
    /// Heading opening the section.
    pub heading: Heading,
    /// Lines it covers.
    pub range: SectionRange,
    /// Headings from the outermost ancestor down to `heading`.
    pub trail: Vec<Heading>,
}

/// Finds the section enclosing the primary cursor, with its ancestor trail.
///
/// # Errors
///
/// Returns [`ExpandError::NoHeadingsFound`] for a document without headings and
/// [`ExpandError::NoEnclosingSection`] when the cursor is above the first one.
pub fn enclosing_section<B: TextBuffer + ?Sized>(
    buffer: &B,
) -> Result<CursorSection, ExpandError> {
    let headings = build_headings(buffer)?;
    if headings.is_empty() {
        return Err(ExpandError::NoHeadingsFound);
    }
    let found = section::enclosing(&headings, buffer.cursor().line, buffer)
        .ok_or(ExpandError::NoEnclosingSection)?;

    let mut trail = vec![found.heading.clone()];
    let mut index = found.index;
    while let Some(parent) = section::parent(&headings, index) {
        trail.push(headings[parent].clone());
        index = parent;
    }
    trail.reverse();

    Ok(CursorSection {
        heading: found.heading.clone(),
        range: found.range,
        trail,
    })
}

#[cfg(test)]
#[path = "tests/coordinator.rs"]
mod tests;

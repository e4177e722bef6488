//! The three expansion operations, each a pure function of document and selections.
//!
//! Nothing here touches host state: operations take the current
//! [`SelectionSet`] and return the one that should replace it. Writing it back
//! is the coordinator's job.

use crate::buffer::Document;
use crate::classify::{is_full_section, is_line_granular};
use crate::error::ExpandError;
use crate::heading::{build_headings, Heading};
use crate::position::{Position, Selection, SelectionSet};
use crate::section::{self, SectionRange};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Unit an expansion grows selections to.
pub enum Granularity {
    /// Whole lines under each selection.
    Line,
    /// The enclosing heading section, or its parent once fully selected.
    Section,
    /// The entire note.
    Note,
}

impl Granularity {
    #[must_use]
    /// Human label, as shown in the chooser.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Section => "Section",
            Self::Note => "Note",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
/// How [`to_line_with`] treats selections that already look finished.
pub enum LinePolicy {
    /// Always normalise to whole lines and never go further.
    #[default]
    Plain,
    /// When every selection is line-granular and already covers its section,
    /// expand sections instead of doing nothing.
    SectionAware,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
/// What a single selection ended up covering after a section expansion.
pub enum SectionScope {
    /// The section of the heading on `line`.
    Heading {
        /// Heading line.
        line: usize,
        /// Heading level, 1 to 6.
        level: usize,
    },
    /// The whole document, after climbing past the outermost heading.
    Document,
    /// No heading encloses this selection; it was left alone.
    Unenclosed,
}

impl SectionScope {
    #[must_use]
    /// Level reached: the heading level, `0` for the document, `None` when unenclosed.
    pub const fn level(self) -> Option<usize> {
        match self {
            Self::Heading { level, .. } => Some(level),
            Self::Document => Some(0),
            Self::Unenclosed => None,
        }
    }

    fn of(heading: &Heading) -> Self {
        Self::Heading {
            line: heading.line,
            level: heading.level,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Result of one expansion operation.
pub struct Expansion {
    /// Operation that actually produced `selections`.
    pub granularity: Granularity,
    /// Replacement selection set.
    pub selections: SelectionSet,
    /// Per-selection scopes, in selection order. Empty unless sections were expanded.
    pub scopes: Vec<SectionScope>,
}

impl Expansion {
    fn plain(granularity: Granularity, selections: SelectionSet) -> Self {
        Self {
            granularity,
            selections,
            scopes: Vec::new(),
        }
    }
}

/// Grows each selection to whole lines: column 0 of its first line through the
/// end of its last line.
///
/// # Errors
///
/// Returns [`ExpandError::OutOfRange`] if a selection ends past the document.
pub fn to_line<D: Document + ?Sized>(
    doc: &D,
    selections: &[Selection],
) -> Result<SelectionSet, ExpandError> {
    selections
        .iter()
        .map(|sel| {
            let (start, end) = sel.ordered();
            Ok(Selection::new(
                Position::new(start.line, 0),
                Position::new(end.line, doc.line_len(end.line)?),
            ))
        })
        .collect()
}

/// Line expansion under an explicit [`LinePolicy`].
///
/// # Errors
///
/// Returns [`ExpandError::OutOfRange`] if a selection ends past the document.
pub fn to_line_with<D: Document + ?Sized>(
    doc: &D,
    selections: &[Selection],
    policy: LinePolicy,
) -> Result<Expansion, ExpandError> {
    if policy == LinePolicy::SectionAware && covers_own_sections(doc, selections)? {
        log::debug!("selections already cover their sections, deferring to section expansion");
        return to_section(doc, selections);
    }
    Ok(Expansion::plain(Granularity::Line, to_line(doc, selections)?))
}

fn covers_own_sections<D: Document + ?Sized>(
    doc: &D,
    selections: &[Selection],
) -> Result<bool, ExpandError> {
    let headings = build_headings(doc)?;
    if headings.is_empty() {
        return Ok(false);
    }
    for sel in selections {
        if !is_line_granular(doc, sel)? {
            return Ok(false);
        }
        match section::enclosing(&headings, sel.start().line, doc) {
            Some(found) if is_full_section(sel, &found.range) => {}
            _ => return Ok(false),
        }
    }
    Ok(true)
}

/// Grows each selection to its enclosing heading section, independently.
///
/// A selection that already covers its section climbs to the nearest
/// shallower heading, or to the whole document when there is none. A
/// selection above the first heading is returned unchanged.
///
/// # Errors
///
/// Returns [`ExpandError::NoHeadingsFound`] when the document has no headings
/// (nothing is expanded), or [`ExpandError::OutOfRange`] if a computed range
/// does not fit the document.
pub fn to_section<D: Document + ?Sized>(
    doc: &D,
    selections: &[Selection],
) -> Result<Expansion, ExpandError> {
    let headings = build_headings(doc)?;
    if headings.is_empty() {
        return Err(ExpandError::NoHeadingsFound);
    }

    let mut expanded = Vec::with_capacity(selections.len());
    let mut scopes = Vec::with_capacity(selections.len());
    for sel in selections {
        let (next, scope) = expand_section(doc, &headings, sel)?;
        log::debug!("section: {sel} -> {next} ({scope:?})");
        expanded.push(next);
        scopes.push(scope);
    }

    Ok(Expansion {
        granularity: Granularity::Section,
        selections: expanded,
        scopes,
    })
}

fn expand_section<D: Document + ?Sized>(
    doc: &D,
    headings: &[Heading],
    sel: &Selection,
) -> Result<(Selection, SectionScope), ExpandError> {
    if covers_document(doc, sel)? {
        return Ok((*sel, SectionScope::Document));
    }

    let Some(current) = section::enclosing(headings, sel.start().line, doc) else {
        return Ok((*sel, SectionScope::Unenclosed));
    };

    if !is_full_section(sel, &current.range) {
        return Ok((
            current.range.to_selection(doc)?,
            SectionScope::of(current.heading),
        ));
    }

    match section::parent(headings, current.index) {
        Some(parent) => {
            let range = section::section_range(headings, parent, doc);
            Ok((range.to_selection(doc)?, SectionScope::of(&headings[parent])))
        }
        None => Ok((
            SectionRange::whole(doc).to_selection(doc)?,
            SectionScope::Document,
        )),
    }
}

/// Whether `sel` already spans every line of `doc`, edge to edge.
///
/// Checked before locating a heading, so a note whose first line is plain
/// text stays at document scope instead of reading as unenclosed.
fn covers_document<D: Document + ?Sized>(doc: &D, sel: &Selection) -> Result<bool, ExpandError> {
    let (start, end) = sel.ordered();
    Ok(start.line == 0 && end.line >= doc.last_line() && is_line_granular(doc, sel)?)
}

/// Replaces every selection with a single one spanning the whole document.
///
/// # Errors
///
/// Returns [`ExpandError::OutOfRange`] if the document reports no lines.
pub fn to_note<D: Document + ?Sized>(doc: &D) -> Result<SelectionSet, ExpandError> {
    Ok(vec![SectionRange::whole(doc).to_selection(doc)?])
}

/// Runs the operation for `granularity`.
///
/// # Errors
///
/// Whatever the chosen operation returns.
pub fn expand<D: Document + ?Sized>(
    doc: &D,
    selections: &[Selection],
    granularity: Granularity,
    policy: LinePolicy,
) -> Result<Expansion, ExpandError> {
    match granularity {
        Granularity::Line => to_line_with(doc, selections, policy),
        Granularity::Section => to_section(doc, selections),
        Granularity::Note => Ok(Expansion::plain(Granularity::Note, to_note(doc)?)),
    }
}

#[cfg(test)]
#[path = "tests/expand.rs"]
mod tests;

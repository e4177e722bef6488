//! Smart expand: one entry point that escalates through the granularities.
//!
//! ```text
//! TryLine --unchanged--> TrySection --unchanged--> TryNote --> Done
//!    |                       |
//!    +------changed----------+------------------------------> Done
//! ```
//!
//! Every invocation starts at `TryLine`; nothing is remembered between calls
//! beyond the selections the host already holds. Line expansion here is always
//! [`LinePolicy::Plain`], since escalation is this module's job.

use crate::buffer::{Document, TextBuffer};
use crate::coordinator::{commit, plan, Outcome, Report};
use crate::error::ExpandError;
use crate::expand::{Granularity, LinePolicy};
use crate::position::Selection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// States of the escalation machine.
pub enum SmartState {
    /// Attempt whole-line expansion.
    TryLine,
    /// Attempt section expansion.
    TrySection,
    /// Select the whole note; always terminal.
    TryNote,
    /// Finished.
    Done,
}

impl SmartState {
    #[must_use]
    /// Operation attempted in this state, `None` once done.
    pub const fn granularity(self) -> Option<Granularity> {
        match self {
            Self::TryLine => Some(Granularity::Line),
            Self::TrySection => Some(Granularity::Section),
            Self::TryNote => Some(Granularity::Note),
            Self::Done => None,
        }
    }

    #[must_use]
    /// Next state after an attempt that did or did not change the selections.
    pub const fn advance(self, changed: bool) -> Self {
        match self {
            _ if changed => Self::Done,
            Self::TryLine => Self::TrySection,
            Self::TrySection => Self::TryNote,
            Self::TryNote | Self::Done => Self::Done,
        }
    }
}

/// Runs the escalation over `selections` without touching a host.
///
/// A notice raised on the way (say, no headings during the section attempt) is
/// kept in the final report even when a later stage goes on to succeed.
///
/// # Errors
///
/// Returns [`ExpandError::OutOfRange`] on an internal boundary violation.
pub fn smart_plan<D: Document + ?Sized>(
    doc: &D,
    selections: &[Selection],
) -> Result<Outcome, ExpandError> {
    let mut outcome = plan(doc, selections, Granularity::Line, LinePolicy::Plain)?;
    log::debug!("smart expand: TryLine changed={}", outcome.report.changed);
    let mut state = SmartState::TryLine.advance(outcome.report.changed);
    let mut notice = outcome.report.notice;

    while let Some(granularity) = state.granularity() {
        outcome = plan(doc, &outcome.selections, granularity, LinePolicy::Plain)?;
        log::debug!("smart expand: {state:?} changed={}", outcome.report.changed);
        notice = notice.or(outcome.report.notice);
        state = state.advance(outcome.report.changed);
    }

    outcome.report.notice = outcome.report.notice.or(notice);
    Ok(outcome)
}

/// Smart-expands every selection in `buffer` and writes the result back once.
///
/// # Errors
///
/// Returns [`ExpandError::OutOfRange`] on an internal boundary violation; the
/// buffer is left untouched in that case.
pub fn smart_expand<B: TextBuffer + ?Sized>(buffer: &mut B) -> Result<Report, ExpandError> {
    let before = buffer.selections();
    let outcome = smart_plan(&*buffer, &before)?;
    Ok(commit(buffer, outcome))
}

#[cfg(test)]
#[path = "tests/smart.rs"]
mod tests;

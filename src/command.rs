//! The user-facing command surface and its dispatch.
//!
//! Binding commands to keys or menus is up to the host; this module only maps
//! a [`Command`] onto the expansion operations. The three-way chooser is a
//! capability the host injects, so presentation never lives here.

use crate::buffer::TextBuffer;
use crate::coordinator::{apply, Report};
use crate::error::ExpandError;
use crate::expand::{Granularity, LinePolicy};
use crate::smart::smart_expand;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
/// Commands a host can expose.
pub enum Command {
    /// Ask the user which granularity to expand to, then expand.
    #[value(name = "expand-choose")]
    ExpandChoose,
    /// Expand to whole lines.
    #[value(name = "expand-line")]
    ExpandLine,
    /// Expand to the enclosing section, climbing when already selected.
    #[value(name = "expand-section")]
    ExpandSection,
    /// Select the whole note.
    #[value(name = "expand-note")]
    ExpandNote,
    /// Escalate line → section → note until something changes.
    #[value(name = "smart-expand")]
    SmartExpand,
}

impl Command {
    /// Every command, in menu order.
    pub const ALL: [Self; 5] = [
        Self::ExpandChoose,
        Self::ExpandLine,
        Self::ExpandSection,
        Self::ExpandNote,
        Self::SmartExpand,
    ];

    #[must_use]
    /// Stable identifier for bindings.
    pub const fn id(self) -> &'static str {
        match self {
            Self::ExpandChoose => "expand-choose",
            Self::ExpandLine => "expand-line",
            Self::ExpandSection => "expand-section",
            Self::ExpandNote => "expand-note",
            Self::SmartExpand => "smart-expand",
        }
    }

    #[must_use]
    /// Name shown in command palettes.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ExpandChoose => "Expand: Choose Line / Section / Note",
            Self::ExpandLine => "Expand: Line",
            Self::ExpandSection => "Expand: Section",
            Self::ExpandNote => "Expand: Note",
            Self::SmartExpand => "Expand: Smart",
        }
    }

    #[must_use]
    /// Looks a command up by its [`id`](Self::id).
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.id() == id)
    }
}

impl From<Granularity> for Command {
    fn from(granularity: Granularity) -> Self {
        match granularity {
            Granularity::Line => Self::ExpandLine,
            Granularity::Section => Self::ExpandSection,
            Granularity::Note => Self::ExpandNote,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// One entry offered by the chooser.
pub struct Choice {
    /// Text shown to the user.
    pub label: &'static str,
    /// Granularity dispatched when picked.
    pub granularity: Granularity,
}

/// Entries offered for [`Command::ExpandChoose`].
pub const CHOICES: [Choice; 3] = [
    Choice {
        label: "Expand to Line",
        granularity: Granularity::Line,
    },
    Choice {
        label: "Expand to Section",
        granularity: Granularity::Section,
    },
    Choice {
        label: "Expand to Note",
        granularity: Granularity::Note,
    },
];

/// Key hints a chooser may display, as `(keys, purpose)`.
pub const CHOOSER_INSTRUCTIONS: [(&str, &str); 3] = [
    ("↑↓", "to navigate"),
    ("↵", "to choose"),
    ("esc", "to dismiss"),
];

/// Host capability presenting [`CHOICES`] to the user.
pub trait Chooser {
    /// Returns the picked granularity, or `None` if the user dismissed the chooser.
    fn choose(&mut self, choices: &[Choice]) -> Option<Granularity>;
}

impl<F> Chooser for F
where
    F: FnMut(&[Choice]) -> Option<Granularity>,
{
    fn choose(&mut self, choices: &[Choice]) -> Option<Granularity> {
        self(choices)
    }
}

/// Runs `command` against `buffer`.
///
/// `chooser` is consulted only for [`Command::ExpandChoose`]; a dismissed
/// chooser returns an empty report and leaves the buffer alone.
///
/// # Errors
///
/// Returns [`ExpandError::OutOfRange`] on an internal boundary violation.
pub fn run<B, C>(
    buffer: &mut B,
    command: Command,
    chooser: &mut C,
    policy: LinePolicy,
) -> Result<Report, ExpandError>
where
    B: TextBuffer + ?Sized,
    C: Chooser + ?Sized,
{
    log::debug!("running {command}");
    match command {
        Command::ExpandChoose => match chooser.choose(&CHOICES) {
            Some(granularity) => apply(buffer, granularity, policy),
            None => {
                log::debug!("chooser dismissed");
                Ok(Report::default())
            }
        },
        Command::ExpandLine => apply(buffer, Granularity::Line, policy),
        Command::ExpandSection => apply(buffer, Granularity::Section, policy),
        Command::ExpandNote => apply(buffer, Granularity::Note, policy),
        Command::SmartExpand => smart_expand(buffer),
    }
}

#[cfg(test)]
#[path = "tests/command.rs"]
mod tests;

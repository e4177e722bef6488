//! The interactive session: a document, its selections and what the UI shows.
//!
//! The terminal front end is just another host of the expansion core. It owns
//! a [`LineBuffer`], moves carets in response to keys and runs commands through
//! [`command::run`], showing any notice in the status bar instead of failing.

use crate::buffer::{Document, LineBuffer, TextBuffer};
use crate::command::{self, Choice, Command, CHOICES};
use crate::coordinator::{enclosing_section, Report};
use crate::error::ExpandError;
use crate::expand::{Granularity, LinePolicy};
use crate::position::{Position, Selection};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Determines which UI screen renders and how input is interpreted.
pub enum View {
    /// The document with its selections.
    Document,
    /// The line / section / note chooser popup over the document.
    Choose,
}

/// Bridges the document buffer and the terminal UI.
pub struct AppState {
    /// Document text and selections.
    pub buffer: LineBuffer,
    /// File the document was read from.
    pub file_path: PathBuf,
    /// Active UI screen determining input handling.
    pub current_view: View,
    /// Highlighted entry while the chooser is open.
    pub choice_index: usize,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// First document line shown.
    pub scroll: usize,
    /// Line expansion policy from the configuration.
    pub policy: LinePolicy,
    /// Report of the most recent command.
    pub last_report: Option<Report>,
}

impl AppState {
    #[must_use]
    /// Starts a session on `buffer`, read from `file_path`.
    pub fn new(buffer: LineBuffer, file_path: PathBuf, policy: LinePolicy) -> Self {
        Self {
            buffer,
            file_path,
            current_view: View::Document,
            choice_index: 0,
            message: None,
            scroll: 0,
            policy,
            last_report: None,
        }
    }

    /// Runs `command`, opening the chooser instead for [`Command::ExpandChoose`].
    pub fn run_command(&mut self, command: Command) {
        if command == Command::ExpandChoose {
            self.current_view = View::Choose;
            self.choice_index = 0;
            return;
        }
        // Choose never reaches here, so the chooser is never consulted.
        let mut dismiss = |_: &[Choice]| None::<Granularity>;
        let result = command::run(&mut self.buffer, command, &mut dismiss, self.policy);
        self.record(result);
    }

    fn record(&mut self, result: Result<Report, ExpandError>) {
        match result {
            Ok(report) => {
                self.message = report.notice.map(|notice| notice.message().to_string());
                self.last_report = Some(report);
            }
            Err(err) => {
                log::error!("expansion failed: {err}");
                self.message = Some(format!("Error: {err}"));
            }
        }
    }

    /// Moves the chooser highlight up.
    pub fn choice_up(&mut self) {
        self.choice_index = self.choice_index.saturating_sub(1);
    }

    /// Moves the chooser highlight down.
    pub fn choice_down(&mut self) {
        if self.choice_index + 1 < CHOICES.len() {
            self.choice_index += 1;
        }
    }

    /// Dispatches the highlighted chooser entry and closes the chooser.
    pub fn confirm_choice(&mut self) {
        self.current_view = View::Document;
        if let Some(choice) = CHOICES.get(self.choice_index) {
            self.run_command(Command::from(choice.granularity));
        }
    }

    /// Closes the chooser without doing anything.
    pub fn cancel_choice(&mut self) {
        self.current_view = View::Document;
    }

    /// Moves the primary cursor by `lines` and `columns`.
    ///
    /// With `extend` the primary selection keeps its anchor; otherwise every
    /// selection collapses to a caret at the new position.
    pub fn move_cursor(&mut self, lines: isize, columns: isize, extend: bool) {
        let primary = self
            .buffer
            .selections()
            .first()
            .copied()
            .unwrap_or_default();
        let head = primary.head;
        let line = head.line.saturating_add_signed(lines);
        let target = self.buffer.clamp(Position::new(line, head.column));
        let target = self.buffer.clamp(Position::new(
            target.line,
            target.column.saturating_add_signed(columns),
        ));
        let next = if extend {
            Selection::new(primary.anchor, target)
        } else {
            Selection::caret(target)
        };
        self.buffer.set_selections(vec![next]);
        self.message = None;
    }

    /// Adds a caret on the line below the last selection.
    pub fn add_caret_below(&mut self) {
        let mut selections = self.buffer.selections();
        let Some(last) = selections.last().copied() else {
            return;
        };
        let below = self.buffer.clamp(Position::new(last.end().line + 1, last.head.column));
        if selections.iter().any(|sel| sel.head == below) {
            return;
        }
        selections.push(Selection::caret(below));
        self.buffer.set_selections(selections);
    }

    /// Drops all selections but a caret at the primary cursor.
    pub fn collapse(&mut self) {
        let cursor = self.buffer.cursor();
        self.buffer.set_selections(vec![Selection::caret(cursor)]);
        self.message = None;
    }

    #[must_use]
    /// Heading trail of the section around the primary cursor, e.g. `A › B`.
    pub fn breadcrumb(&self) -> String {
        match enclosing_section(&self.buffer) {
            Ok(section) => section
                .trail
                .iter()
                .map(|heading| heading.text.as_str())
                .collect::<Vec<_>>()
                .join(" › "),
            Err(ExpandError::NoHeadingsFound) => "(no headings)".to_string(),
            Err(_) => "(top)".to_string(),
        }
    }

    #[must_use]
    /// Selected `char` column ranges on `line`, end exclusive.
    pub fn selected_columns(&self, line: usize) -> Vec<(usize, usize)> {
        let len = self.buffer.line_len(line).unwrap_or(0);
        self.buffer
            .selections()
            .iter()
            .filter(|sel| !sel.is_caret() && sel.covers_line(line))
            .map(|sel| {
                let (start, end) = sel.ordered();
                if start.line == end.line {
                    (start.column.min(end.column), start.column.max(end.column))
                } else if line == start.line {
                    (start.column, len)
                } else if line == end.line {
                    (0, end.column)
                } else {
                    (0, len)
                }
            })
            .collect()
    }

    #[must_use]
    /// Columns on `line` where a selection head (a cursor) is drawn.
    pub fn cursor_columns(&self, line: usize) -> Vec<usize> {
        self.buffer
            .selections()
            .iter()
            .filter(|sel| sel.head.line == line)
            .map(|sel| sel.head.column)
            .collect()
    }

    /// Adjusts `scroll` so the primary cursor stays `margin` lines inside a
    /// viewport of `height` lines.
    pub fn scroll_into_view(&mut self, height: usize, margin: usize) {
        if height == 0 {
            return;
        }
        let margin = margin.min(height.saturating_sub(1) / 2);
        let line = self.buffer.cursor().line;
        if line < self.scroll + margin {
            self.scroll = line.saturating_sub(margin);
        } else if line + margin >= self.scroll + height {
            self.scroll = line + margin + 1 - height;
        }
        let max_scroll = self.buffer.line_count().saturating_sub(height);
        self.scroll = self.scroll.min(max_scroll);
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;

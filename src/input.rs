//! Loading documents and selections from the outside world.
//!
//! The command line names a file and, optionally, selections written as
//! `LINE:COL` or `LINE:COL..LINE:COL`. Batch mode also needs a chooser that
//! works without a terminal UI, so a line-based prompt lives here too.

use crate::buffer::LineBuffer;
use crate::command::{Choice, Chooser, CHOOSER_INSTRUCTIONS};
use crate::error::ParseSelectionError;
use crate::expand::Granularity;
use crate::position::{Selection, SelectionSet};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Reads `path` into a buffer with the given selections, clamped onto the text.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_buffer(path: &Path, selections: &[Selection]) -> io::Result<LineBuffer> {
    let text = fs::read_to_string(path)?;
    let buffer = LineBuffer::new(&text);
    let clamped: SelectionSet = selections
        .iter()
        .map(|sel| Selection::new(buffer.clamp(sel.anchor), buffer.clamp(sel.head)))
        .collect();
    Ok(buffer.with_selections(clamped))
}

/// Parses every textual selection, stopping at the first malformed one.
///
/// # Errors
///
/// Returns the [`ParseSelectionError`] of the first entry that fails.
pub fn parse_selections<S: AsRef<str>>(texts: &[S]) -> Result<SelectionSet, ParseSelectionError> {
    texts.iter().map(|text| text.as_ref().parse()).collect()
}

/// Chooser asking on a writer and reading the answer from a reader.
///
/// Accepts the option number, the full label, or the bare granularity name
/// (case-insensitive). An empty line or end of input dismisses it.
pub struct PromptChooser<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PromptChooser<R, W> {
    /// Creates a prompt over `reader` and `writer`.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn prompt(&mut self, choices: &[Choice]) -> io::Result<Option<Granularity>> {
        writeln!(self.writer, "What to expand?")?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.writer, "  {}. {}", i + 1, choice.label)?;
        }
        let hints: Vec<String> = CHOOSER_INSTRUCTIONS
            .iter()
            .map(|(keys, purpose)| format!("{keys} {purpose}"))
            .collect();
        write!(self.writer, "({}) > ", hints.join(", "))?;
        self.writer.flush()?;

        let mut answer = String::new();
        self.reader.read_line(&mut answer)?;
        Ok(pick(choices, answer.trim()))
    }
}

fn pick(choices: &[Choice], answer: &str) -> Option<Granularity> {
    if answer.is_empty() {
        return None;
    }
    if let Ok(n) = answer.parse::<usize>() {
        return choices.get(n.checked_sub(1)?).map(|choice| choice.granularity);
    }
    choices
        .iter()
        .find(|choice| {
            choice.label.eq_ignore_ascii_case(answer)
                || choice.granularity.label().eq_ignore_ascii_case(answer)
        })
        .map(|choice| choice.granularity)
}

impl<R: BufRead, W: Write> Chooser for PromptChooser<R, W> {
    fn choose(&mut self, choices: &[Choice]) -> Option<Granularity> {
        match self.prompt(choices) {
            Ok(picked) => picked,
            Err(err) => {
                log::warn!("chooser prompt failed: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;

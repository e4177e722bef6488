use super::{load_buffer, parse_selections, PromptChooser};
use crate::buffer::TextBuffer;
use crate::command::{Chooser, CHOICES};
use crate::expand::Granularity;
use crate::position::{Position, Selection};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn ask(answer: &str) -> (Option<Granularity>, String) {
    let mut output = Vec::new();
    let picked = PromptChooser::new(Cursor::new(answer.as_bytes()), &mut output).choose(&CHOICES);
    (picked, String::from_utf8(output).unwrap())
}

#[test]
fn test_load_buffer_clamps_selections() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "# Title\nbody").unwrap();

    let selections = parse_selections(&["1:2", "0:99..7:0"]).unwrap();
    let buffer = load_buffer(file.path(), &selections).unwrap();
    assert_eq!(
        buffer.selections(),
        vec![
            Selection::caret(Position::new(1, 2)),
            Selection::new(Position::new(0, 7), Position::new(1, 0)),
        ]
    );
}

#[test]
fn test_load_buffer_keeps_default_caret() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "text").unwrap();
    let buffer = load_buffer(file.path(), &[]).unwrap();
    assert_eq!(buffer.selections(), vec![Selection::default()]);
}

#[test]
fn test_parse_selections_reports_first_error() {
    assert!(parse_selections(&["1:0", "oops"]).is_err());
}

#[test]
fn test_prompt_accepts_number_label_or_name() {
    assert_eq!(ask("2\n").0, Some(Granularity::Section));
    assert_eq!(ask("expand to note\n").0, Some(Granularity::Note));
    assert_eq!(ask("Line\n").0, Some(Granularity::Line));
}

#[test]
fn test_prompt_dismissed() {
    assert_eq!(ask("\n").0, None);
    assert_eq!(ask("").0, None);
    assert_eq!(ask("0\n").0, None);
    assert_eq!(ask("9\n").0, None);
}

#[test]
fn test_prompt_lists_choices() {
    let (_, shown) = ask("1\n");
    assert!(shown.contains("What to expand?"));
    assert!(shown.contains("1. Expand to Line"));
    assert!(shown.contains("esc to dismiss"));
}

use super::{expand, to_line, to_line_with, to_note, to_section};
use super::{Granularity, LinePolicy, SectionScope};
use crate::buffer::LineBuffer;
use crate::error::ExpandError;
use crate::position::{Position, Selection};

const NESTED: &str = "# A\ntext1\n## B\ntext2\n# C\ntext3";

fn caret(line: usize, column: usize) -> Selection {
    Selection::caret(Position::new(line, column))
}

fn span(start: (usize, usize), end: (usize, usize)) -> Selection {
    Selection::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
}

#[test]
fn test_to_line_expands_each_selection() {
    let doc = LineBuffer::new("alpha\nbeta\ngamma");
    let out = to_line(&doc, &[caret(0, 2), span((2, 3), (1, 1))]).unwrap();
    assert_eq!(out, vec![span((0, 0), (0, 5)), span((1, 0), (2, 5))]);
}

#[test]
fn test_to_line_is_idempotent() {
    let doc = LineBuffer::new("alpha\nbeta\ngamma");
    let once = to_line(&doc, &[caret(1, 2), caret(2, 0)]).unwrap();
    let twice = to_line(&doc, &once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_to_line_plain_does_not_reach_sections() {
    let doc = LineBuffer::new(NESTED);
    let section = span((2, 0), (3, 5));
    let out = to_line_with(&doc, &[section], LinePolicy::Plain).unwrap();
    assert_eq!(out.granularity, Granularity::Line);
    assert_eq!(out.selections, vec![section]);
    assert!(out.scopes.is_empty());
}

#[test]
fn test_to_line_section_aware_defers_when_section_selected() {
    let doc = LineBuffer::new(NESTED);
    let out = to_line_with(&doc, &[span((2, 0), (3, 5))], LinePolicy::SectionAware).unwrap();
    assert_eq!(out.granularity, Granularity::Section);
    assert_eq!(out.selections, vec![span((0, 0), (3, 5))]);
}

#[test]
fn test_to_line_section_aware_still_expands_lines_first() {
    let doc = LineBuffer::new(NESTED);
    let out = to_line_with(&doc, &[caret(3, 1)], LinePolicy::SectionAware).unwrap();
    assert_eq!(out.granularity, Granularity::Line);
    assert_eq!(out.selections, vec![span((3, 0), (3, 5))]);
}

#[test]
fn test_to_section_climbs_to_document() {
    let doc = LineBuffer::new(NESTED);

    let first = to_section(&doc, &[caret(3, 2)]).unwrap();
    assert_eq!(first.selections, vec![span((2, 0), (3, 5))]);
    assert_eq!(first.scopes, vec![SectionScope::Heading { line: 2, level: 2 }]);

    let second = to_section(&doc, &first.selections).unwrap();
    assert_eq!(second.selections, vec![span((0, 0), (3, 5))]);
    assert_eq!(second.scopes[0].level(), Some(1));

    let third = to_section(&doc, &second.selections).unwrap();
    assert_eq!(third.selections, vec![span((0, 0), (5, 5))]);
    assert_eq!(third.scopes, vec![SectionScope::Document]);

    let fourth = to_section(&doc, &third.selections).unwrap();
    assert_eq!(fourth.selections, third.selections);
    assert_eq!(fourth.scopes[0].level(), Some(0));
}

#[test]
fn test_to_section_levels_strictly_decrease() {
    let doc = LineBuffer::new("# A\n## B\n### C\n#### D\ntext");
    let mut selections = vec![caret(4, 0)];
    let mut levels = Vec::new();
    for _ in 0..5 {
        let out = to_section(&doc, &selections).unwrap();
        levels.push(out.scopes[0].level());
        selections = out.selections;
    }
    assert_eq!(
        levels,
        vec![Some(4), Some(3), Some(2), Some(1), Some(0)]
    );
}

#[test]
fn test_to_section_multi_selection_is_independent() {
    let doc = LineBuffer::new("# A\none\ntwo\n# B\nthree\nfour");
    let out = to_section(&doc, &[caret(1, 0), caret(4, 0)]).unwrap();
    assert_eq!(
        out.selections,
        vec![span((0, 0), (2, 3)), span((3, 0), (5, 4))]
    );
    assert_eq!(out.scopes[0], SectionScope::Heading { line: 0, level: 1 });
    assert_eq!(out.scopes[1], SectionScope::Heading { line: 3, level: 1 });
}

#[test]
fn test_to_section_leaves_unenclosed_selection_alone() {
    let doc = LineBuffer::new("intro\n# A\nbody");
    let out = to_section(&doc, &[caret(0, 2), caret(2, 1)]).unwrap();
    assert_eq!(out.selections, vec![caret(0, 2), span((1, 0), (2, 4))]);
    assert_eq!(out.scopes[0], SectionScope::Unenclosed);
    assert_eq!(out.scopes[0].level(), None);
}

#[test]
fn test_document_scope_holds_when_first_line_is_not_a_heading() {
    let doc = LineBuffer::new("intro\n# A\nbody");

    let first = to_section(&doc, &[caret(2, 1)]).unwrap();
    assert_eq!(first.selections, vec![span((1, 0), (2, 4))]);

    let second = to_section(&doc, &first.selections).unwrap();
    assert_eq!(second.selections, vec![span((0, 0), (2, 4))]);
    assert_eq!(second.scopes, vec![SectionScope::Document]);

    let third = to_section(&doc, &second.selections).unwrap();
    assert_eq!(third.selections, second.selections);
    assert_eq!(third.scopes, vec![SectionScope::Document]);
    assert_eq!(third.scopes[0].level(), Some(0));
}

#[test]
fn test_caret_in_one_line_note_still_expands() {
    let doc = LineBuffer::new("# A");
    let out = to_section(&doc, &[caret(0, 0)]).unwrap();
    assert_eq!(out.selections, vec![span((0, 0), (0, 3))]);
    assert_eq!(out.scopes, vec![SectionScope::Document]);
}

#[test]
fn test_caret_on_one_line_section_counts_as_selected() {
    // Matching is by line, so a caret on a heading whose section is that one
    // line already covers it and climbs straight past it.
    let doc = LineBuffer::new("# A\n# B\ntext");
    let out = to_section(&doc, &[caret(0, 0)]).unwrap();
    assert_eq!(out.selections, vec![span((0, 0), (2, 4))]);
    assert_eq!(out.scopes, vec![SectionScope::Document]);
}

#[test]
fn test_to_section_without_headings() {
    let doc = LineBuffer::new("plain\ntext");
    assert_eq!(
        to_section(&doc, &[caret(0, 0)]),
        Err(ExpandError::NoHeadingsFound)
    );
}

#[test]
fn test_to_section_uses_effective_start_line() {
    let doc = LineBuffer::new(NESTED);
    // Head above anchor: the head's line decides the section.
    let out = to_section(&doc, &[span((5, 1), (3, 0))]).unwrap();
    assert_eq!(out.selections, vec![span((2, 0), (3, 5))]);
}

#[test]
fn test_to_note_collapses_to_one_selection() {
    let doc = LineBuffer::new(NESTED);
    let out = to_note(&doc).unwrap();
    assert_eq!(out, vec![span((0, 0), (5, 5))]);

    let via_expand = expand(
        &doc,
        &[caret(0, 0), caret(3, 0), caret(5, 1)],
        Granularity::Note,
        LinePolicy::Plain,
    )
    .unwrap();
    assert_eq!(via_expand.selections.len(), 1);
    assert_eq!(via_expand.granularity, Granularity::Note);
}

#[test]
fn test_out_of_range_selection_is_an_error() {
    let doc = LineBuffer::new("one line");
    assert_eq!(
        to_line(&doc, &[caret(4, 0)]),
        Err(ExpandError::OutOfRange {
            line: 4,
            line_count: 1
        })
    );
}

use super::{enclosing, locate, parent, section_range, SectionRange};
use crate::buffer::LineBuffer;
use crate::heading::build_headings;
use crate::position::{Position, Selection};

const NESTED: &str = "# A\ntext1\n## B\ntext2\n# C\ntext3";

fn range(start_line: usize, end_line: usize) -> SectionRange {
    SectionRange {
        start_line,
        end_line,
    }
}

#[test]
fn test_locate_nearest_heading_at_or_before() {
    let doc = LineBuffer::new(NESTED);
    let headings = build_headings(&doc).unwrap();
    assert_eq!(locate(&headings, 0), Some(0));
    assert_eq!(locate(&headings, 1), Some(0));
    assert_eq!(locate(&headings, 2), Some(1));
    assert_eq!(locate(&headings, 3), Some(1));
    assert_eq!(locate(&headings, 5), Some(2));
}

#[test]
fn test_locate_before_first_heading() {
    let doc = LineBuffer::new("intro\n\n# A\nbody");
    let headings = build_headings(&doc).unwrap();
    assert_eq!(locate(&headings, 0), None);
    assert_eq!(locate(&headings, 1), None);
    assert_eq!(locate(&headings, 2), Some(0));
}

#[test]
fn test_ranges_nest_and_siblings_do_not_overlap() {
    let doc = LineBuffer::new(NESTED);
    let headings = build_headings(&doc).unwrap();
    let a = section_range(&headings, 0, &doc);
    let b = section_range(&headings, 1, &doc);
    let c = section_range(&headings, 2, &doc);
    assert_eq!(a, range(0, 3));
    assert_eq!(b, range(2, 3));
    assert_eq!(c, range(4, 5));
    assert!(a.start_line <= b.start_line && b.end_line <= a.end_line);
    assert!(a.end_line < c.start_line);
}

#[test]
fn test_adjacent_heading_clamps_to_start() {
    let doc = LineBuffer::new("# A\n# B\ntext");
    let headings = build_headings(&doc).unwrap();
    assert_eq!(section_range(&headings, 0, &doc), range(0, 0));
    assert_eq!(section_range(&headings, 1, &doc), range(1, 2));
}

#[test]
fn test_deeper_headings_do_not_end_a_section() {
    let doc = LineBuffer::new("## A\n### B\n#### C\ntext\n## D");
    let headings = build_headings(&doc).unwrap();
    assert_eq!(section_range(&headings, 0, &doc), range(0, 3));
    assert_eq!(section_range(&headings, 2, &doc), range(2, 3));
}

#[test]
fn test_parent_skips_missing_levels() {
    let doc = LineBuffer::new("# A\n### C\ntext\n## D\n#### E");
    let headings = build_headings(&doc).unwrap();
    assert_eq!(parent(&headings, 0), None);
    assert_eq!(parent(&headings, 1), Some(0));
    assert_eq!(parent(&headings, 2), Some(0));
    assert_eq!(parent(&headings, 3), Some(2));
}

#[test]
fn test_parent_ignores_equal_level_siblings() {
    let doc = LineBuffer::new("# A\n## B\n## C");
    let headings = build_headings(&doc).unwrap();
    assert_eq!(parent(&headings, 2), Some(0));
}

#[test]
fn test_enclosing_and_selection_span() {
    let doc = LineBuffer::new(NESTED);
    let headings = build_headings(&doc).unwrap();
    let found = enclosing(&headings, 3, &doc).unwrap();
    assert_eq!(found.index, 1);
    assert_eq!(found.heading.text, "B");
    assert_eq!(
        found.range.to_selection(&doc).unwrap(),
        Selection::new(Position::new(2, 0), Position::new(3, 5))
    );
}

#[test]
fn test_enclosing_above_first_heading() {
    let doc = LineBuffer::new("x\n# A");
    let headings = build_headings(&doc).unwrap();
    assert!(enclosing(&headings, 0, &doc).is_none());
}

#[test]
fn test_whole_document_range() {
    let doc = LineBuffer::new(NESTED);
    assert_eq!(SectionRange::whole(&doc), range(0, 5));
}

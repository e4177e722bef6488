use super::{run, Choice, Chooser, Command, CHOICES};
use crate::buffer::{LineBuffer, TextBuffer};
use crate::coordinator::Report;
use crate::expand::{Granularity, LinePolicy};
use crate::position::{Position, Selection};

const NESTED: &str = "# A\ntext1\n## B\ntext2\n# C\ntext3";

/// Chooser that records what it was offered and answers from a script.
struct Scripted {
    answer: Option<Granularity>,
    offered: Vec<&'static str>,
}

impl Chooser for Scripted {
    fn choose(&mut self, choices: &[Choice]) -> Option<Granularity> {
        self.offered = choices.iter().map(|choice| choice.label).collect();
        self.answer
    }
}

fn buffer_at(line: usize, column: usize) -> LineBuffer {
    LineBuffer::new(NESTED).with_selections(vec![Selection::caret(Position::new(line, column))])
}

#[test]
fn test_ids_round_trip() {
    for command in Command::ALL {
        assert_eq!(Command::from_id(command.id()), Some(command));
    }
    assert_eq!(Command::from_id("expand-word"), None);
    assert_eq!(Command::ExpandLine.name(), "Expand: Line");
}

#[test]
fn test_choose_dispatches_picked_granularity() {
    let mut buffer = buffer_at(3, 0);
    let mut chooser = Scripted {
        answer: Some(Granularity::Section),
        offered: Vec::new(),
    };
    let report = run(
        &mut buffer,
        Command::ExpandChoose,
        &mut chooser,
        LinePolicy::Plain,
    )
    .unwrap();
    assert_eq!(
        chooser.offered,
        vec!["Expand to Line", "Expand to Section", "Expand to Note"]
    );
    assert_eq!(report.granularity, Some(Granularity::Section));
    assert_eq!(
        buffer.selections(),
        vec![Selection::new(Position::new(2, 0), Position::new(3, 5))]
    );
}

#[test]
fn test_dismissed_chooser_changes_nothing() {
    let mut buffer = buffer_at(3, 1);
    let mut dismiss = |_: &[Choice]| None::<Granularity>;
    let report = run(
        &mut buffer,
        Command::ExpandChoose,
        &mut dismiss,
        LinePolicy::Plain,
    )
    .unwrap();
    assert_eq!(report, Report::default());
    assert_eq!(
        buffer.selections(),
        vec![Selection::caret(Position::new(3, 1))]
    );
}

#[test]
fn test_direct_commands_never_consult_chooser() {
    let mut chooser = |_: &[Choice]| -> Option<Granularity> {
        panic!("chooser should not be shown");
    };
    for (command, granularity) in [
        (Command::ExpandLine, Granularity::Line),
        (Command::ExpandSection, Granularity::Section),
        (Command::ExpandNote, Granularity::Note),
        (Command::SmartExpand, Granularity::Line),
    ] {
        let mut buffer = buffer_at(1, 2);
        let report = run(&mut buffer, command, &mut chooser, LinePolicy::Plain).unwrap();
        assert_eq!(report.granularity, Some(granularity), "{command}");
    }
}

#[test]
fn test_choices_follow_granularity_order() {
    let order: Vec<Granularity> = CHOICES.iter().map(|choice| choice.granularity).collect();
    assert_eq!(
        order,
        vec![Granularity::Line, Granularity::Section, Granularity::Note]
    );
    assert_eq!(Command::from(Granularity::Note), Command::ExpandNote);
}

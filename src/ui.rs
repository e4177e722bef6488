//! The UI renders the session into something visible.
//!
//! The document view shows every line with its selections highlighted and
//! cursors marked; the status bar carries the enclosing-section breadcrumb and
//! the last notice. The chooser is drawn as a popup over the document.

use crate::app_state::{AppState, View};
use crate::buffer::{Document, TextBuffer};
use crate::command::{CHOICES, CHOOSER_INSTRUCTIONS};
use crate::config::Config;
use crate::heading::Heading;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Renders the active view based on current application state.
pub fn draw(f: &mut Frame, app: &mut AppState, cfg: &Config) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    draw_document(f, app, cfg, chunks[0]);
    draw_status(f, app, chunks[1]);

    if app.current_view == View::Choose {
        draw_chooser(f, app);
    }
}

fn draw_document(f: &mut Frame, app: &mut AppState, cfg: &Config, area: Rect) {
    let height = usize::from(area.height.saturating_sub(2));
    app.scroll_into_view(height, cfg.scroll_margin);
    let app: &AppState = app;

    let gutter = app.buffer.line_count().to_string().len();
    let lines: Vec<Line> = app
        .buffer
        .lines()
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(height)
        .map(|(index, text)| render_line(app, index, text, gutter))
        .collect();

    let title = format!(" {} ", app.file_path.display());
    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(paragraph, area);
}

fn render_line<'a>(app: &AppState, index: usize, text: &'a str, gutter: usize) -> Line<'a> {
    let selected = app.selected_columns(index);
    let cursors = app.cursor_columns(index);
    let base = if Heading::parse(index, text).is_some() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut spans = vec![Span::styled(
        format!("{:>gutter$} ", index + 1),
        Style::default().fg(Color::DarkGray),
    )];
    let mut count = 0;
    for (column, ch) in text.chars().enumerate() {
        let mut style = base;
        if selected.iter().any(|&(from, to)| from <= column && column < to) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        if cursors.contains(&column) {
            style = style.fg(Color::Yellow).add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(ch.to_string(), style));
        count = column + 1;
    }
    if cursors.contains(&count) {
        spans.push(Span::styled(" ", Style::default().bg(Color::Yellow)));
    }
    Line::from(spans)
}

fn draw_status(f: &mut Frame, app: &AppState, area: Rect) {
    let selections = app.buffer.selections().len();
    let mut spans = vec![
        Span::styled(app.breadcrumb(), Style::default().fg(Color::Cyan)),
        Span::raw(format!("  [{selections} sel]  ")),
    ];
    match &app.message {
        Some(message) => spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        )),
        None => spans.push(Span::styled(
            "l line · s section · n note · e smart · c choose · a add caret · esc collapse · q quit",
            Style::default().fg(Color::DarkGray),
        )),
    }
    let status = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

fn draw_chooser(f: &mut Frame, app: &AppState) {
    let area = centered(f.area(), 48, u16::try_from(CHOICES.len()).unwrap_or(3) + 4);
    f.render_widget(Clear, area);

    let items: Vec<ListItem> = CHOICES
        .iter()
        .map(|choice| ListItem::new(choice.label))
        .collect();
    let hints = CHOOSER_INSTRUCTIONS
        .iter()
        .map(|(keys, purpose)| format!("{keys} {purpose}"))
        .collect::<Vec<_>>()
        .join("  ");
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" What to expand? ")
                .title_bottom(hints),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.choice_index));
    f.render_stateful_widget(list, area, &mut state);
}

fn centered(outer: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(outer.width);
    let height = height.min(outer.height);
    Rect::new(
        outer.x + (outer.width - width) / 2,
        outer.y + (outer.height - height) / 2,
        width,
        height,
    )
}

//! ascend: progressive selection expansion for markdown notes.
#![allow(clippy::multiple_crate_versions)]

use anyhow::Context;
use ascend::app_state::{AppState, View};
use ascend::buffer::TextBuffer;
use ascend::command::{self, Command};
use ascend::{config, input, ui};
use clap::Parser;
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ascend")]
#[command(about = "Grow selections line by line, section by section, up to the whole note", long_about = None)]
struct Args {
    /// Markdown file to operate on
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Command to run (defaults to the configured one)
    #[arg(long, short = 'c', value_enum)]
    command: Option<Command>,

    /// Selections as LINE:COL or LINE:COL..LINE:COL (anchor..head), zero-based
    #[arg(long = "select", short = 's', value_name = "SEL")]
    selections: Vec<String>,

    /// How many times to run the command
    #[arg(long, short = 'n', default_value_t = 1)]
    times: usize,

    /// Let line expansion move on to sections once they are fully selected
    #[arg(long)]
    section_aware: bool,

    /// Open the interactive terminal view
    #[arg(long, short = 'i')]
    interactive: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if args.section_aware {
        cfg.line_policy_section_aware = true;
    }

    let selections =
        input::parse_selections(&args.selections).context("invalid --select value")?;
    let buffer = input::load_buffer(&args.path, &selections)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    log::info!(
        "loaded {} with {} selections",
        args.path.display(),
        buffer.selections().len()
    );

    if args.interactive {
        let state = AppState::new(buffer, args.path, cfg.line_policy());
        return run_tui(state, &cfg);
    }

    let command = args.command.unwrap_or_else(|| cfg.default_command());
    let mut buffer = buffer;
    let mut chooser = input::PromptChooser::new(io::stdin().lock(), io::stderr());
    let mut report = None;
    for _ in 0..args.times {
        report = Some(command::run(
            &mut buffer,
            command,
            &mut chooser,
            cfg.line_policy(),
        )?);
    }

    if let Some(notice) = report.as_ref().and_then(|report| report.notice) {
        eprintln!("{notice}");
    }
    let output = serde_json::json!({
        "command": command,
        "selections": buffer.selections(),
        "report": report,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_tui(mut app: AppState, cfg: &config::Config) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, cfg);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    } else {
        let json = serde_json::to_string_pretty(&app.buffer.selections())?;
        println!("{json}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    cfg: &config::Config,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app, cfg))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.current_view {
            View::Document => {
                let extend = key.modifiers.contains(KeyModifiers::SHIFT);
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Up => app.move_cursor(-1, 0, extend),
                    KeyCode::Down => app.move_cursor(1, 0, extend),
                    KeyCode::Left => app.move_cursor(0, -1, extend),
                    KeyCode::Right => app.move_cursor(0, 1, extend),
                    KeyCode::Home => app.move_cursor(0, isize::MIN, extend),
                    KeyCode::End => app.move_cursor(0, isize::MAX, extend),
                    KeyCode::Char('l') => app.run_command(Command::ExpandLine),
                    KeyCode::Char('s') => app.run_command(Command::ExpandSection),
                    KeyCode::Char('n') => app.run_command(Command::ExpandNote),
                    KeyCode::Char('e' | ' ') => app.run_command(Command::SmartExpand),
                    KeyCode::Char('c') => app.run_command(Command::ExpandChoose),
                    KeyCode::Char('a') => app.add_caret_below(),
                    KeyCode::Esc => app.collapse(),
                    _ => {}
                }
            }
            View::Choose => match key.code {
                KeyCode::Up | KeyCode::Char('k') => app.choice_up(),
                KeyCode::Down | KeyCode::Char('j') => app.choice_down(),
                KeyCode::Enter => app.confirm_choice(),
                KeyCode::Esc | KeyCode::Char('q') => app.cancel_choice(),
                _ => {}
            },
        }
    }
}

//! tapcalc binary: terminal setup and the event loop.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing_subscriber::EnvFilter;

use tapcalc::core::Tape;
use tapcalc::error::AppError;
use tapcalc::tui::{render, Areas, CalculatorApp, InputHandler, KeyAction};

/// Touch-style keypad calculator for the terminal.
#[derive(Debug, Parser)]
#[command(name = "tapcalc", version, about)]
struct Cli {
    /// Write debug logs to this file (the screen belongs to the TUI).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Maximum number of entries kept on the session tape.
    #[arg(long, value_name = "N", default_value_t = Tape::DEFAULT_LIMIT)]
    tape_limit: usize,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(path) = cli.log_file {
        init_tracing(path)?;
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, CalculatorApp::with_tape_limit(cli.tape_limit));

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Routes log output to the requested file; the default filter keeps the
/// crate at debug level unless `RUST_LOG` overrides it.
fn init_tracing(path: PathBuf) -> Result<(), AppError> {
    let file = File::create(&path).map_err(|source| AppError::LogFile { path, source })?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tapcalc=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
) -> Result<(), AppError> {
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        terminal.draw(|f| render(&app, f))?;

        match event::read()? {
            Event::Key(key) => match input_handler.handle_key(key) {
                KeyAction::Press(action) => app.press(action),
                KeyAction::Backspace => app.backspace(),
                KeyAction::Quit => app.quit(),
                KeyAction::None => {}
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let areas = Areas::of(Rect::new(0, 0, size.width, size.height));
                let action = app
                    .keypad()
                    .hit_test(areas.keypad, mouse.column, mouse.row)
                    .and_then(|idx| app.keypad().get(idx))
                    .map(|btn| btn.action);
                if let Some(action) = action {
                    app.press(action);
                }
            }
            _ => {}
        }
    }

    Ok(())
}

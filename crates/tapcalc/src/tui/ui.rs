//! Screen rendering: display panel, keypad, session tape, help.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Screen regions. Computed from the terminal size so the event loop can
/// hit-test mouse clicks against the same rects the renderer draws into.
#[derive(Debug, Clone, Copy)]
pub struct Areas {
    /// The display panel above the keypad.
    pub display: Rect,
    /// The keypad grid, border included.
    pub keypad: Rect,
    /// The session tape sidebar.
    pub tape: Rect,
    /// The help panel under the tape.
    pub help: Rect,
}

impl Areas {
    /// Splits the full terminal area into screen regions.
    #[must_use]
    pub fn of(area: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(24)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(12)])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(9)])
            .split(columns[1]);

        Self {
            display: left[0],
            keypad: left[1],
            tape: right[0],
            help: right[1],
        }
    }
}

/// Renders the whole screen.
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let areas = Areas::of(frame.area());
    render_display(app, areas.display, frame.buffer_mut());
    KeypadWidget::new(app.keypad()).render(areas.keypad, frame.buffer_mut());
    render_tape(app, areas.tape, frame.buffer_mut());
    render_help(areas.help, frame.buffer_mut());
}

/// Right-aligned display text, with the armed operator shown in the
/// panel title so chained entry is visible.
fn render_display(app: &CalculatorApp, area: Rect, buf: &mut Buffer) {
    let title = match app.engine().pending() {
        Some(p) => format!(" Display ({}) ", p.op),
        None => " Display ".to_string(),
    };

    let paragraph = Paragraph::new(Span::styled(
        app.display().to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    paragraph.render(area, buf);
}

fn render_tape(app: &CalculatorApp, area: Rect, buf: &mut Buffer) {
    let visible = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = app
        .tape()
        .iter_rev()
        .take(visible)
        .map(|entry| {
            ListItem::new(Line::from(Span::styled(
                entry.display(),
                Style::default().fg(Color::Gray),
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Tape (newest first) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );

    list.render(area, buf);
}

fn render_help(area: Rect, buf: &mut Buffer) {
    let items: Vec<ListItem> = HELP_SHORTCUTS
        .iter()
        .map(|(key, desc)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                Span::raw(" "),
                Span::styled(*desc, Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    list.render(area, buf);
}

/// Keyboard shortcuts shown in the help panel. The keypad itself is
/// clickable; these are the keyboard equivalents.
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Type operand"),
    ("+-*/", "Operator"),
    ("Enter", "Equals"),
    ("Esc", "All clear"),
    ("n", "Toggle sign"),
    ("%", "Percent"),
    ("q", "Quit"),
];

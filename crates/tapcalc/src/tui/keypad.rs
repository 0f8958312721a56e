//! The keypad: a 5×4 button grid in the classic touch-calculator layout.
//!
//! ```text
//! [ AC ] [+/- ] [ %  ] [ ÷  ]
//! [ 7  ] [ 8  ] [ 9  ] [ ×  ]
//! [ 4  ] [ 5  ] [ 6  ] [ -  ]
//! [ 1  ] [ 2  ] [ 3  ] [ +  ]
//! [    0     ] [ .  ] [ =  ]
//! ```
//!
//! Buttons respond to mouse clicks through [`Keypad::hit_test`] and are
//! highlighted while pressed. The zero button spans two columns, so each
//! button carries an explicit grid position and span rather than being an
//! index into a uniform grid.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{Command, Operator};

/// What pressing a button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Type a digit into the display.
    Digit(u8),
    /// Type the decimal point.
    Decimal,
    /// Submit a control or operator symbol to the engine.
    Submit(Command),
}

/// A single keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The glyph printed on the button.
    pub label: &'static str,
    /// The action the button performs.
    pub action: ButtonAction,
    /// Whether the button is currently highlighted.
    pub pressed: bool,
    row: usize,
    col: usize,
    span: usize,
}

impl KeypadButton {
    const fn new(label: &'static str, action: ButtonAction, row: usize, col: usize) -> Self {
        Self {
            label,
            action,
            pressed: false,
            row,
            col,
            span: 1,
        }
    }

    const fn wide(label: &'static str, action: ButtonAction, row: usize, col: usize) -> Self {
        Self {
            label,
            action,
            pressed: false,
            row,
            col,
            span: 2,
        }
    }

    /// Returns the grid position as (row, col).
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Returns the number of columns the button occupies.
    #[must_use]
    pub fn span(&self) -> usize {
        self.span
    }
}

/// The button grid.
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad layout.
    #[must_use]
    pub fn new() -> Self {
        use ButtonAction::{Decimal, Digit, Submit};

        let buttons = vec![
            // Row 0: AC +/- % ÷
            KeypadButton::new("AC", Submit(Command::Clear), 0, 0),
            KeypadButton::new("+/-", Submit(Command::ToggleSign), 0, 1),
            KeypadButton::new("%", Submit(Command::Percent), 0, 2),
            KeypadButton::new("÷", Submit(Command::Op(Operator::Divide)), 0, 3),
            // Row 1: 7 8 9 ×
            KeypadButton::new("7", Digit(7), 1, 0),
            KeypadButton::new("8", Digit(8), 1, 1),
            KeypadButton::new("9", Digit(9), 1, 2),
            KeypadButton::new("×", Submit(Command::Op(Operator::Multiply)), 1, 3),
            // Row 2: 4 5 6 -
            KeypadButton::new("4", Digit(4), 2, 0),
            KeypadButton::new("5", Digit(5), 2, 1),
            KeypadButton::new("6", Digit(6), 2, 2),
            KeypadButton::new("-", Submit(Command::Op(Operator::Subtract)), 2, 3),
            // Row 3: 1 2 3 +
            KeypadButton::new("1", Digit(1), 3, 0),
            KeypadButton::new("2", Digit(2), 3, 1),
            KeypadButton::new("3", Digit(3), 3, 2),
            KeypadButton::new("+", Submit(Command::Op(Operator::Add)), 3, 3),
            // Row 4: 0 (double width) . =
            KeypadButton::wide("0", Digit(0), 4, 0),
            KeypadButton::new(".", Decimal, 4, 2),
            KeypadButton::new("=", Submit(Command::Equals), 4, 3),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions as (rows, cols).
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets the button covering a grid cell, accounting for spans.
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons
            .iter()
            .find(|b| b.row == row && (b.col..b.col + b.span).contains(&col))
    }

    /// Finds a button index by the action it performs.
    #[must_use]
    pub fn find(&self, action: ButtonAction) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Iterates over all buttons.
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Marks a button as pressed by index.
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.pressed = true;
        }
    }

    /// Clears all pressed states.
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Highlights the button for an action, releasing every other button.
    pub fn highlight(&mut self, action: ButtonAction) {
        self.release_all();
        if let Some(idx) = self.find(action) {
            self.press_button(idx);
        }
    }

    /// Converts a click position inside `area` (the keypad's rendered
    /// rect, border included) to a button index.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // The border occupies one cell on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;

        let target = self.button_at(row, col)?;
        self.find(target.action)
    }
}

/// Renders the keypad grid.
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a widget borrowing the keypad state.
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    /// Button style by role: controls gray, operators and equals in the
    /// accent color, digits and the decimal point white on blue.
    fn style_for(btn: &KeypadButton) -> Style {
        if btn.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD);
        }
        match btn.action {
            ButtonAction::Submit(Command::Op(_) | Command::Equals) => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            ButtonAction::Submit(_) => Style::default().fg(Color::Black).bg(Color::Gray),
            ButtonAction::Digit(_) | ButtonAction::Decimal => {
                Style::default().fg(Color::White).bg(Color::Blue)
            }
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if (inner.width as usize) < cols || (inner.height as usize) < rows {
            return; // too small to render buttons
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for btn in self.keypad.buttons() {
            let (row, col) = btn.position();
            let x = inner.x + col as u16 * btn_width;
            let y = inner.y + row as u16 * btn_height;
            let width = btn_width * btn.span() as u16;

            let style = Self::style_for(btn);

            // Fill the button cell so the background color reads as a key
            for dy in 0..btn_height {
                for dx in 0..width.saturating_sub(1) {
                    if let Some(cell) = buf.cell_mut((x + dx, y + dy)) {
                        cell.set_symbol(" ").set_style(style);
                    }
                }
            }

            let label_len = btn.label.chars().count() as u16;
            let label_x = x + width.saturating_sub(1).saturating_sub(label_len) / 2;
            let label_y = y + btn_height / 2;
            buf.set_span(label_x, label_y, &Span::styled(btn.label, style), label_len);
        }
    }
}

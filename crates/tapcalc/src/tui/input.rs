//! Keyboard input: maps crossterm key events to keypad actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Command, Operator};

use super::keypad::ButtonAction;

/// Actions triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a keypad button.
    Press(ButtonAction),
    /// Trim the last typed character of the current entry.
    Backspace,
    /// Quit the application.
    Quit,
    /// Ignored input.
    None,
}

/// Maps key events to actions.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c @ '0'..='9') => {
                KeyAction::Press(ButtonAction::Digit(c as u8 - b'0'))
            }
            KeyCode::Char('.') => KeyAction::Press(ButtonAction::Decimal),
            KeyCode::Char('+') => Self::operator(Operator::Add),
            KeyCode::Char('-') => Self::operator(Operator::Subtract),
            KeyCode::Char('*' | '×') => Self::operator(Operator::Multiply),
            KeyCode::Char('/' | '÷') => Self::operator(Operator::Divide),
            KeyCode::Char('%') => KeyAction::Press(ButtonAction::Submit(Command::Percent)),
            KeyCode::Char('n') => KeyAction::Press(ButtonAction::Submit(Command::ToggleSign)),
            KeyCode::Char('=') | KeyCode::Enter => {
                KeyAction::Press(ButtonAction::Submit(Command::Equals))
            }
            KeyCode::Char('c') | KeyCode::Esc => {
                KeyAction::Press(ButtonAction::Submit(Command::Clear))
            }
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Backspace => KeyAction::Backspace,
            _ => KeyAction::None,
        }
    }

    fn operator(op: Operator) -> KeyAction {
        KeyAction::Press(ButtonAction::Submit(Command::Op(op)))
    }
}

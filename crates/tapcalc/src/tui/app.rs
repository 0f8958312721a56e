//! Application state: glues the keypad to the engine.
//!
//! The app owns one engine per screen session. Every button press follows
//! the same path: extract the operand from the display, submit the tapped
//! symbol, render the returned value (if any) back to the display.

use tracing::debug;

use crate::core::{Command, DisplayBuffer, Engine, Tape};

use super::keypad::{ButtonAction, Keypad};

/// Calculator screen state.
#[derive(Debug)]
pub struct CalculatorApp {
    display: DisplayBuffer,
    engine: Engine,
    tape: Tape,
    keypad: Keypad,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a fresh calculator session.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tape_limit(Tape::DEFAULT_LIMIT)
    }

    /// Creates a session with a custom tape bound.
    #[must_use]
    pub fn with_tape_limit(limit: usize) -> Self {
        Self {
            display: DisplayBuffer::new(),
            engine: Engine::new(),
            tape: Tape::with_limit(limit),
            keypad: Keypad::new(),
            should_quit: false,
        }
    }

    /// Returns the display text.
    #[must_use]
    pub fn display(&self) -> &str {
        self.display.text()
    }

    /// Returns the engine, for rendering the armed operator.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the session tape.
    #[must_use]
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Returns the keypad.
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the app should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a keypad button, highlighting it until the next press.
    pub fn press(&mut self, action: ButtonAction) {
        self.keypad.highlight(action);
        match action {
            ButtonAction::Digit(d) => self.display.press_digit(d),
            ButtonAction::Decimal => self.display.press_decimal(),
            ButtonAction::Submit(cmd) => self.submit(cmd),
        }
    }

    /// Trims the last typed character of an unfinished entry.
    pub fn backspace(&mut self) {
        self.keypad.release_all();
        self.display.backspace();
    }

    /// Feeds the displayed operand and a symbol to the engine, rendering
    /// the returned value back to the display.
    fn submit(&mut self, cmd: Command) {
        let rhs = self.display.value();
        self.engine.set_operand(rhs);
        // Any non-digit tap ends the entry, even when the engine only
        // arms and the operand stays on screen
        self.display.finish();

        // Snapshot before the engine consumes the pending operator
        let pending = self.engine.pending();

        if let Some(result) = self.engine.submit(cmd) {
            if let Some(p) = pending.filter(|_| cmd.combines()) {
                debug!(lhs = p.lhs, op = %p.op, rhs, result, "combined");
                self.tape.record(p.lhs, p.op, rhs, result);
            }
            if cmd == Command::Clear {
                self.tape.clear();
            }
            self.display.show(result);
        } else {
            debug!(symbol = %cmd, operand = rhs, "armed");
        }
    }
}

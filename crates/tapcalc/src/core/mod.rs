//! Core calculator module: the operand/operator state machine and the
//! pieces that feed it.
//!
//! The engine itself is deliberately tiny. Everything else here exists to
//! get well-formed values in and out of it: the glyph vocabulary, the
//! digit-entry buffer, and the session tape.

pub mod display;
pub mod engine;
mod operator;
pub mod tape;

pub use display::DisplayBuffer;
pub use engine::{Engine, Pending};
pub use operator::Operator;
pub use tape::{Combination, Tape};

use std::fmt;

/// A control or operator symbol submitted to the engine.
///
/// This is the non-digit half of the fixed button vocabulary: digits and
/// the decimal point edit the [`DisplayBuffer`], everything else is a
/// `Command` for [`Engine::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `AC`: reset operand to 0 and forget the pending operator.
    Clear,
    /// `+/-`: negate the operand in place.
    ToggleSign,
    /// `%`: divide the operand by 100 in place.
    Percent,
    /// One of the binary operators `÷ × - +`.
    Op(Operator),
    /// `=`: combine and clear the pending operator.
    Equals,
}

impl Command {
    /// Returns the glyph printed on the button.
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Clear => "AC",
            Self::ToggleSign => "+/-",
            Self::Percent => "%",
            Self::Op(op) => op.glyph(),
            Self::Equals => "=",
        }
    }

    /// Parses a button glyph into a command.
    #[must_use]
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        match glyph {
            "AC" => Some(Self::Clear),
            "+/-" => Some(Self::ToggleSign),
            "%" => Some(Self::Percent),
            "=" => Some(Self::Equals),
            other => Operator::from_glyph(other).map(Self::Op),
        }
    }

    /// Returns true for the symbols that can trigger a combination
    /// (`÷ × - +` and `=`).
    #[must_use]
    pub const fn combines(&self) -> bool {
        matches!(self, Self::Op(_) | Self::Equals)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

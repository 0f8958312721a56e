//! tapcalc - a touch-style keypad calculator for the terminal.
//!
//! A single-screen calculator: a clickable button grid and a display
//! panel bound to a small arithmetic engine. The engine tracks one
//! pending operand and one pending operator; each operator or `=` press
//! combines them left to right, with no precedence and no parentheses.
//!
//! # Example
//!
//! ```rust
//! use tapcalc::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.set_operand(5.0);
//! assert_eq!(engine.submit(Command::Op(Operator::Add)), None);
//! engine.set_operand(3.0);
//! assert_eq!(engine.submit(Command::Equals), Some(8.0));
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp))]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod error;
pub mod tui;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::core::{
        Combination, Command, DisplayBuffer, Engine, Operator, Pending, Tape,
    };
    pub use crate::error::AppError;
    pub use crate::tui::{ButtonAction, CalculatorApp, InputHandler, KeyAction};
}

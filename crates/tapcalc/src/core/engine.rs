//! The operand/operator state machine.
//!
//! Two implicit states: *awaiting* (no operator recorded yet) and *armed*
//! (an operator is pending from a prior press). Digit entry always feeds
//! [`Engine::set_operand`]; operator and control symbols feed
//! [`Engine::submit`], which either records an operator (awaiting →
//! armed) or combines (armed → armed on a chained operator, armed →
//! awaiting on `=`).

use super::{Command, Operator};

/// The left-hand value captured when an operator was submitted, together
/// with the operator to apply on the next combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pending {
    /// Left-hand operand: the value on screen when the operator was
    /// pressed, or the result of the previous combination.
    pub lhs: f64,
    /// The operator to apply when the next operand arrives.
    pub op: Operator,
}

/// The calculator engine: one operand, one optional pending operator.
///
/// One instance is owned by the active screen session. Every operation
/// completes synchronously; there are no error paths. Floating-point
/// specials (`inf`, `NaN`) propagate as ordinary values.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    /// The most recently set or computed value.
    operand: f64,
    /// Set while armed, absent initially and after `=` or `AC`.
    pending: Option<Pending>,
}

impl Engine {
    /// Creates an engine in the *awaiting* state with a zero operand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` as the current operand.
    ///
    /// The caller is responsible for having parsed valid numeric text;
    /// the engine accepts any `f64`.
    pub fn set_operand(&mut self, value: f64) {
        self.operand = value;
    }

    /// Returns the current operand.
    #[must_use]
    pub fn operand(&self) -> f64 {
        self.operand
    }

    /// Returns the pending combination, if armed.
    #[must_use]
    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// Submits a control or operator symbol.
    ///
    /// Returns the value to render, or `None` when an operator press only
    /// armed the engine (first operator, or `=` with nothing pending).
    pub fn submit(&mut self, cmd: Command) -> Option<f64> {
        match cmd {
            Command::Clear => {
                self.operand = 0.0;
                self.pending = None;
                Some(0.0)
            }
            Command::ToggleSign => {
                self.operand = -self.operand;
                Some(self.operand)
            }
            Command::Percent => {
                self.operand /= 100.0;
                Some(self.operand)
            }
            Command::Op(op) => {
                let result = self.combine();
                self.pending = Some(Pending {
                    lhs: self.operand,
                    op,
                });
                result
            }
            Command::Equals => {
                let result = self.combine();
                self.pending = None;
                result
            }
        }
    }

    /// Applies the pending operator to (lhs, current operand) and stores
    /// the result as the new operand. No-op while awaiting.
    fn combine(&mut self) -> Option<f64> {
        let Pending { lhs, op } = self.pending?;
        let result = op.apply(lhs, self.operand);
        self.operand = result;
        Some(result)
    }
}

//! Session tape: the running record of completed combinations.
//!
//! Purely in-memory and session-scoped. The tape is display-only; nothing
//! reads results back out of it, and it is never written to disk.

use std::collections::VecDeque;

use super::display::format_value;
use super::Operator;

/// A single completed combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Combination {
    /// Left-hand operand.
    pub lhs: f64,
    /// The operator applied.
    pub op: Operator,
    /// Right-hand operand.
    pub rhs: f64,
    /// The computed result.
    pub result: f64,
}

impl Combination {
    /// Creates a new tape entry.
    #[must_use]
    pub fn new(lhs: f64, op: Operator, rhs: f64, result: f64) -> Self {
        Self {
            lhs,
            op,
            rhs,
            result,
        }
    }

    /// Formats the entry for the tape panel, e.g. `5 + 3 = 8`.
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{} {} {} = {}",
            format_value(self.lhs),
            self.op,
            format_value(self.rhs),
            format_value(self.result)
        )
    }
}

/// Bounded record of combinations, oldest evicted first.
#[derive(Debug, Clone)]
pub struct Tape {
    entries: VecDeque<Combination>,
    limit: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Default maximum tape length.
    pub const DEFAULT_LIMIT: usize = 100;

    /// Creates an empty tape with the default limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }

    /// Creates an empty tape with a custom limit.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// Records a completed combination.
    pub fn record(&mut self, lhs: f64, op: Operator, rhs: f64, result: f64) {
        if self.entries.len() >= self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(Combination::new(lhs, op, rhs, result));
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the tape is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the configured limit.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Clears the tape.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&Combination> {
        self.entries.back()
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Combination> {
        self.entries.iter()
    }

    /// Iterates newest first, for the tape panel.
    pub fn iter_rev(&self) -> impl Iterator<Item = &Combination> {
        self.entries.iter().rev()
    }
}

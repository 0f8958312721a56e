//! Digit-entry buffer for the display surface.
//!
//! The engine assumes its caller only ever hands it valid numbers. This
//! buffer is where that precondition is enforced: digits and the decimal
//! point are appended under entry rules that keep the text parseable as
//! `f64` at all times, so [`DisplayBuffer::value`] cannot observe
//! malformed input.

/// Formats a value the way the display renders it: Rust's canonical `f64`
/// formatting. Whole numbers print without a fractional part; `inf` and
/// `NaN` print as-is.
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

/// The text shown on the calculator display, plus the finished-typing
/// flag that decides whether the next digit starts a new operand.
#[derive(Debug, Clone)]
pub struct DisplayBuffer {
    text: String,
    /// True after a result was shown (or initially): the next digit
    /// replaces the text instead of extending it.
    fresh: bool,
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBuffer {
    /// Creates a buffer showing `0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: "0".into(),
            fresh: true,
        }
    }

    /// Returns the display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if the next digit starts a new operand.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// Appends a digit (`0`–`9`) under the entry rules.
    pub fn press_digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9, "keypad only produces digits 0-9");
        let ch = char::from(b'0' + digit);
        if self.fresh || self.text == "0" {
            self.text.clear();
            self.text.push(ch);
            self.fresh = false;
        } else {
            self.text.push(ch);
        }
    }

    /// Appends the decimal point, ignoring the press if the current
    /// operand already contains one.
    pub fn press_decimal(&mut self) {
        if self.fresh {
            self.text.clear();
            self.text.push_str("0.");
            self.fresh = false;
        } else if !self.text.contains('.') {
            self.text.push('.');
        }
    }

    /// Removes the last typed character of an unfinished entry. An
    /// emptied entry falls back to `0`.
    pub fn backspace(&mut self) {
        if self.fresh {
            return;
        }
        self.text.pop();
        if self.text.is_empty() || self.text == "-" {
            self.text.clear();
            self.text.push('0');
            self.fresh = true;
        }
    }

    /// Marks the current entry finished without changing the text, so
    /// the next digit starts a new operand. Used when a non-digit button
    /// ends the entry but leaves the operand on screen, as a first
    /// operator press does.
    pub fn finish(&mut self) {
        self.fresh = true;
    }

    /// Parses the display text as the operand value.
    ///
    /// The entry rules keep the text parseable, and the `inf`/`NaN`
    /// renderings of [`format_value`] round-trip through `f64` parsing,
    /// so the fallback is unreachable in practice.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.text.parse().unwrap_or(0.0)
    }

    /// Replaces the display with a computed value and marks the buffer
    /// fresh so the next digit starts a new operand.
    pub fn show(&mut self, value: f64) {
        self.text = format_value(value);
        self.fresh = true;
    }
}

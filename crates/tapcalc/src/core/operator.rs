//! Binary operator vocabulary.
//!
//! The keypad exposes exactly four binary operators. Application is plain
//! IEEE-754 arithmetic: division by zero produces an infinity (or NaN for
//! `0 ÷ 0`) rather than an error, and the display renders those values
//! as-is.

use std::fmt;

/// The four binary operators on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`×`)
    Multiply,
    /// Division (`÷`)
    Divide,
}

impl Operator {
    /// All operators, in keypad order (top to bottom).
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the glyph printed on the button.
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Parses a button glyph. ASCII `*` and `/` are accepted as keyboard
    /// aliases for `×` and `÷`.
    #[must_use]
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        match glyph {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "×" | "*" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to `(lhs, rhs)`.
    ///
    /// No guards: `Divide` with a zero right-hand operand follows
    /// floating-point semantics and yields `inf`, `-inf`, or `NaN`.
    #[must_use]
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs() {
        assert_eq!(Operator::Add.glyph(), "+");
        assert_eq!(Operator::Subtract.glyph(), "-");
        assert_eq!(Operator::Multiply.glyph(), "×");
        assert_eq!(Operator::Divide.glyph(), "÷");
    }

    #[test]
    fn test_from_glyph_keypad_symbols() {
        assert_eq!(Operator::from_glyph("+"), Some(Operator::Add));
        assert_eq!(Operator::from_glyph("-"), Some(Operator::Subtract));
        assert_eq!(Operator::from_glyph("×"), Some(Operator::Multiply));
        assert_eq!(Operator::from_glyph("÷"), Some(Operator::Divide));
    }

    #[test]
    fn test_from_glyph_ascii_aliases() {
        assert_eq!(Operator::from_glyph("*"), Some(Operator::Multiply));
        assert_eq!(Operator::from_glyph("/"), Some(Operator::Divide));
    }

    #[test]
    fn test_from_glyph_unknown() {
        assert_eq!(Operator::from_glyph("^"), None);
        assert_eq!(Operator::from_glyph(""), None);
        assert_eq!(Operator::from_glyph("++"), None);
    }

    #[test]
    fn test_glyph_roundtrip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_glyph(op.glyph()), Some(op));
        }
    }

    #[test]
    fn test_apply_add() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operator::Add.apply(-2.0, 5.0), 3.0);
    }

    #[test]
    fn test_apply_subtract() {
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), 2.0);
        assert_eq!(Operator::Subtract.apply(3.0, 5.0), -2.0);
    }

    #[test]
    fn test_apply_multiply() {
        assert_eq!(Operator::Multiply.apply(6.0, 7.0), 42.0);
        assert_eq!(Operator::Multiply.apply(-2.0, 3.0), -6.0);
    }

    #[test]
    fn test_apply_divide() {
        assert_eq!(Operator::Divide.apply(10.0, 4.0), 2.5);
        assert_eq!(Operator::Divide.apply(-6.0, 2.0), -3.0);
    }

    #[test]
    fn test_divide_by_zero_is_infinite() {
        assert_eq!(Operator::Divide.apply(10.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Divide.apply(-10.0, 0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_zero_divided_by_zero_is_nan() {
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_display_matches_glyph() {
        for op in Operator::ALL {
            assert_eq!(format!("{op}"), op.glyph());
        }
    }
}

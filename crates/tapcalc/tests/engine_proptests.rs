//! Property-based tests for the calculator engine.

use proptest::prelude::*;

use tapcalc::prelude::*;

// ===== Strategy definitions =====

/// Operands in a range where keypad arithmetic stays finite.
fn operand_strategy() -> impl Strategy<Value = f64> {
    -1e9f64..1e9f64
}

/// Any binary operator.
fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

/// Any engine command.
fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::Clear),
        Just(Command::ToggleSign),
        Just(Command::Percent),
        operator_strategy().prop_map(Command::Op),
        Just(Command::Equals),
    ]
}

/// Runs `a op b =` through a fresh engine.
fn evaluate(a: f64, op: Operator, b: f64) -> Option<f64> {
    let mut engine = Engine::new();
    engine.set_operand(a);
    engine.submit(Command::Op(op));
    engine.set_operand(b);
    engine.submit(Command::Equals)
}

// ===== Binary combination properties =====

proptest! {
    /// `a op b =` agrees with direct application of the operator.
    #[test]
    fn prop_binary_combination_matches_operator(
        a in operand_strategy(),
        op in operator_strategy(),
        b in operand_strategy(),
    ) {
        let result = evaluate(a, op, b);
        let expected = op.apply(a, b);
        if expected.is_nan() {
            prop_assert!(result.unwrap().is_nan());
        } else {
            prop_assert_eq!(result, Some(expected));
        }
    }

    /// The first operator press never produces a value.
    #[test]
    fn prop_first_operator_returns_none(
        a in operand_strategy(),
        op in operator_strategy(),
    ) {
        let mut engine = Engine::new();
        engine.set_operand(a);
        prop_assert_eq!(engine.submit(Command::Op(op)), None);
    }

    /// Chained operators evaluate strictly left to right: the engine
    /// agrees with a plain fold over the entry sequence.
    #[test]
    fn prop_chain_is_left_to_right_fold(
        first in operand_strategy(),
        rest in prop::collection::vec((operator_strategy(), operand_strategy()), 1..8),
    ) {
        let mut engine = Engine::new();
        engine.set_operand(first);

        let mut expected = first;
        let mut last = None;
        for (i, (op, operand)) in rest.iter().enumerate() {
            engine.submit(Command::Op(*op));
            engine.set_operand(*operand);
            if i + 1 == rest.len() {
                last = engine.submit(Command::Equals);
            }
            expected = op.apply(expected, *operand);
        }

        if expected.is_nan() {
            prop_assert!(last.unwrap().is_nan());
        } else {
            prop_assert_eq!(last, Some(expected));
        }
    }
}

// ===== Control symbol properties =====

proptest! {
    /// `AC` resets any state to a zero operand with nothing pending.
    #[test]
    fn prop_clear_resets_any_state(
        a in operand_strategy(),
        commands in prop::collection::vec(command_strategy(), 0..10),
    ) {
        let mut engine = Engine::new();
        engine.set_operand(a);
        for cmd in commands {
            engine.submit(cmd);
        }
        prop_assert_eq!(engine.submit(Command::Clear), Some(0.0));
        prop_assert_eq!(engine.operand(), 0.0);
        prop_assert!(engine.pending().is_none());
    }

    /// Toggling the sign twice returns the original operand exactly.
    #[test]
    fn prop_sign_toggle_is_involution(a in operand_strategy()) {
        let mut engine = Engine::new();
        engine.set_operand(a);
        prop_assert_eq!(engine.submit(Command::ToggleSign), Some(-a));
        prop_assert_eq!(engine.submit(Command::ToggleSign), Some(a));
    }

    /// Percent divides the operand by 100 in place.
    #[test]
    fn prop_percent_scales_by_one_hundred(a in operand_strategy()) {
        let mut engine = Engine::new();
        engine.set_operand(a);
        prop_assert_eq!(engine.submit(Command::Percent), Some(a / 100.0));
        prop_assert_eq!(engine.operand(), a / 100.0);
    }

    /// Sign toggle and percent never consume the pending operator.
    #[test]
    fn prop_unary_commands_keep_engine_armed(
        a in operand_strategy(),
        op in operator_strategy(),
        b in operand_strategy(),
    ) {
        let mut engine = Engine::new();
        engine.set_operand(a);
        engine.submit(Command::Op(op));
        engine.set_operand(b);
        engine.submit(Command::ToggleSign);
        engine.submit(Command::Percent);
        prop_assert!(engine.pending().is_some());
        prop_assert_eq!(engine.pending().unwrap().op, op);
    }
}

// ===== Display round-trip properties =====

proptest! {
    /// Whatever the display renders, the engine receives back unchanged
    /// on the next submission (including non-finite results).
    #[test]
    fn prop_display_round_trips_results(
        a in operand_strategy(),
        op in operator_strategy(),
        b in operand_strategy(),
    ) {
        let result = op.apply(a, b);
        let mut display = DisplayBuffer::new();
        display.show(result);
        if result.is_nan() {
            prop_assert!(display.value().is_nan());
        } else {
            prop_assert_eq!(display.value(), result);
        }
    }

    /// Typing digits produces the number the digits spell.
    #[test]
    fn prop_typed_digits_parse_back(digits in prop::collection::vec(0u8..=9, 1..12)) {
        let mut display = DisplayBuffer::new();
        for d in &digits {
            display.press_digit(*d);
        }
        let typed: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        let expected: f64 = typed.parse().unwrap();
        prop_assert_eq!(display.value(), expected);
    }
}

// ===== Literal scenarios =====

#[test]
fn scenario_chained_addition() {
    let mut engine = Engine::new();
    engine.set_operand(5.0);
    engine.submit(Command::Op(Operator::Add));
    engine.set_operand(3.0);
    engine.submit(Command::Op(Operator::Add));
    engine.set_operand(2.0);
    assert_eq!(engine.submit(Command::Equals), Some(10.0));
}

#[test]
fn scenario_division_by_zero_is_infinite() {
    assert_eq!(
        evaluate(10.0, Operator::Divide, 0.0),
        Some(f64::INFINITY)
    );
}

#[test]
fn scenario_fifty_percent() {
    let mut engine = Engine::new();
    engine.set_operand(50.0);
    assert_eq!(engine.submit(Command::Percent), Some(0.5));
}

use nepdai::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::Interpreter,
        operations::binary::binary,
        token::Position,
        value::{core::Value, number::format_number},
    },
};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![any::<f64>().prop_filter("NaN is never equal to itself", |n| !n.is_nan())
                            .prop_map(Value::Number),
                "[a-z ]{0,8}".prop_map(Value::Str),
                any::<bool>().prop_map(Value::Bool),
                Just(Value::Null),]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 16, 4, |inner| {
                prop::collection::vec(inner, 0..4).prop_map(Value::from)
            })
}

proptest! {
    #[test]
    fn number_display_round_trips(n in any::<f64>().prop_filter("finite", |n| n.is_finite())) {
        let text = format_number(n);
        let parsed: f64 = text.parse().unwrap();
        prop_assert!(parsed == n, "{n} printed as {text} and read back as {parsed}");
    }

    #[test]
    fn printed_numbers_round_trip_through_the_language(n in 0.0f64..1e15) {
        let literal = format_number(n);
        // Exponent forms are not number literals, so only test plain decimals.
        prop_assume!(!literal.contains('e'));
        let src = format!("lekh {literal};");

        let mut interpreter = Interpreter::with_output(Vec::new());
        interpreter.run_source(&src, false).unwrap();
        let printed = String::from_utf8(interpreter.into_output()).unwrap();
        prop_assert_eq!(printed.trim_end().parse::<f64>().unwrap(), n);
    }

    #[test]
    fn equality_is_reflexive(a in value()) {
        prop_assert_eq!(binary(BinaryOperator::Equal, &a, &a.clone(), Position::START).unwrap(),
                        Value::Bool(true));
    }

    #[test]
    fn equality_is_symmetric(a in value(), b in value()) {
        let ab = binary(BinaryOperator::Equal, &a, &b, Position::START).unwrap();
        let ba = binary(BinaryOperator::Equal, &b, &a, Position::START).unwrap();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn arrays_equal_elementwise(a in prop::collection::vec(value(), 0..5),
                                b in prop::collection::vec(value(), 0..5)) {
        let expected = a.len() == b.len() && a.iter().zip(&b).all(|(x, y)| x == y);
        let left = Value::from(a);
        let right = Value::from(b);
        prop_assert_eq!(binary(BinaryOperator::Equal, &left, &right, Position::START).unwrap(),
                        Value::Bool(expected));
    }

    #[test]
    fn division_by_zero_always_fails(n in any::<f64>(), op in prop_oneof![Just(BinaryOperator::Div),
                                                                          Just(BinaryOperator::Mod)]) {
        let result = binary(op, &Value::Number(n), &Value::Number(0.0), Position::START);
        let is_division_by_zero = matches!(result, Err(RuntimeError::DivisionByZero { .. }));
        prop_assert!(is_division_by_zero);
    }

    #[test]
    fn kinds_never_mix_in_equality(n in any::<f64>(), s in "[0-9]{1,3}") {
        let result = binary(BinaryOperator::Equal, &Value::Number(n), &Value::Str(s), Position::START);
        prop_assert_eq!(result.unwrap(), Value::Bool(false));
    }
}

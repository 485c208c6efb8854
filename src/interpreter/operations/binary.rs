use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult, operations::type_mismatch, token::Position,
        value::core::Value,
    },
};

/// Applies a binary operator to two already evaluated operands.
///
/// - `+` concatenates display text when either side is a string and adds
///   numbers otherwise.
/// - `- * / % **` require two numbers; `/` and `%` reject a zero divisor.
/// - `==` and `!=` compare structurally and accept any kinds.
/// - `< > <= >=` require two numbers.
/// - `&&` and `||` combine the truthiness of both operands into a boolean.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Where the operator appears, for error reporting.
///
/// # Errors
/// - [`RuntimeError::TypeMismatch`] for operands of the wrong kind.
/// - [`RuntimeError::DivisionByZero`] for `/` or `%` with a zero right
///   operand.
///
/// # Example
/// ```
/// use nepdai::{
///     ast::BinaryOperator,
///     interpreter::{operations::binary::binary, token::Position, value::core::Value},
/// };
///
/// let sum = binary(BinaryOperator::Add,
///                  &Value::from("a"),
///                  &Value::Number(1.0),
///                  Position::START).unwrap();
///
/// assert_eq!(sum, Value::from("a1"));
/// ```
pub fn binary(op: BinaryOperator,
              left: &Value,
              right: &Value,
              position: Position)
              -> EvalResult<Value> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or, Pow,
        Sub,
    };

    match op {
        Add => add(left, right, position),
        Sub | Mul | Div | Mod | Pow => arithmetic(op, left, right, position),
        Equal => Ok(Value::Bool(left == right)),
        NotEqual => Ok(Value::Bool(left != right)),
        Less | Greater | LessEqual | GreaterEqual => compare(op, left, right, position),
        And => Ok(Value::Bool(left.is_truthy() && right.is_truthy())),
        Or => Ok(Value::Bool(left.is_truthy() || right.is_truthy())),
    }
}

/// Decides a logical operator from its left operand alone.
///
/// Returns the result of `left && _` or `left || _` when `left` already
/// determines it, and `None` when the right operand must be evaluated. Every
/// other operator returns `None`.
///
/// # Example
/// ```
/// use nepdai::{
///     ast::BinaryOperator,
///     interpreter::{operations::binary::short_circuit, value::core::Value},
/// };
///
/// assert_eq!(short_circuit(BinaryOperator::Or, &Value::Number(1.0)), Some(Value::Bool(true)));
/// assert_eq!(short_circuit(BinaryOperator::And, &Value::Number(1.0)), None);
/// ```
#[must_use]
pub fn short_circuit(op: BinaryOperator, left: &Value) -> Option<Value> {
    match op {
        BinaryOperator::And if !left.is_truthy() => Some(Value::Bool(false)),
        BinaryOperator::Or if left.is_truthy() => Some(Value::Bool(true)),
        _ => None,
    }
}

fn add(left: &Value, right: &Value, position: Position) -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(_), _) | (_, Value::Str(_)) => Ok(Value::Str(format!("{left}{right}"))),
        _ => Err(type_mismatch("number or string", &[left, right], position)),
    }
}

fn arithmetic(op: BinaryOperator,
              left: &Value,
              right: &Value,
              position: Position)
              -> EvalResult<Value> {
    let (Value::Number(a), Value::Number(b)) = (left, right) else {
        return Err(type_mismatch("number", &[left, right], position));
    };

    let result = match op {
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div | BinaryOperator::Mod if *b == 0.0 => {
            return Err(RuntimeError::DivisionByZero { position: Some(position) });
        },
        BinaryOperator::Div => a / b,
        BinaryOperator::Mod => a % b,
        BinaryOperator::Pow => a.powf(*b),
        _ => return Err(type_mismatch("arithmetic operator", &[left, right], position)),
    };

    Ok(Value::Number(result))
}

fn compare(op: BinaryOperator, left: &Value, right: &Value, position: Position) -> EvalResult<Value> {
    let (Value::Number(a), Value::Number(b)) = (left, right) else {
        return Err(type_mismatch("number", &[left, right], position));
    };

    let result = match op {
        BinaryOperator::Less => a < b,
        BinaryOperator::Greater => a > b,
        BinaryOperator::LessEqual => a <= b,
        _ => a >= b,
    };

    Ok(Value::Bool(result))
}

#[cfg(test)]
mod tests {
    use super::{binary, short_circuit};
    use crate::{
        ast::BinaryOperator::{self, *},
        error::RuntimeError,
        interpreter::{token::Position, value::core::Value},
    };

    fn eval(op: BinaryOperator, left: Value, right: Value) -> Result<Value, RuntimeError> {
        binary(op, &left, &right, Position::START)
    }

    #[test]
    fn arithmetic_on_numbers() {
        assert_eq!(eval(Add, 2.0.into(), 3.0.into()), Ok(Value::Number(5.0)));
        assert_eq!(eval(Sub, 2.0.into(), 3.0.into()), Ok(Value::Number(-1.0)));
        assert_eq!(eval(Mul, 2.0.into(), 3.0.into()), Ok(Value::Number(6.0)));
        assert_eq!(eval(Div, 3.0.into(), 2.0.into()), Ok(Value::Number(1.5)));
        assert_eq!(eval(Mod, 7.0.into(), 3.0.into()), Ok(Value::Number(1.0)));
        assert_eq!(eval(Pow, 2.0.into(), 10.0.into()), Ok(Value::Number(1024.0)));
    }

    #[test]
    fn plus_concatenates_display_text() {
        assert_eq!(eval(Add, 1.0.into(), "x".into()), Ok(Value::from("1x")));
        assert_eq!(eval(Add, "is ".into(), true.into()), Ok(Value::from("is thik")));
        assert_eq!(eval(Add, "".into(), Value::Null), Ok(Value::from("khali")));
    }

    #[test]
    fn plus_rejects_non_numeric_non_strings() {
        let error = eval(Add, true.into(), 1.0.into()).unwrap_err();

        assert_eq!(error.to_string(),
                   "Type error - Yo Chahiyeko number or string, Yo Diyis Vai Taile boolean and \
                    number");
    }

    #[test]
    fn zero_divisor_fails_for_div_and_mod() {
        for op in [Div, Mod] {
            assert!(matches!(eval(op, 5.0.into(), 0.0.into()),
                             Err(RuntimeError::DivisionByZero { .. })));
        }
    }

    #[test]
    fn comparisons_require_numbers() {
        assert_eq!(eval(LessEqual, 2.0.into(), 2.0.into()), Ok(Value::Bool(true)));
        assert!(matches!(eval(Less, "a".into(), "b".into()),
                         Err(RuntimeError::TypeMismatch { .. })));
    }

    #[test]
    fn logic_uses_truthiness() {
        assert_eq!(eval(And, 1.0.into(), "".into()), Ok(Value::Bool(false)));
        assert_eq!(eval(Or, Value::Null, "a".into()), Ok(Value::Bool(true)));
        assert_eq!(short_circuit(And, &Value::Null), Some(Value::Bool(false)));
        assert_eq!(short_circuit(Or, &Value::Null), None);
        assert_eq!(short_circuit(Add, &Value::Null), None);
    }
}

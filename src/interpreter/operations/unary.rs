use crate::{
    ast::{UnaryOperator, UpdateOperator},
    interpreter::{
        evaluator::core::EvalResult, operations::type_mismatch, token::Position,
        value::core::Value,
    },
};

/// Applies a prefix unary operator.
///
/// `-` negates a number; `!` negates the truthiness of any value.
///
/// # Errors
/// [`crate::error::RuntimeError::TypeMismatch`] when `-` is applied to
/// anything but a number.
pub fn unary(op: UnaryOperator, operand: &Value, position: Position) -> EvalResult<Value> {
    match op {
        UnaryOperator::Negate => operand.as_number()
                                         .map(|n| Value::Number(-n))
                                         .ok_or_else(|| type_mismatch("number", &[operand], position)),
        UnaryOperator::Not => Ok(Value::Bool(!operand.is_truthy())),
    }
}

/// Computes an increment or decrement.
///
/// Returns `(stored, result)`: the new value to write back into the variable,
/// and the value of the expression itself, which is the new value for prefix
/// updates and the old one for postfix updates.
///
/// # Errors
/// [`crate::error::RuntimeError::TypeMismatch`] when `current` is not a
/// number.
///
/// # Example
/// ```
/// use nepdai::{
///     ast::UpdateOperator,
///     interpreter::{operations::unary::update, token::Position, value::core::Value},
/// };
///
/// let (stored, result) =
///     update(UpdateOperator::Increment, &Value::Number(1.0), false, Position::START).unwrap();
///
/// assert_eq!(stored, Value::Number(2.0));
/// assert_eq!(result, Value::Number(1.0));
/// ```
pub fn update(op: UpdateOperator,
              current: &Value,
              prefix: bool,
              position: Position)
              -> EvalResult<(Value, Value)> {
    let Some(old) = current.as_number() else {
        return Err(type_mismatch("number", &[current], position));
    };

    let new = match op {
        UpdateOperator::Increment => old + 1.0,
        UpdateOperator::Decrement => old - 1.0,
    };
    let result = if prefix { new } else { old };

    Ok((Value::Number(new), Value::Number(result)))
}

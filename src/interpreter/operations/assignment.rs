use crate::{
    ast::AssignmentOperator,
    interpreter::{
        evaluator::core::EvalResult, operations::binary::binary, token::Position,
        value::core::Value,
    },
};

/// Computes the value an assignment stores.
///
/// Plain `=` stores `right` unchanged. Compound operators apply their binary
/// operation to the variable's current value and `right`, so `x += 1` behaves
/// like `x = x + 1` including string concatenation and the zero-divisor check
/// of `/=`.
///
/// # Parameters
/// - `op`: The assignment operator.
/// - `current`: The variable's value before the assignment.
/// - `right`: The evaluated right-hand side.
/// - `position`: Where the operator appears.
///
/// # Errors
/// Any error of the underlying binary operation.
pub fn assignment(op: AssignmentOperator,
                  current: &Value,
                  right: Value,
                  position: Position)
                  -> EvalResult<Value> {
    match op.binary() {
        None => Ok(right),
        Some(binary_op) => binary(binary_op, current, &right, position),
    }
}

#[cfg(test)]
mod tests {
    use super::assignment;
    use crate::{
        ast::AssignmentOperator,
        error::RuntimeError,
        interpreter::{token::Position, value::core::Value},
    };

    #[test]
    fn plain_assignment_ignores_the_old_value() {
        assert_eq!(assignment(AssignmentOperator::Assign,
                              &Value::Null,
                              Value::from("new"),
                              Position::START),
                   Ok(Value::from("new")));
    }

    #[test]
    fn compound_assignment_uses_the_old_value() {
        assert_eq!(assignment(AssignmentOperator::AddAssign,
                              &Value::from("a"),
                              Value::from("b"),
                              Position::START),
                   Ok(Value::from("ab")));
        assert_eq!(assignment(AssignmentOperator::MulAssign,
                              &Value::Number(4.0),
                              Value::Number(2.5),
                              Position::START),
                   Ok(Value::Number(10.0)));
    }

    #[test]
    fn divide_assign_checks_for_zero() {
        assert!(matches!(assignment(AssignmentOperator::DivAssign,
                                    &Value::Number(1.0),
                                    Value::Number(0.0),
                                    Position::START),
                         Err(RuntimeError::DivisionByZero { .. })));
    }
}

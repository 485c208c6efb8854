/// Binary operator semantics.
///
/// Arithmetic, string concatenation, equality, numeric comparison and the
/// truthiness-based logical operators.
pub mod binary;

/// Prefix unary operators and the `++`/`--` update operators.
pub mod unary;

/// Plain and compound assignment.
pub mod assignment;

use crate::{
    error::RuntimeError,
    interpreter::{token::Position, value::core::Value},
};

/// Builds the type error raised when an operator receives the wrong kinds of
/// operands.
///
/// `found` names every operand involved, joined with `and`.
pub(crate) fn type_mismatch(expected: &str, operands: &[&Value], position: Position) -> RuntimeError {
    let found = operands.iter()
                        .map(|value| value.type_name())
                        .collect::<Vec<_>>()
                        .join(" and ");
    RuntimeError::TypeMismatch { expected: expected.to_string(),
                                 found,
                                 position: Some(position) }
}

/// Core evaluation state.
///
/// Defines the `Interpreter` session, the `Flow` signal used for loop control
/// and the `EvalResult` alias shared by the whole evaluator.
pub mod core;

/// Statement execution.
///
/// Declarations, prints, conditionals, blocks and the loop-control statements.
pub mod statement;

/// `jaba samma` loops.
///
/// Repeats a body while its condition holds and consumes `vai vayo rokki` and
/// `aghi badh vai` signals.
pub mod while_loop;

/// Expression evaluation.
///
/// Evaluates operands and delegates the operator semantics to
/// [`crate::interpreter::operations`]; assignments and updates write back into
/// the environment.
pub mod expression;

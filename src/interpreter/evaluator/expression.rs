use std::io::Write;

use crate::{
    ast::{AssignmentOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        operations::{
            assignment::assignment,
            binary::{binary, short_circuit},
            unary::{unary, update},
        },
        token::Position,
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// evaluated left to right. `&&` and `||` skip their right operand when
    /// the left one already decides the result.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression. Errors raised without a position (for
    /// example by scope lookups) are tagged with the position of `expr`.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Binary { left,
                           op,
                           right,
                           position, } => {
                let left = self.evaluate(left)?;
                if let Some(decided) = short_circuit(*op, &left) {
                    return Ok(decided);
                }
                let right = self.evaluate(right)?;
                binary(*op, &left, &right, *position)
            },
            Expr::Unary { op,
                          operand,
                          position, } => {
                let operand = self.evaluate(operand)?;
                unary(*op, &operand, *position)
            },
            Expr::Update { op,
                           target,
                           prefix,
                           position, } => {
                let name = target_name(target, "update", *position)?;
                let current = self.lookup(name, *position)?;
                let (stored, result) = update(*op, &current, *prefix, *position)?;
                self.store(name, stored, *position)?;
                Ok(result)
            },
            Expr::Assignment { target,
                               op,
                               value,
                               position, } => self.eval_assignment(target, *op, value, *position),
            Expr::Call { position, .. } => {
                Err(RuntimeError::UnsupportedCall { position: Some(*position) })
            },
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Identifier { name, position } => self.lookup(name, *position),
            Expr::Array { elements, .. } => {
                let values = elements.iter()
                                     .map(|element| self.evaluate(element))
                                     .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::from(values))
            },
        }
    }

    /// Evaluates `target op value`.
    ///
    /// The right-hand side is evaluated before the variable is read, so it
    /// may itself change the variable. The stored value is also the value of
    /// the expression.
    fn eval_assignment(&mut self,
                       target: &Expr,
                       op: AssignmentOperator,
                       value: &Expr,
                       position: Position)
                       -> EvalResult<Value> {
        let name = target_name(target, "assignment", position)?;
        let right = self.evaluate(value)?;

        let result = match op {
            AssignmentOperator::Assign => right,
            _ => {
                let current = self.lookup(name, position)?;
                assignment(op, &current, right, position)?
            },
        };

        self.store(name, result.clone(), position)?;
        Ok(result)
    }

    fn lookup(&self, name: &str, position: Position) -> EvalResult<Value> {
        self.environment
            .lookup(name)
            .cloned()
            .map_err(|e| e.at(position))
    }

    fn store(&mut self, name: &str, value: Value, position: Position) -> EvalResult<()> {
        self.environment.assign(name, value).map_err(|e| e.at(position))
    }
}

/// Extracts the variable name an assignment or update writes to.
fn target_name<'e>(target: &'e Expr,
                   operation: &'static str,
                   position: Position)
                   -> EvalResult<&'e str> {
    match target {
        Expr::Identifier { name, .. } => Ok(name),
        _ => Err(RuntimeError::InvalidAssignmentTarget { operation,
                                                         position: Some(position) }),
    }
}

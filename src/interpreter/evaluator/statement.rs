use std::io::Write;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Executes a single statement.
    ///
    /// Declarations, expression statements and prints complete normally with
    /// a value. Blocks and `yadi` forward any loop-control signal raised
    /// inside them; `vai vayo rokki` and `aghi badh vai` raise one.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Returns
    /// How the statement finished.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::VariableDeclaration { name, value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Null,
                };
                self.environment.define(name, value.clone());
                Ok(Flow::Normal(value))
            },
            Statement::Expression { expr } => Ok(Flow::Normal(self.evaluate(expr)?)),
            Statement::Print { arguments, .. } => {
                self.print(arguments)?;
                Ok(Flow::Normal(Value::Null))
            },
            Statement::If { test,
                            consequent,
                            alternate, } => {
                if self.evaluate(test)?.is_truthy() {
                    self.execute(consequent)
                } else if let Some(alternate) = alternate {
                    self.execute(alternate)
                } else {
                    Ok(Flow::Normal(Value::Null))
                }
            },
            Statement::While { test, body } => self.execute_while(test, body),
            Statement::Block { body } => self.execute_block(body),
            Statement::Break { position } => {
                tracing::trace!(%position, "break signal");
                Ok(Flow::Break(*position))
            },
            Statement::Continue { position } => {
                tracing::trace!(%position, "continue signal");
                Ok(Flow::Continue(*position))
            },
        }
    }

    /// Executes a block in a fresh child scope.
    ///
    /// The scope is removed again however the block finishes, whether it
    /// completes, raises a loop-control signal or fails.
    pub fn execute_block(&mut self, body: &[Statement]) -> EvalResult<Flow> {
        self.environment.push_scope();
        let flow = self.execute_sequence(body);
        self.environment.pop_scope();
        flow
    }

    /// Executes statements in order in the current scope.
    ///
    /// Stops at the first loop-control signal and returns it. Otherwise the
    /// result is the value of the last statement, or `khali` if there are
    /// none.
    pub(in crate::interpreter::evaluator) fn execute_sequence(&mut self,
                                                              body: &[Statement])
                                                              -> EvalResult<Flow> {
        let mut result = Value::Null;

        for statement in body {
            match self.execute(statement)? {
                Flow::Normal(value) => result = value,
                signal => return Ok(signal),
            }
        }

        Ok(Flow::Normal(result))
    }

    /// Evaluates every argument left to right and writes their display texts
    /// joined by single spaces as one line.
    fn print(&mut self, arguments: &[Expr]) -> EvalResult<()> {
        let mut parts = Vec::with_capacity(arguments.len());
        for argument in arguments {
            parts.push(self.evaluate(argument)?.to_string());
        }

        writeln!(self.out, "{}", parts.join(" ")).map_err(|e| RuntimeError::Output { message:
                                                                                      e.to_string() })
    }
}

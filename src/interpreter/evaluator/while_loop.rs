use std::io::Write;

use crate::{
    ast::{Expr, Statement},
    interpreter::{
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Executes a `jaba samma` loop.
    ///
    /// The test is evaluated before every iteration and the loop ends as soon
    /// as it is falsy. `aghi badh vai` abandons the rest of the current
    /// iteration and goes straight back to the test; `vai vayo rokki` ends the
    /// loop. Neither signal escapes the loop.
    ///
    /// The loop's value is the value of the last body execution that ran to
    /// completion, or `khali` if there was none.
    ///
    /// # Parameters
    /// - `test`: The loop condition.
    /// - `body`: The statement repeated while the condition holds.
    ///
    /// # Returns
    /// Always `Flow::Normal` on success.
    ///
    /// # Example
    /// ```
    /// use nepdai::interpreter::{evaluator::core::Interpreter, value::core::Value};
    ///
    /// let mut interpreter = Interpreter::with_output(Vec::new());
    /// let source = "solti i = 0; jaba samma i < 10 { i = i + 1; yadi i == 4 bhane vai vayo rokki; \
    ///               i; }";
    ///
    /// assert_eq!(interpreter.run_source(source, false).unwrap(), Value::Number(3.0));
    /// ```
    pub fn execute_while(&mut self, test: &Expr, body: &Statement) -> EvalResult<Flow> {
        let mut result = Value::Null;
        let mut iterations: usize = 0;

        while self.evaluate(test)?.is_truthy() {
            iterations += 1;
            match self.execute(body)? {
                Flow::Normal(value) => result = value,
                Flow::Continue(_) => {},
                Flow::Break(_) => break,
            }
        }

        tracing::trace!(iterations, "loop finished");
        Ok(Flow::Normal(result))
    }
}

use std::io::{self, Write};

use crate::{
    ast::Program,
    error::{Error, RuntimeError},
    interpreter::{
        environment::Environment, lexer::tokenize, parser::core::parse, token::Position,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// `Break` and `Continue` travel outward through blocks and `yadi` branches
/// until the nearest enclosing loop consumes them.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// The statement completed with a value.
    Normal(Value),
    /// `vai vayo rokki` was executed at the given position.
    Break(Position),
    /// `aghi badh vai` was executed at the given position.
    Continue(Position),
}

/// A tree-walking interpreter session.
///
/// The global scope lives as long as the interpreter, so consecutive calls to
/// [`Interpreter::interpret`] or [`Interpreter::run_source`] see each other's
/// variables. Printed output goes to `W`, which is standard output unless
/// another writer is supplied.
///
/// ## Usage
///
/// ```
/// use nepdai::interpreter::{evaluator::core::Interpreter, value::core::Value};
///
/// let mut interpreter = Interpreter::with_output(Vec::new());
/// interpreter.run_source("solti x = 2;", false).unwrap();
/// let value = interpreter.run_source("lekh x * 21; x;", false).unwrap();
///
/// assert_eq!(value, Value::Number(2.0));
/// assert_eq!(interpreter.output(), b"42\n");
/// ```
pub struct Interpreter<W: Write = io::Stdout> {
    pub(in crate::interpreter::evaluator) environment: Environment,
    pub(in crate::interpreter::evaluator) out:         W,
}

impl Interpreter {
    /// Creates an interpreter that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter that prints into `out`.
    pub fn with_output(out: W) -> Self {
        Self { environment: Environment::new(),
               out }
    }

    /// The writer receiving printed output.
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the interpreter, returning its writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// The current variable scopes.
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Executes a program and returns the value of its last statement, or
    /// `khali` for an empty program.
    ///
    /// # Errors
    /// The first [`RuntimeError`] raised by any statement. A `vai vayo rokki`
    /// or `aghi badh vai` that is not inside a loop is reported as
    /// [`RuntimeError::LoopControlOutsideLoop`].
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn interpret(&mut self, program: &Program) -> EvalResult<Value> {
        tracing::debug!(statements = program.body.len(), "interpreting program");

        match self.execute_sequence(&program.body)? {
            Flow::Normal(value) => Ok(value),
            Flow::Break(position) => {
                Err(RuntimeError::LoopControlOutsideLoop { keyword:  "vai vayo rokki",
                                                           position: Some(position), })
            },
            Flow::Continue(position) => {
                Err(RuntimeError::LoopControlOutsideLoop { keyword:  "aghi badh vai",
                                                           position: Some(position), })
            },
        }
    }

    /// Tokenizes, parses and executes `source` in this session.
    ///
    /// # Errors
    /// The first error of any stage.
    pub fn run_source(&mut self, source: &str, require_entry_marker: bool) -> Result<Value, Error> {
        let tokens = tokenize(source, require_entry_marker)?;
        let program = parse(&tokens)?;
        Ok(self.interpret(&program)?)
    }
}

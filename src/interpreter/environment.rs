use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{FALSE_WORD, NULL_WORD, TRUE_WORD, Value},
    },
};

/// Lexical scopes of a running program.
///
/// Scopes form a stack: the global scope sits at the bottom and every block
/// pushes a child scope on top. A scope's parent is the scope directly below
/// it, so lookups walk the stack from the top down and a popped scope can
/// never be observed again.
#[derive(Debug, Clone)]
pub struct Environment {
    scope_stack: Vec<HashMap<String, Value>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only the global scope, pre-seeded with
    /// `thik`, `galat` and `khali`.
    #[must_use]
    pub fn new() -> Self {
        let globals = HashMap::from([(TRUE_WORD.to_string(), Value::Bool(true)),
                                     (FALSE_WORD.to_string(), Value::Bool(false)),
                                     (NULL_WORD.to_string(), Value::Null)]);
        Self { scope_stack: vec![globals] }
    }

    /// Number of live scopes, including the global one.
    ///
    /// # Example
    /// ```
    /// use nepdai::interpreter::environment::Environment;
    ///
    /// let mut environment = Environment::new();
    /// environment.push_scope();
    ///
    /// assert_eq!(environment.depth(), 2);
    /// ```
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.scope_stack.len()
    }

    /// Opens a child scope of the current one.
    pub fn push_scope(&mut self) {
        self.scope_stack.push(HashMap::new());
        tracing::trace!(depth = self.depth(), "entered scope");
    }

    /// Closes the innermost scope, discarding its bindings. The global scope
    /// is never removed.
    pub fn pop_scope(&mut self) {
        if self.scope_stack.len() > 1 {
            self.scope_stack.pop();
        }
        tracing::trace!(depth = self.depth(), "left scope");
    }

    /// Binds `name` in the innermost scope, replacing any binding of the same
    /// name in that scope only.
    ///
    /// # Example
    /// ```
    /// use nepdai::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut environment = Environment::new();
    /// environment.define("x", Value::Number(1.0));
    /// environment.push_scope();
    /// environment.define("x", Value::Number(2.0));
    /// environment.pop_scope();
    ///
    /// assert_eq!(environment.lookup("x"), Ok(&Value::Number(1.0)));
    /// ```
    pub fn define(&mut self, name: &str, value: Value) {
        if let Some(scope) = self.scope_stack.last_mut() {
            scope.insert(name.to_string(), value);
        }
    }

    /// Rebinds the nearest existing `name`, searching from the innermost scope
    /// outward.
    ///
    /// # Errors
    /// [`RuntimeError::UndefinedVariable`] if no scope binds `name`.
    pub fn assign(&mut self, name: &str, value: Value) -> EvalResult<()> {
        let slot = self.scope_stack
                       .iter_mut()
                       .rev()
                       .find_map(|scope| scope.get_mut(name))
                       .ok_or_else(|| undefined(name))?;
        *slot = value;
        Ok(())
    }

    /// Looks up the nearest binding of `name`, searching from the innermost
    /// scope outward.
    ///
    /// # Errors
    /// [`RuntimeError::UndefinedVariable`] if no scope binds `name`.
    pub fn lookup(&self, name: &str) -> EvalResult<&Value> {
        self.scope_stack
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
            .ok_or_else(|| undefined(name))
    }
}

fn undefined(name: &str) -> RuntimeError {
    RuntimeError::UndefinedVariable { name:     name.to_string(),
                                      position: None, }
}

#[cfg(test)]
mod tests {
    use super::Environment;
    use crate::{error::RuntimeError, interpreter::value::core::Value};

    #[test]
    fn globals_are_seeded() {
        let environment = Environment::new();

        assert_eq!(environment.lookup("thik"), Ok(&Value::Bool(true)));
        assert_eq!(environment.lookup("galat"), Ok(&Value::Bool(false)));
        assert_eq!(environment.lookup("khali"), Ok(&Value::Null));
    }

    #[test]
    fn assign_updates_the_nearest_binding() {
        let mut environment = Environment::new();
        environment.define("x", Value::Number(1.0));
        environment.push_scope();
        environment.assign("x", Value::Number(5.0)).unwrap();
        environment.pop_scope();

        assert_eq!(environment.lookup("x"), Ok(&Value::Number(5.0)));
    }

    #[test]
    fn block_bindings_disappear_with_their_scope() {
        let mut environment = Environment::new();
        environment.push_scope();
        environment.define("y", Value::Null);
        environment.pop_scope();

        assert!(matches!(environment.lookup("y"),
                         Err(RuntimeError::UndefinedVariable { name, .. }) if name == "y"));
    }

    #[test]
    fn assign_to_unknown_name_fails() {
        let mut environment = Environment::new();

        assert!(environment.assign("missing", Value::Null).is_err());
    }

    #[test]
    fn global_scope_survives_extra_pops() {
        let mut environment = Environment::new();
        environment.pop_scope();
        environment.pop_scope();

        assert_eq!(environment.depth(), 1);
        assert!(environment.lookup("thik").is_ok());
    }
}

use std::rc::Rc;

use crate::{ast::LiteralValue, interpreter::value::number::format_number};

/// Display word for boolean true.
pub const TRUE_WORD: &str = "thik";
/// Display word for boolean false.
pub const FALSE_WORD: &str = "galat";
/// Display word for null.
pub const NULL_WORD: &str = "khali";

/// Represents a runtime value in the interpreter.
///
/// Equality is structural: values of different kinds are never equal, arrays
/// compare element by element. Numbers follow IEEE rules, so `NaN` is not
/// equal to itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A double precision floating-point number.
    Number(f64),
    /// A string of text.
    Str(String),
    /// `thik` or `galat`.
    Bool(bool),
    /// `khali`, the absence of a value.
    Null,
    /// An ordered sequence of values. Arrays are never mutated in place, so
    /// clones share their storage.
    Array(Rc<Vec<Self>>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Number(n) => (*n).into(),
            LiteralValue::Str(s) => s.as_str().into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Null => Self::Null,
        }
    }
}

impl Value {
    /// The name of the value's kind as used in type errors.
    ///
    /// # Example
    /// ```
    /// use nepdai::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(1.0).type_name(), "number");
    /// assert_eq!(Value::Null.type_name(), "null");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Null => "null",
            Self::Array(_) => "array",
        }
    }

    /// Coerces the value to a condition.
    ///
    /// `khali` is false, booleans are themselves, numbers are false only at
    /// zero, and strings and arrays are false only when empty.
    ///
    /// # Example
    /// ```
    /// use nepdai::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(Value::from("a").is_truthy());
    /// assert!(!Value::from(Vec::new()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Array(elements) => !elements.is_empty(),
        }
    }

    /// Returns the number held by `self`, if any.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns `true` if the value is `khali`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(true) => write!(f, "{TRUE_WORD}"),
            Self::Bool(false) => write!(f, "{FALSE_WORD}"),
            Self::Null => write!(f, "{NULL_WORD}"),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn nested_arrays_display_recursively() {
        let inner = Value::from(vec![Value::Bool(true), Value::Null]);
        let outer = Value::from(vec![Value::Number(1.0), Value::from("x"), inner]);

        assert_eq!(outer.to_string(), "[1, x, [thik, khali]]");
    }

    #[test]
    fn different_kinds_are_never_equal() {
        assert_ne!(Value::Number(0.0), Value::Bool(false));
        assert_ne!(Value::from("1"), Value::Number(1.0));
        assert_ne!(Value::Null, Value::from(Vec::new()));
        assert_eq!(Value::Null, Value::Null);
    }

    #[test]
    fn arrays_compare_by_length_and_elements() {
        let a = Value::from(vec![Value::Number(1.0), Value::Number(2.0)]);
        let b = Value::from(vec![Value::Number(1.0), Value::Number(2.0)]);
        let c = Value::from(vec![Value::Number(1.0)]);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

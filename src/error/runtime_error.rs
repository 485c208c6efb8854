use crate::interpreter::token::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Positions are optional because some errors are raised by components that
/// know nothing about source text, such as the environment. The evaluator
/// fills them in with [`RuntimeError::at`] on the way out.
pub enum RuntimeError {
    /// Lookup or assignment of a name that no enclosing scope defines.
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// Where the variable was referenced.
        position: Option<Position>,
    },
    /// An operator received an operand of the wrong kind.
    TypeMismatch {
        /// The kind (or kinds) the operator accepts.
        expected: String,
        /// The kind (or kinds) actually supplied.
        found:    String,
        /// Where the operator was applied.
        position: Option<Position>,
    },
    /// The right operand of `/` or `%` is zero.
    DivisionByZero {
        /// Where the operator was applied.
        position: Option<Position>,
    },
    /// Assignment or update whose target is not a plain variable name.
    InvalidAssignmentTarget {
        /// `"assignment"` or `"update"`.
        operation: &'static str,
        /// Where the target expression starts.
        position:  Option<Position>,
    },
    /// A call expression. Calls parse, but nothing can be called yet.
    UnsupportedCall {
        /// Where the call starts.
        position: Option<Position>,
    },
    /// `vai vayo rokki` or `aghi badh vai` escaped every enclosing loop.
    LoopControlOutsideLoop {
        /// The keyword that was used.
        keyword:  &'static str,
        /// Where the statement is.
        position: Option<Position>,
    },
    /// Writing printed output failed.
    Output {
        /// Description of the underlying I/O failure.
        message: String,
    },
}

impl RuntimeError {
    /// Where the error occurred, if known.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::UndefinedVariable { position, .. }
            | Self::TypeMismatch { position, .. }
            | Self::DivisionByZero { position }
            | Self::InvalidAssignmentTarget { position, .. }
            | Self::UnsupportedCall { position }
            | Self::LoopControlOutsideLoop { position, .. } => *position,
            Self::Output { .. } => None,
        }
    }

    /// Attaches `at` as the error position unless one is already known.
    #[must_use]
    pub const fn at(mut self, at: Position) -> Self {
        match &mut self {
            Self::UndefinedVariable { position, .. }
            | Self::TypeMismatch { position, .. }
            | Self::DivisionByZero { position }
            | Self::InvalidAssignmentTarget { position, .. }
            | Self::UnsupportedCall { position }
            | Self::LoopControlOutsideLoop { position, .. } => {
                if position.is_none() {
                    *position = Some(at);
                }
            },
            Self::Output { .. } => {},
        }
        self
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, .. } => {
                write!(f, "Undefined variable - Variable Define Garna Birsis Vai '{name}'")
            },
            Self::TypeMismatch { expected, found, .. } => {
                write!(f, "Type error - Yo Chahiyeko {expected}, Yo Diyis Vai Taile {found}")
            },
            Self::DivisionByZero { .. } => {
                write!(f, "Division by zero - Shunya Le Bhag Garna Mildaina Vai")
            },
            Self::InvalidAssignmentTarget { operation, .. } => {
                write!(f, "Left-hand Side Check Gara Solti {operation} Ma")
            },
            Self::UnsupportedCall { .. } => {
                write!(f, "Function calls are not supported yet - Kaam Bolauna Mildaina Vai")
            },
            Self::LoopControlOutsideLoop { keyword, .. } => {
                write!(f, "'{keyword}' used outside of a loop - Loop Bahira Mildaina Vai")
            },
            Self::Output { message } => write!(f, "Failed to write output: {message}"),
        }
    }
}

impl std::error::Error for RuntimeError {}

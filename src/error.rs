/// Lexical errors.
///
/// Raised while splitting source text into tokens: a missing entry marker, an
/// unterminated string or a character that cannot start any token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens. Parse errors name the construct the parser expected and the token
/// it found instead.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include undefined variables, operand type mismatches,
/// division by zero and failures to write printed output.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

use crate::interpreter::token::Position;

/// The category of an [`Error`], independent of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The source text could not be tokenized.
    LexicalError,
    /// The tokens do not form a valid program.
    ParseError,
    /// A variable was used or assigned without being declared.
    UndefinedVariableError,
    /// An operator received operands of the wrong kind.
    TypeError,
    /// `/` or `%` with a zero right operand.
    DivisionByZeroError,
    /// A construct the evaluator cannot execute.
    InternalError,
    /// Printed output could not be written.
    IoError,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::LexicalError => "LexicalError",
            Self::ParseError => "ParseError",
            Self::UndefinedVariableError => "UndefinedVariableError",
            Self::TypeError => "TypeError",
            Self::DivisionByZeroError => "DivisionByZeroError",
            Self::InternalError => "InternalError",
            Self::IoError => "IoError",
        };
        write!(f, "{name}")
    }
}

/// Any error raised by one of the pipeline stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failure while tokenizing.
    Lex(LexError),
    /// Failure while parsing.
    Parse(ParseError),
    /// Failure while evaluating.
    Runtime(RuntimeError),
}

impl Error {
    /// The category of the error.
    ///
    /// # Example
    /// ```
    /// use nepdai::{error::ErrorKind, run};
    ///
    /// let error = run("lekh 1 / 0;", false).unwrap_err();
    ///
    /// assert_eq!(error.kind(), ErrorKind::DivisionByZeroError);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::LexicalError,
            Self::Parse(_) => ErrorKind::ParseError,
            Self::Runtime(error) => match error {
                RuntimeError::UndefinedVariable { .. } => ErrorKind::UndefinedVariableError,
                RuntimeError::TypeMismatch { .. } => ErrorKind::TypeError,
                RuntimeError::DivisionByZero { .. } => ErrorKind::DivisionByZeroError,
                RuntimeError::InvalidAssignmentTarget { .. }
                | RuntimeError::UnsupportedCall { .. }
                | RuntimeError::LoopControlOutsideLoop { .. } => ErrorKind::InternalError,
                RuntimeError::Output { .. } => ErrorKind::IoError,
            },
        }
    }

    /// Where in the source the error occurred, if known.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::Lex(error) => Some(error.position()),
            Self::Parse(error) => Some(error.position()),
            Self::Runtime(error) => error.position(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(error) => write!(f, "{error}"),
            Self::Parse(error) => write!(f, "{error}"),
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(error) => Some(error),
            Self::Parse(error) => Some(error),
            Self::Runtime(error) => Some(error),
        }
    }
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

use crate::interpreter::token::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building the syntax tree.
pub enum ParseError {
    /// A specific token was required but something else was found.
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The token actually encountered.
        found:    String,
        /// Position of the encountered token.
        position: Position,
    },
    /// An expression was required but the token cannot start one.
    ExpectedExpression {
        /// The token actually encountered.
        found:    String,
        /// Position of the encountered token.
        position: Position,
    },
    /// A `)`, `]` or `}` was never written.
    UnclosedDelimiter {
        /// The missing closing delimiter.
        delimiter: char,
        /// The token found in its place.
        found:     String,
        /// Position of the encountered token.
        position:  Position,
    },
}

impl ParseError {
    /// Where the error occurred.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::ExpectedExpression { position, .. }
            | Self::UnclosedDelimiter { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, .. } => {
                write!(f, "Unexpected token: Tya {expected} Chahiyeko, Taile K Lekhis Vai {found}")
            },
            Self::ExpectedExpression { found, .. } => {
                write!(f, "Expected expression - Expression Chahiyeko, Taile K Lekhis Vai {found}")
            },
            Self::UnclosedDelimiter { delimiter, found, .. } => {
                write!(f, "Unclosed delimiter - '{delimiter}' Banda Gara Vai, Taile {found} Lekhis")
            },
        }
    }
}

impl std::error::Error for ParseError {}

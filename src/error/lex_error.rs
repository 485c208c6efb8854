use crate::interpreter::token::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while turning source text into tokens.
pub enum LexError {
    /// The input does not start with the `Namaste Dai` entry marker.
    MissingEntryMarker {
        /// Where the marker was expected.
        position: Position,
    },
    /// A string literal runs to the end of the input.
    UnterminatedString {
        /// Where the string starts.
        position: Position,
    },
    /// A character that cannot start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where the character is.
        position:  Position,
    },
}

impl LexError {
    /// Where the error occurred.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::MissingEntryMarker { position }
            | Self::UnterminatedString { position }
            | Self::UnexpectedCharacter { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEntryMarker { .. } => write!(f, "Namaste Dai van vai Sururma"),
            Self::UnterminatedString { .. } => {
                write!(f, "Unterminated string: Rameri Bujera Lekh Ta Vai")
            },
            Self::UnexpectedCharacter { character, .. } => {
                write!(f, "Unexpected character - K Lekhya Vai K Lekhya '{character}'")
            },
        }
    }
}

impl std::error::Error for LexError {}

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        parser::{binary::parse_assignment, statement::parse_statements, utils::synchronize},
        token::{Position, Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Stand-in returned when the stream has no tokens at all.
static DETACHED_EOF: Token = Token::eof(Position::START);

/// A cursor over a token sequence with one token of lookahead.
///
/// The cursor never moves past the final [`TokenKind::Eof`] token, so
/// [`TokenStream::peek`] is always valid.
///
/// A stream created with [`TokenStream::recovering`] collects syntax errors
/// instead of returning them, see [`TokenStream::recover`].
#[derive(Debug)]
pub struct TokenStream<'a> {
    tokens:    &'a [Token],
    current:   usize,
    recovered: Option<Vec<ParseError>>,
}

impl<'a> TokenStream<'a> {
    /// Creates a cursor positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens,
               current: 0,
               recovered: None }
    }

    /// Creates a cursor that records syntax errors and keeps parsing.
    #[must_use]
    pub const fn recovering(tokens: &'a [Token]) -> Self {
        Self { tokens,
               current: 0,
               recovered: Some(Vec::new()) }
    }

    /// The token under the cursor.
    #[must_use]
    pub fn peek(&self) -> &'a Token {
        self.tokens
            .get(self.current)
            .or_else(|| self.tokens.last())
            .unwrap_or(&DETACHED_EOF)
    }

    /// The most recently consumed token.
    #[must_use]
    pub fn previous(&self) -> &'a Token {
        self.current
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .or_else(|| self.tokens.first())
            .unwrap_or(&DETACHED_EOF)
    }

    /// Returns `true` once the cursor rests on the end-of-input token.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Consumes the current token and returns it. At the end of input the
    /// cursor stays put.
    pub fn advance(&mut self) -> &'a Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    /// Returns `true` if the current token has kind `kind`. Always `false`
    /// at the end of input.
    #[must_use]
    pub fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Consumes the current token if it has one of the given kinds.
    pub fn advance_if(&mut self, kinds: &[TokenKind]) -> Option<&'a Token> {
        if kinds.iter().any(|kind| self.check(*kind)) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Skips any line breaks under the cursor.
    pub fn skip_newlines(&mut self) {
        while self.advance_if(&[TokenKind::Newline]).is_some() {}
    }

    /// The current cursor index, for a later [`TokenStream::rewind`].
    #[must_use]
    pub const fn checkpoint(&self) -> usize {
        self.current
    }

    /// Moves the cursor back to a checkpoint.
    pub const fn rewind(&mut self, checkpoint: usize) {
        self.current = checkpoint;
    }

    /// Handles a syntax error raised by a statement of a sequence that ends
    /// at `closing`.
    ///
    /// The cursor is first moved past the broken statement, unless it already
    /// rests on `closing`. A recovering stream then keeps the error and returns
    /// `Ok`, so the caller can go on with the next statement; any other stream
    /// hands the error back.
    ///
    /// # Errors
    /// `error` itself unless the stream is recovering.
    pub fn recover(&mut self, error: ParseError, closing: TokenKind) -> ParseResult<()> {
        if !self.check(closing) {
            synchronize(self);
        }
        match &mut self.recovered {
            Some(errors) => {
                errors.push(error);
                Ok(())
            },
            None => Err(error),
        }
    }

    /// Consumes the stream, returning the errors it recovered from.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.recovered.unwrap_or_default()
    }
}

/// Parses a token sequence into a program.
///
/// Line breaks between statements are ignored. Parsing stops at the first
/// syntax error.
///
/// # Errors
/// The first [`ParseError`] encountered.
///
/// # Example
/// ```
/// use nepdai::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("solti x = 1;\nlekh x;", false).unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.body.len(), 2);
/// ```
#[tracing::instrument(level = "trace", skip_all)]
pub fn parse(tokens: &[Token]) -> ParseResult<Program> {
    let mut stream = TokenStream::new(tokens);
    let body = parse_statements(&mut stream, TokenKind::Eof)?;

    tracing::debug!(statements = body.len(), "parsed program");
    Ok(Program { body })
}

/// Parses a token sequence and collects every syntax error instead of stopping
/// at the first.
///
/// After each error the parser skips ahead to the next `;`, `}` or statement
/// keyword and resumes from there, inside blocks as well as at the top level. An empty result means the program parses.
///
/// # Example
/// ```
/// use nepdai::interpreter::{lexer::tokenize, parser::core::check_syntax};
///
/// let tokens = tokenize("solti = 1; lekh 2; lekh (3;", false).unwrap();
///
/// assert_eq!(check_syntax(&tokens).len(), 2);
/// ```
#[must_use]
pub fn check_syntax(tokens: &[Token]) -> Vec<ParseError> {
    let mut stream = TokenStream::recovering(tokens);
    let unrecovered = parse_statements(&mut stream, TokenKind::Eof).err();

    let mut errors = stream.into_errors();
    errors.extend(unrecovered);
    tracing::debug!(errors = errors.len(), "checked syntax");
    errors
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := assignment`
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_assignment(tokens)
}

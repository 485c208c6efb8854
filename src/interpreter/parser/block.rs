use crate::{
    ast::Statement,
    interpreter::{
        parser::{
            core::{ParseResult, TokenStream},
            statement::parse_statements,
            utils::{consume, consume_closing},
        },
        token::TokenKind,
    },
};

/// Parses a braced block of statements.
///
/// Grammar: `block := "{" statement* "}"`
///
/// Line breaks between the statements are ignored. An empty block `{}` is
/// valid. In a recovering stream a broken statement is recorded and the rest
/// of the block is still parsed.
///
/// # Parameters
/// - `tokens`: Token stream positioned at `{`.
///
/// # Returns
/// A `Statement::Block` with the parsed statements.
///
/// # Errors
/// - `UnexpectedToken` if the stream is not at `{`.
/// - `UnclosedDelimiter` if the input ends before the closing `}`.
/// - Any error of the contained statements.
pub fn parse_block(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    consume(tokens, TokenKind::LBrace)?;

    let body = parse_statements(tokens, TokenKind::RBrace)?;
    consume_closing(tokens, TokenKind::RBrace, '}')?;

    Ok(Statement::Block { body })
}

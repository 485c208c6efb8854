use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, TokenStream, parse_expression},
        token::{Token, TokenKind},
    },
};

/// Consumes a token of the given kind or fails naming what was expected.
///
/// # Errors
/// `UnexpectedToken` carrying the expected kind and the token actually found.
pub(in crate::interpreter::parser) fn consume<'a>(tokens: &mut TokenStream<'a>,
                                                  kind: TokenKind)
                                                  -> ParseResult<&'a Token> {
    if tokens.check(kind) {
        return Ok(tokens.advance());
    }

    let found = tokens.peek();
    Err(ParseError::UnexpectedToken { expected: kind.describe().to_string(),
                                      found:    found.describe(),
                                      position: found.position, })
}

/// Consumes the closing delimiter of a bracketed construct.
///
/// # Errors
/// `UnclosedDelimiter` if the current token is not `closing`.
pub(in crate::interpreter::parser) fn consume_closing(tokens: &mut TokenStream<'_>,
                                                      closing: TokenKind,
                                                      delimiter: char)
                                                      -> ParseResult<()> {
    if tokens.advance_if(&[closing]).is_some() {
        return Ok(());
    }

    let found = tokens.peek();
    Err(ParseError::UnclosedDelimiter { delimiter,
                                        found: found.describe(),
                                        position: found.position })
}

/// Parses a comma-separated list of expressions until a closing token.
///
/// This utility is shared by array literals and call argument lists. An
/// immediately encountered closing token produces an empty list. Trailing
/// commas are not allowed.
///
/// Grammar (simplified): `list := (expression ("," expression)*)? closing`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening delimiter.
/// - `closing`: The token that terminates the list (e.g., `]` or `)`).
/// - `delimiter`: The character of `closing`, for error messages.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or the list is not closed.
pub(in crate::interpreter::parser) fn parse_comma_separated(tokens: &mut TokenStream<'_>,
                                                            closing: TokenKind,
                                                            delimiter: char)
                                                            -> ParseResult<Vec<Expr>> {
    if tokens.advance_if(&[closing]).is_some() {
        return Ok(Vec::new());
    }

    let items = parse_expression_list(tokens)?;
    consume_closing(tokens, closing, delimiter)?;

    Ok(items)
}

/// Parses one or more expressions separated by commas.
///
/// Grammar: `expression ("," expression)*`
pub(in crate::interpreter::parser) fn parse_expression_list(tokens: &mut TokenStream<'_>)
                                                            -> ParseResult<Vec<Expr>> {
    let mut items = vec![parse_expression(tokens)?];
    while tokens.advance_if(&[TokenKind::Comma]).is_some() {
        items.push(parse_expression(tokens)?);
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// `UnexpectedToken` if the current token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier(tokens: &mut TokenStream<'_>)
                                                       -> ParseResult<String> {
    let token = consume(tokens, TokenKind::Identifier)?;
    Ok(token.text().unwrap_or(&token.lexeme).to_string())
}

/// Skips tokens after a syntax error until a likely statement boundary.
///
/// At least one token is consumed. Scanning stops right after a `;` or right
/// before a `}` or a token that starts a statement.
pub(in crate::interpreter::parser) fn synchronize(tokens: &mut TokenStream<'_>) {
    tokens.advance();

    while !tokens.is_at_end() {
        if tokens.previous().kind == TokenKind::Semicolon {
            return;
        }

        if matches!(tokens.peek().kind,
                    TokenKind::RBrace
                    | TokenKind::Solti
                    | TokenKind::Lekh
                    | TokenKind::Yadi
                    | TokenKind::JabaSamma
                    | TokenKind::VaiVayoRokki
                    | TokenKind::AghiBadhVai)
        {
            return;
        }

        tokens.advance();
    }
}

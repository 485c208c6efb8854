use crate::{
    ast::Statement,
    interpreter::{
        parser::{
            block::parse_block,
            core::{ParseResult, TokenStream, parse_expression},
            utils::{consume, parse_expression_list, parse_identifier},
        },
        token::TokenKind,
    },
};

/// Parses a single statement.
///
/// Leading line breaks are skipped. The statement kind is chosen by its first
/// token:
///
/// ```text
///     solti name (= expression)? ;
///     lekh (expression ("," expression)*)? ;
///     yadi expression bhane statement (natra statement)?
///     jaba samma expression statement
///     vai vayo rokki ;
///     aghi badh vai ;
///     { statement* }
///     expression ;
/// ```
///
/// # Errors
/// Any syntax error inside the statement. The stream is left where the error
/// was found; [`parse_statements`] takes care of recovery.
pub fn parse_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    tokens.skip_newlines();
    let token = tokens.peek();

    match token.kind {
        TokenKind::Solti => {
            tokens.advance();
            let name = parse_identifier(tokens)?;
            let value = match tokens.advance_if(&[TokenKind::Assign]) {
                Some(_) => Some(parse_expression(tokens)?),
                None => None,
            };
            consume(tokens, TokenKind::Semicolon)?;

            Ok(Statement::VariableDeclaration { name,
                                                value,
                                                position: token.position })
        },
        TokenKind::Lekh => {
            tokens.advance();
            let arguments = if tokens.check(TokenKind::Semicolon) {
                Vec::new()
            } else {
                parse_expression_list(tokens)?
            };
            consume(tokens, TokenKind::Semicolon)?;

            Ok(Statement::Print { arguments,
                                  position: token.position })
        },
        TokenKind::Yadi => {
            tokens.advance();
            parse_if(tokens)
        },
        TokenKind::JabaSamma => {
            tokens.advance();
            let test = parse_expression(tokens)?;
            let body = parse_statement(tokens)?;

            Ok(Statement::While { test,
                                  body: Box::new(body) })
        },
        TokenKind::VaiVayoRokki => {
            tokens.advance();
            consume(tokens, TokenKind::Semicolon)?;
            Ok(Statement::Break { position: token.position })
        },
        TokenKind::AghiBadhVai => {
            tokens.advance();
            consume(tokens, TokenKind::Semicolon)?;
            Ok(Statement::Continue { position: token.position })
        },
        TokenKind::LBrace => parse_block(tokens),
        _ => {
            let expr = parse_expression(tokens)?;
            consume(tokens, TokenKind::Semicolon)?;
            Ok(Statement::Expression { expr })
        },
    }
}

/// Parses statements until `closing` or the end of input, which is left
/// unconsumed.
///
/// A statement that fails to parse is handed to [`TokenStream::recover`],
/// which skips past it exactly once. In a recovering stream the error is
/// recorded and parsing continues with the next statement of this sequence,
/// so an error inside a block never disturbs the statements around the block.
///
/// # Errors
/// The first syntax error, unless the stream is recovering.
pub fn parse_statements(tokens: &mut TokenStream<'_>,
                        closing: TokenKind)
                        -> ParseResult<Vec<Statement>> {
    let mut body = Vec::new();

    loop {
        tokens.skip_newlines();
        if tokens.is_at_end() || tokens.check(closing) {
            break;
        }
        match parse_statement(tokens) {
            Ok(statement) => body.push(statement),
            Err(error) => tokens.recover(error, closing)?,
        }
    }

    Ok(body)
}

/// Parses the rest of a `yadi` statement after the keyword.
///
/// Neither branch needs braces: a single statement or a block both qualify.
/// `natra` may start on a later line than the end of the consequent.
fn parse_if(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    let test = parse_expression(tokens)?;
    consume(tokens, TokenKind::Bhane)?;
    let consequent = Box::new(parse_statement(tokens)?);

    let checkpoint = tokens.checkpoint();
    tokens.skip_newlines();
    let alternate = if tokens.advance_if(&[TokenKind::Natra]).is_some() {
        Some(Box::new(parse_statement(tokens)?))
    } else {
        tokens.rewind(checkpoint);
        None
    };

    Ok(Statement::If { test,
                       consequent,
                       alternate })
}

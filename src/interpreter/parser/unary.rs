use crate::{
    ast::{Expr, LiteralValue, UnaryOperator, UpdateOperator},
    error::ParseError,
    interpreter::{
        parser::{
            core::{ParseResult, TokenStream, parse_expression},
            utils::{consume_closing, parse_comma_separated},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a prefix unary expression.
///
/// Grammar: `unary := ("!" | "-") unary | postfix`
pub fn parse_unary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let token = tokens.peek();
    let op = match token.kind {
        TokenKind::Bang => UnaryOperator::Not,
        TokenKind::Minus => UnaryOperator::Negate,
        _ => return parse_postfix(tokens),
    };
    tokens.advance();
    let operand = parse_unary(tokens)?;

    Ok(Expr::Unary { op,
                     operand: Box::new(operand),
                     position: token.position })
}

/// Parses an optional postfix `++` or `--`.
///
/// Grammar: `postfix := call ("++" | "--")?`
pub fn parse_postfix(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let target = parse_call(tokens)?;

    let token = tokens.peek();
    let op = match token.kind {
        TokenKind::PlusPlus => UpdateOperator::Increment,
        TokenKind::MinusMinus => UpdateOperator::Decrement,
        _ => return Ok(target),
    };
    tokens.advance();

    Ok(Expr::Update { op,
                      target: Box::new(target),
                      prefix: false,
                      position: token.position })
}

/// Parses call chains such as `f(1)(2)`.
///
/// Grammar: `call := primary ("(" arguments? ")")*`
pub fn parse_call(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut expr = parse_primary(tokens)?;

    while let Some(paren) = tokens.advance_if(&[TokenKind::LParen]) {
        let arguments = parse_comma_separated(tokens, TokenKind::RParen, ')')?;
        expr = Expr::Call { callee: Box::new(expr),
                            arguments,
                            position: paren.position };
    }

    Ok(expr)
}

/// Parses a primary expression: a literal, a variable, a parenthesized
/// expression or an array literal.
///
/// # Errors
/// `ExpectedExpression` if the current token cannot start an expression.
pub fn parse_primary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let token = tokens.peek();

    if let Some(value) = literal(token) {
        tokens.advance();
        return Ok(Expr::Literal { value,
                                  position: token.position });
    }

    match token.kind {
        TokenKind::Identifier => {
            tokens.advance();
            let name = token.text().unwrap_or(&token.lexeme).to_string();
            Ok(Expr::Identifier { name,
                                  position: token.position })
        },
        TokenKind::LParen => {
            tokens.advance();
            let expr = parse_expression(tokens)?;
            consume_closing(tokens, TokenKind::RParen, ')')?;
            Ok(expr)
        },
        TokenKind::LBracket => {
            tokens.advance();
            let elements = parse_comma_separated(tokens, TokenKind::RBracket, ']')?;
            Ok(Expr::Array { elements,
                             position: token.position })
        },
        _ => Err(ParseError::ExpectedExpression { found:    token.describe(),
                                                  position: token.position, }),
    }
}

/// The literal a token denotes, if it is a literal token.
fn literal(token: &Token) -> Option<LiteralValue> {
    let value = match token.kind {
        TokenKind::Thik => LiteralValue::Bool(true),
        TokenKind::Galat => LiteralValue::Bool(false),
        TokenKind::Khali => LiteralValue::Null,
        TokenKind::Number => LiteralValue::Number(token.number()?),
        TokenKind::Str => LiteralValue::Str(token.text()?.to_string()),
        _ => return None,
    };
    Some(value)
}

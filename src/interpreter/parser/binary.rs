use crate::{
    ast::{AssignmentOperator, BinaryOperator, Expr},
    interpreter::{
        parser::{
            core::{ParseResult, TokenStream},
            unary::parse_unary,
        },
        token::TokenKind,
    },
};

/// Parses an assignment.
///
/// Assignment is right-associative, so `a = b = 1` assigns `1` to `b` and then
/// to `a`. Any expression is accepted as the target here; the evaluator
/// rejects targets that are not plain variables.
///
/// Grammar: `assignment := logical_or (("=" | "+=" | "-=" | "*=" | "/=")
/// assignment)?`
pub fn parse_assignment(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let target = parse_logical_or(tokens)?;

    let token = tokens.peek();
    if let Some(op) = AssignmentOperator::from_token(token.kind) {
        tokens.advance();
        let value = parse_assignment(tokens)?;

        return Ok(Expr::Assignment { target: Box::new(target),
                                     op,
                                     value: Box::new(value),
                                     position: token.position });
    }

    Ok(target)
}

/// Parses a left-associative chain of binary operators of one precedence
/// level.
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `operators`: The operator tokens of this level.
/// - `operand`: Parser for the next-higher precedence level.
fn parse_left_assoc<'a>(tokens: &mut TokenStream<'a>,
                        operators: &[TokenKind],
                        operand: fn(&mut TokenStream<'a>) -> ParseResult<Expr>)
                        -> ParseResult<Expr> {
    let mut left = operand(tokens)?;

    loop {
        let token = tokens.peek();
        if !operators.contains(&token.kind) {
            break;
        }
        let Some(op) = BinaryOperator::from_token(token.kind) else {
            break;
        };
        tokens.advance();
        let right = operand(tokens)?;

        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              position: token.position };
    }

    Ok(left)
}

/// Parses a logical OR chain.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)*`
pub fn parse_logical_or(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_assoc(tokens, &[TokenKind::OrOr], parse_logical_and)
}

/// Parses a logical AND chain.
///
/// Grammar: `logical_and := equality ("&&" equality)*`
pub fn parse_logical_and(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_assoc(tokens, &[TokenKind::AndAnd], parse_equality)
}

/// Parses equality comparisons.
///
/// Grammar: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_assoc(tokens,
                     &[TokenKind::EqualEqual, TokenKind::BangEqual],
                     parse_comparison)
}

/// Parses relational comparisons.
///
/// Grammar: `comparison := additive (("<" | ">" | "<=" | ">=") additive)*`
pub fn parse_comparison(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_assoc(tokens,
                     &[TokenKind::Less,
                       TokenKind::Greater,
                       TokenKind::LessEqual,
                       TokenKind::GreaterEqual],
                     parse_additive)
}

/// Parses addition and subtraction.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_assoc(tokens,
                     &[TokenKind::Plus, TokenKind::Minus],
                     parse_multiplicative)
}

/// Parses multiplication, division and remainder.
///
/// Grammar: `multiplicative := power (("*" | "/" | "%") power)*`
pub fn parse_multiplicative(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_assoc(tokens,
                     &[TokenKind::Star, TokenKind::Slash, TokenKind::Percent],
                     parse_power)
}

/// Parses exponentiation. `**` groups to the left: `2 ** 3 ** 2` is
/// `(2 ** 3) ** 2`.
///
/// Grammar: `power := unary ("**" unary)*`
pub fn parse_power(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_assoc(tokens, &[TokenKind::StarStar], parse_unary)
}

/// Parser entry points and the token cursor.
///
/// Defines `TokenStream`, the `ParseResult` alias, and the `parse`,
/// `check_syntax` and `parse_expression` entry points.
pub mod core;

/// Prefix, postfix, call and primary expressions.
///
/// Handles the highest-precedence levels of the expression grammar: `!` and
/// unary `-`, postfix `++`/`--`, call chains, literals, variables,
/// parenthesized expressions and array literals.
pub mod unary;

/// Binary operator parsing.
///
/// Implements assignment and every binary precedence level from `||` down to
/// `**`.
pub mod binary;

/// Block parsing.
///
/// Parses braced sequences of statements.
pub mod block;

/// Helpers shared by the parser.
///
/// Token consumption with error reporting, comma-separated lists, identifiers
/// and error recovery.
pub mod utils;

/// Statement parsing.
///
/// Dispatches on the leading token of each statement and recovers after
/// syntax errors.
pub mod statement;

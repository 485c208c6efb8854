//! # nepdai
//!
//! nepdai is a tree-walking interpreter for a small scripting language with
//! Nepali keywords, written in Rust. Source text is split into tokens, parsed
//! into a syntax tree and executed directly.
//!
//! ```
//! use nepdai::interpreter::{evaluator::core::Interpreter, value::core::Value};
//!
//! let source = "Namaste Dai
//! solti x = 2;
//! solti y = 3;
//! lekh x + y;";
//!
//! let mut interpreter = Interpreter::with_output(Vec::new());
//! interpreter.run_source(source, true).unwrap();
//!
//! assert_eq!(interpreter.output(), b"5\n");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::{Error, LexError, ParseError, RuntimeError},
    interpreter::{evaluator::core::Interpreter, token::Token, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source positions to nodes for error reporting.
/// - Defines the operator enums shared by the parser and the evaluator.
pub mod ast;
/// Provides error types for every stage of the pipeline.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code, and a unified `Error` that carries an error kind, a
/// message and, when known, the source position.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line and column information for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and scopes to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Splits source text into tokens.
///
/// See [`interpreter::lexer::tokenize`].
pub fn tokenize(source: &str, require_entry_marker: bool) -> Result<Vec<Token>, LexError> {
    interpreter::lexer::tokenize(source, require_entry_marker)
}

/// Parses tokens into a program, stopping at the first syntax error.
///
/// See [`interpreter::parser::core::parse`].
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    interpreter::parser::core::parse(tokens)
}

/// Parses tokens and returns every syntax error found.
///
/// See [`interpreter::parser::core::check_syntax`].
#[must_use]
pub fn check_syntax(tokens: &[Token]) -> Vec<ParseError> {
    interpreter::parser::core::check_syntax(tokens)
}

/// Executes a program in a fresh interpreter that prints to standard output.
///
/// Returns the value of the last top-level statement.
pub fn interpret(program: &Program) -> Result<Value, RuntimeError> {
    Interpreter::new().interpret(program)
}

/// Tokenizes and parses source text without executing it.
///
/// # Examples
/// ```
/// use nepdai::compile;
///
/// let program = compile("Namaste Dai\nlekh 1;", true).unwrap();
/// assert_eq!(program.body.len(), 1);
///
/// // Without the entry marker the source is rejected.
/// assert!(compile("lekh 1;", true).is_err());
/// ```
pub fn compile(source: &str, require_entry_marker: bool) -> Result<Program, Error> {
    let tokens = tokenize(source, require_entry_marker)?;
    Ok(parse(&tokens)?)
}

/// Tokenizes, parses and executes source text, printing to standard output.
///
/// Returns the value of the last top-level statement. The first error of any
/// stage aborts the run.
///
/// # Examples
/// ```
/// use nepdai::{interpreter::value::core::Value, run};
///
/// let value = run("solti x = 4; x * 2;", false).unwrap();
/// assert_eq!(value, Value::Number(8.0));
///
/// // 'y' is not defined.
/// assert!(run("y + 1;", false).is_err());
/// ```
pub fn run(source: &str, require_entry_marker: bool) -> Result<Value, Error> {
    Interpreter::new().run_source(source, require_entry_marker)
}

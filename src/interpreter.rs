/// The evaluator module executes syntax trees.
///
/// The evaluator walks the AST statement by statement, evaluates expressions,
/// manages variable scopes and handles loop control. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Executes every statement and expression kind.
/// - Confines `vai vayo rokki` and `aghi badh vai` to their loop.
/// - Reports runtime errors such as undefined variables or division by zero.
pub mod evaluator;
/// Lexical scopes.
///
/// A stack of variable maps with the global scope at the bottom. Blocks push
/// and pop scopes; lookups and assignments search from the innermost scope
/// outward.
pub mod environment;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, keywords and operators. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Checks for the `Namaste Dai` entry marker when required.
/// - Decodes numeric and string literals and recognizes multi-word keywords.
/// - Reports lexical errors with their source position.
pub mod lexer;
/// Operator semantics.
///
/// Pure functions over runtime values for every binary, unary, update and
/// assignment operator. They never touch variables, which keeps them testable
/// on their own.
pub mod operations;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs a `Program` that represents the syntactic structure of the
/// source.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions by recursive descent.
/// - Validates the grammar, reporting errors with their position.
/// - Recovers after a syntax error so tooling can report several at once.
pub mod parser;
/// Tokens and source positions.
///
/// Defines the closed set of token kinds, the decoded token payloads and the
/// line/column positions attached to tokens, nodes and errors.
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// Numbers, strings, booleans, `khali` and arrays, together with their
/// truthiness, structural equality and display rules.
pub mod value;

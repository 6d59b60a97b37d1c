/// The evaluator module executes a parsed program and computes its result.
///
/// The evaluator registers the program's function definitions, invokes the
/// entry function and walks the statements and expressions of each body,
/// managing call frames, block scopes and typed bindings.
///
/// # Responsibilities
/// - Evaluates expressions and executes statements.
/// - Handles variables, user-defined and builtin functions, and control flow.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens for literals,
/// identifiers, keywords, operators and delimiters, each with the byte offset
/// where it starts. Lexing never fails: unrecognized input becomes an
/// `Unknown` token for the parser to reject.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A hand-written recursive-descent parser over a peekable token stream.
/// Errors carry the offending token and its byte offset.
pub mod parser;
/// Turns an AST back into canonical source text.
pub mod printer;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum with integers, floats, booleans, strings and
/// `void`, together with type checks and the int-to-float promotion used by
/// typed bindings.
pub mod value;

//! # minic
//!
//! minic is an interpreter for a small C-like language written in Rust.
//! A program is a sequence of typed function definitions; running it calls
//! `main`. The crate lexes, parses, pretty-prints and evaluates such programs.
//!
//! ```
//! let result = minic::evaluate("int main() { int x = 5; x--; x--; return x; }").unwrap();
//! assert_eq!(result.value.to_string(), "3");
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
    error::{Error, ParseError},
    interpreter::{
        evaluator::core::{Context, EvalOptions, Evaluation},
        parser::core::parse_tokens,
        printer::print_program,
    },
};

pub use crate::interpreter::lexer::tokenize;

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `FunctionDef`, `Statement` and `Expr`
/// types that represent source code as a tree. The AST is built by the parser,
/// printed by the printer and executed by the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating a program. Parse errors carry the byte offset of the offending
/// token; runtime errors name the variable, function or types involved.
///
/// # Responsibilities
/// - Defines `ParseError` and `RuntimeError` for the two failing phases.
/// - Combines them in `Error` so whole-pipeline callers can use `?`.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, printing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, printer, evaluator and
///   value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Lexes and parses `source` into a [`Program`].
///
/// # Example
/// ```
/// let program = minic::parse_program("void f() {} int main() { return 0; }").unwrap();
/// assert_eq!(program.definitions.len(), 2);
///
/// assert!(minic::parse_program("int main() { return 0 }").is_err());
/// ```
pub fn parse_program(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source);
    parse_tokens(&tokens)
}

/// Parses `source` and prints it back in canonical form.
///
/// # Example
/// ```
/// let printed = minic::parse("int main(){return 1+2;}").unwrap();
/// assert_eq!(printed, "int main() {\n    return 1 + 2;\n}\n");
/// ```
pub fn parse(source: &str) -> Result<String, ParseError> {
    parse_program(source).map(|program| print_program(&program))
}

/// Parses and runs `source` with default options.
///
/// # Example
/// ```
/// use minic::{error::{Error, RuntimeError}, evaluate};
///
/// let result = evaluate(r#"int main() { print("hi"); return 1 + 2 + 3; }"#).unwrap();
/// assert_eq!(result.value.to_string(), "6");
/// assert_eq!(result.console, vec!["hi".to_string()]);
///
/// let err = evaluate("int main() { return 10 / 0; }").unwrap_err();
/// assert_eq!(err, Error::Runtime(RuntimeError::DivisionByZero));
/// ```
pub fn evaluate(source: &str) -> Result<Evaluation, Error> {
    evaluate_with(source, &EvalOptions::default())
}

/// Parses and runs `source` with explicit options.
///
/// # Example
/// ```
/// use minic::{evaluate_with, interpreter::evaluator::core::EvalOptions};
///
/// let options = EvalOptions { entry: "start".to_string(),
///                             ..EvalOptions::default() };
/// let result = evaluate_with("int start() { return 7; }", &options).unwrap();
///
/// assert_eq!(result.value.to_string(), "7");
/// ```
pub fn evaluate_with(source: &str, options: &EvalOptions) -> Result<Evaluation, Error> {
    let program = parse_program(source)?;
    let mut context = Context::with_options(options.clone());
    Ok(context.run(program)?)
}

/// Core parsing entry points.
///
/// Holds the `ParseResult` alias and the program-level loop that turns a token
/// slice into a `Program`.
pub mod core;

/// Function definitions.
///
/// Parses `TYPE ID ( PARAMS ) { STMT* }` and its typed parameter list.
pub mod definition;

/// Statement parsing.
///
/// Chooses a statement rule from up to three tokens of lookahead.
pub mod statement;

/// Expression parsing.
///
/// Atoms, calls, increments and the flat, right-associative operator chain.
pub mod expression;

/// Brace-delimited statement blocks.
pub mod block;

/// Shared helpers: lookahead, expected-token checks, identifiers and
/// comma-separated lists.
pub mod utils;

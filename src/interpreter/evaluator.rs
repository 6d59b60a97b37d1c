/// Core evaluation logic and context management.
///
/// Contains the runtime `Context`, evaluation options, the statement executor
/// and the expression dispatcher.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, comparisons and logical
/// operators.
pub mod binary;

/// Increment and decrement evaluation.
pub mod unary;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, frame
/// management and return value computation.
pub mod function;

/// Scope and binding helpers for the evaluator.
pub mod utils;

/// Numeric conversion helpers.
///
/// Integer-to-float promotion happens in arithmetic, comparisons and typed
/// bindings, and always goes through one function.
pub mod num;
/// Stack growth for the recursive parser, printer and evaluator.
pub mod stack;

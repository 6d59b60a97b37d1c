/// Call evaluation for user-defined functions.
pub mod core;

/// Built-in functions.
pub mod builtin;

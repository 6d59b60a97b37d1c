/// Operator dispatch.
pub mod core;

/// Arithmetic on numbers.
pub mod scalar;

/// Relational and equality operators.
pub mod comparison;

/// Logical `&&` and `||`.
pub mod logic;

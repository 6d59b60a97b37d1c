use std::fmt;

use crate::{
    ast::Type,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::int_to_float,
};

/// Represents a runtime value in the interpreter.
///
/// Values are immutable; every operation builds a new one.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// A double precision floating point number.
    Float(f64),
    /// A boolean, produced by comparisons and logical operators and required
    /// by `if` and `while` conditions.
    Bool(bool),
    /// A string.
    Str(String),
    /// The absence of a value, returned by functions that never reach a
    /// `return` and by `print`.
    Void,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl Value {
    /// The type a value of this variant would be declared with.
    #[must_use]
    pub const fn type_of(&self) -> Type {
        match self {
            Self::Int(_) => Type::Int,
            Self::Float(_) => Type::Float,
            Self::Bool(_) => Type::Bool,
            Self::Str(_) => Type::String,
            Self::Void => Type::Void,
        }
    }

    /// Returns `true` for integers and floats.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// The zero value bound by a declaration without an initializer.
    ///
    /// # Errors
    /// `void` has no values, so declaring a `void` variable is a
    /// `TypeMismatch`.
    pub fn default_for(ty: Type) -> EvalResult<Self> {
        match ty {
            Type::Int => Ok(Self::Int(0)),
            Type::Float => Ok(Self::Float(0.0)),
            Type::Bool => Ok(Self::Bool(false)),
            Type::String => Ok(Self::Str(String::new())),
            Type::Void => Err(RuntimeError::type_mismatch("variables cannot have type void")),
        }
    }

    /// Extracts a boolean, or fails with a `TypeMismatch` naming `context`.
    ///
    /// # Example
    /// ```
    /// use minic::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_bool("if condition"), Ok(true));
    /// assert!(Value::Int(1).as_bool("if condition").is_err());
    /// ```
    pub fn as_bool(&self, context: &str) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => Err(RuntimeError::type_mismatch(format!("{context} must be bool, found {}",
                                                             other.type_of()))),
        }
    }

    /// Converts a numeric value to `f64`.
    ///
    /// Integers are promoted with [`int_to_float`], rounding those beyond
    /// `2^53`.
    ///
    /// # Errors
    /// `TypeMismatch` for non-numeric values.
    pub fn as_float(&self) -> EvalResult<f64> {
        match self {
            Self::Float(r) => Ok(*r),
            Self::Int(n) => Ok(int_to_float(*n)),
            other => {
                Err(RuntimeError::type_mismatch(format!("expected a number, found {}",
                                                        other.type_of())))
            },
        }
    }

    /// Checks that the value may be bound to something declared as `ty`.
    ///
    /// The only conversion performed is promoting an `int` to a `float`
    /// declaration.
    ///
    /// # Example
    /// ```
    /// use minic::{ast::Type, interpreter::value::core::Value};
    ///
    /// assert_eq!(Value::Int(2).conform_to(Type::Float, "x"), Ok(Value::Float(2.0)));
    /// assert!(Value::Bool(true).conform_to(Type::Int, "x").is_err());
    /// ```
    pub fn conform_to(self, ty: Type, what: &str) -> EvalResult<Self> {
        match (ty, self) {
            (Type::Float, Self::Int(n)) => Ok(Self::Float(int_to_float(n))),
            (ty, value) if value.type_of() == ty => Ok(value),
            (ty, value) => Err(RuntimeError::type_mismatch(format!("{what} is declared {ty} but got {}",
                                                                   value.type_of()))),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Void => write!(f, "void"),
        }
    }
}

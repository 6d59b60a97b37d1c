use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Maps an ordering to the result of a comparison operator.
///
/// `None` stands for unordered operands (a NaN was involved); those compare
/// unequal and fail every relational test.
#[must_use]
pub fn ordering_result(op: BinaryOperator, ordering: Option<Ordering>) -> bool {
    match ordering {
        None => op == BinaryOperator::NotEq,
        Some(ordering) => match op {
            BinaryOperator::Gt => ordering.is_gt(),
            BinaryOperator::GtEq => ordering.is_ge(),
            BinaryOperator::Lt => ordering.is_lt(),
            BinaryOperator::LtEq => ordering.is_le(),
            BinaryOperator::Eq => ordering.is_eq(),
            BinaryOperator::NotEq => ordering.is_ne(),
            _ => false,
        },
    }
}

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Numbers compare with numbers, promoting an integer when the other side
    /// is a float. Strings compare lexicographically. Booleans support only
    /// `==` and `!=`. Every other pairing is a `TypeMismatch`.
    ///
    /// # Example
    /// ```
    /// use minic::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_comparison(BinaryOperator::GtEq, &Value::Int(2), &Value::Float(2.0));
    /// assert_eq!(v, Ok(Value::Bool(true)));
    ///
    /// assert!(Context::eval_comparison(BinaryOperator::Lt, &Value::Bool(true), &Value::Bool(false)).is_err());
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value)
                           -> EvalResult<Value> {
        let ordering = match (left, right) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b))
                if matches!(op, BinaryOperator::Eq | BinaryOperator::NotEq) =>
            {
                Some(a.cmp(b))
            },
            (a, b) if a.is_numeric() && b.is_numeric() => a.as_float()?.partial_cmp(&b.as_float()?),
            (a, b) => {
                return Err(RuntimeError::type_mismatch(format!("cannot compare {} {op} {}",
                                                               a.type_of(),
                                                               b.type_of())));
            },
        };
        Ok(Value::Bool(ordering_result(op, ordering)))
    }
}

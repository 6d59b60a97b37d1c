use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `+`, `-`, `*` and `/`.
    ///
    /// Two integers give an integer; integer division truncates toward zero.
    /// If either operand is a float, both are converted and the result is a
    /// float. `+` on two strings concatenates them. Any other combination is a
    /// `TypeMismatch`.
    ///
    /// # Errors
    /// - `DivisionByZero` for a zero divisor, integer or float.
    /// - `Overflow` when an integer result leaves the `i64` range.
    ///
    /// # Example
    /// ```
    /// use minic::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_arithmetic(BinaryOperator::Div, &Value::Int(7), &Value::Int(2));
    /// assert_eq!(v, Ok(Value::Int(3)));
    ///
    /// let v = Context::eval_arithmetic(BinaryOperator::Div, &Value::Int(1), &Value::Int(0));
    /// assert_eq!(v, Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value)
                           -> EvalResult<Value> {
        match (left, right) {
            (Value::Int(a), Value::Int(b)) => Self::eval_int_arithmetic(op, *a, *b),
            (Value::Str(a), Value::Str(b)) if op == BinaryOperator::Plus => {
                Ok(Value::Str(format!("{a}{b}")))
            },
            (a, b) if a.is_numeric() && b.is_numeric() => {
                Self::eval_float_arithmetic(op, a.as_float()?, b.as_float()?)
            },
            (a, b) => Err(RuntimeError::type_mismatch(format!("cannot apply {op} to {} and {}",
                                                              a.type_of(),
                                                              b.type_of()))),
        }
    }

    fn eval_int_arithmetic(op: BinaryOperator, a: i64, b: i64) -> EvalResult<Value> {
        let result = match op {
            BinaryOperator::Plus => a.checked_add(b),
            BinaryOperator::Minus => a.checked_sub(b),
            BinaryOperator::Times => a.checked_mul(b),
            BinaryOperator::Div => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                a.checked_div(b)
            },
            _ => return Err(RuntimeError::type_mismatch(format!("{op} is not arithmetic"))),
        };
        result.map(Value::Int).ok_or(RuntimeError::Overflow)
    }

    fn eval_float_arithmetic(op: BinaryOperator, a: f64, b: f64) -> EvalResult<Value> {
        let result = match op {
            BinaryOperator::Plus => a + b,
            BinaryOperator::Minus => a - b,
            BinaryOperator::Times => a * b,
            BinaryOperator::Div => {
                if b == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                a / b
            },
            _ => return Err(RuntimeError::type_mismatch(format!("{op} is not arithmetic"))),
        };
        Ok(Value::Float(result))
    }
}

use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an increment or decrement.
    ///
    /// The operand must be a variable holding an `int` or a `float`. The
    /// variable is updated in place; prefix forms yield the updated value and
    /// postfix forms the value before the update.
    ///
    /// # Example
    /// ```
    /// use minic::{
    ///     ast::{Expr, Type, UnaryOperator},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::new();
    /// context.declare("x", Type::Int, Value::Int(5)).unwrap();
    ///
    /// let x = Expr::Variable("x".to_string());
    /// assert_eq!(context.eval_unary_op(UnaryOperator::PostDecrement, &x), Ok(Value::Int(5)));
    /// assert_eq!(context.eval_unary_op(UnaryOperator::PreIncrement, &x), Ok(Value::Int(5)));
    /// assert_eq!(context.lookup("x").unwrap().value, Value::Int(5));
    /// ```
    pub fn eval_unary_op(&mut self, op: UnaryOperator, expr: &Expr) -> EvalResult<Value> {
        let Expr::Variable(name) = expr else {
            return Err(RuntimeError::type_mismatch(format!("operand of {} must be a variable",
                                                           op.symbol())));
        };

        let old = self.lookup(name)?.value.clone();
        let new = Self::eval_unary(op, &old)?;
        self.assign(name, new.clone())?;

        Ok(if op.is_prefix() { new } else { old })
    }

    /// Computes the stepped value for an increment or decrement.
    ///
    /// # Errors
    /// `Overflow` when an integer step leaves the `i64` range, `TypeMismatch`
    /// for non-numeric values.
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        let up = matches!(op, UnaryOperator::PreIncrement | UnaryOperator::PostIncrement);

        match value {
            Value::Int(n) => {
                let stepped = if up { n.checked_add(1) } else { n.checked_sub(1) };
                stepped.map(Value::Int).ok_or(RuntimeError::Overflow)
            },
            Value::Float(r) => Ok(Value::Float(if up { r + 1.0 } else { r - 1.0 })),
            other => Err(RuntimeError::type_mismatch(format!("cannot apply {} to {}",
                                                             op.symbol(),
                                                             other.type_of()))),
        }
    }
}

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `&&` and `||` on two booleans.
    ///
    /// # Example
    /// ```
    /// use minic::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_logic(BinaryOperator::Or, &Value::Bool(false), &Value::Bool(true));
    /// assert_eq!(v, Ok(Value::Bool(true)));
    /// ```
    pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        let l = left.as_bool(&format!("left operand of {op}"))?;
        let r = right.as_bool(&format!("right operand of {op}"))?;

        match op {
            BinaryOperator::And => Ok(Value::Bool(l && r)),
            BinaryOperator::Or => Ok(Value::Bool(l || r)),
            _ => Err(RuntimeError::type_mismatch(format!("{op} is not a logical operator"))),
        }
    }
}

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates both operands, left first, then applies the operator.
    ///
    /// Both sides are always evaluated, so side effects in the right operand of
    /// `&&` and `||` happen even when the left operand decides the result.
    pub fn eval_binary_op(&mut self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr)
                          -> EvalResult<Value> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Self::eval_binary(op, &left, &right)
    }

    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic goes to `eval_arithmetic`, relational and equality operators
    /// to `eval_comparison` and `&&`/`||` to `eval_logic`.
    ///
    /// # Example
    /// ```
    /// use minic::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Plus, &Value::Int(3), &Value::Int(4));
    /// assert_eq!(result, Ok(Value::Int(7)));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Lt, &Value::from("a"), &Value::from("b"));
    /// assert_eq!(result, Ok(Value::Bool(true)));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{And, Div, Eq, Gt, GtEq, Lt, LtEq, Minus, NotEq, Or, Plus, Times};

        match op {
            Plus | Minus | Times | Div => Self::eval_arithmetic(op, left, right),
            Gt | GtEq | Lt | LtEq | Eq | NotEq => Self::eval_comparison(op, left, right),
            And | Or => Self::eval_logic(op, left, right),
        }
    }
}

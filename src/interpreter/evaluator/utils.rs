use std::collections::HashMap;

use crate::{
    ast::Type,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Binding, Context, EvalResult, Frame},
        value::core::Value,
    },
};

impl Context {
    /// The frame of the function currently executing.
    fn frame_mut(&mut self) -> &mut Frame {
        if self.frames.is_empty() {
            self.frames.push(Frame::new("<toplevel>"));
        }
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// Pushes a new local scope.
    ///
    /// A fresh empty scope is added on top of the current frame's scope stack.
    ///
    /// # Example
    /// ```
    /// use minic::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// let initial = context.frames[0].scopes.len();
    ///
    /// context.push_scope();
    ///
    /// assert_eq!(context.frames[0].scopes.len(), initial + 1);
    /// ```
    pub fn push_scope(&mut self) {
        self.frame_mut().scopes.push(HashMap::new());
    }

    /// Removes the innermost local scope of the current frame.
    pub fn pop_scope(&mut self) {
        self.frame_mut().scopes.pop();
    }

    /// Binds `name` in the innermost scope.
    ///
    /// The value is conformed to `ty` first, so an `int` initializer of a
    /// `float` variable is stored as a float. Shadowing a name from an outer
    /// scope is allowed; repeating it in the same scope is not.
    ///
    /// # Errors
    /// - `TypeMismatch` if `ty` is `void` or the value does not fit `ty`.
    /// - `DuplicateDeclaration` if the innermost scope already binds `name`.
    ///
    /// # Example
    /// ```
    /// use minic::{
    ///     ast::Type,
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::new();
    /// context.declare("x", Type::Float, Value::Int(1)).unwrap();
    ///
    /// assert_eq!(context.lookup("x").unwrap().value, Value::Float(1.0));
    /// assert_eq!(context.declare("x", Type::Int, Value::Int(2)),
    ///            Err(RuntimeError::DuplicateDeclaration { name: "x".to_string() }));
    /// ```
    pub fn declare(&mut self, name: &str, ty: Type, value: Value) -> EvalResult<()> {
        if ty == Type::Void {
            return Err(RuntimeError::type_mismatch(format!("variable {name} cannot have type void")));
        }
        let value = value.conform_to(ty, name)?;

        let frame = self.frame_mut();
        if frame.scopes.is_empty() {
            frame.scopes.push(HashMap::new());
        }
        let last = frame.scopes.len() - 1;
        let scope = &mut frame.scopes[last];

        if scope.contains_key(name) {
            return Err(RuntimeError::DuplicateDeclaration { name: name.to_string() });
        }
        tracing::trace!(%name, %ty, %value, "declare");
        scope.insert(name.to_string(), Binding { ty, value });
        Ok(())
    }

    /// Retrieves a binding from the current frame.
    ///
    /// Lookup begins at the innermost scope and proceeds outward. Variables of
    /// the caller are never visible.
    ///
    /// # Errors
    /// `UndefinedVariable` if no active scope binds `name`.
    pub fn lookup(&self, name: &str) -> EvalResult<&Binding> {
        self.frames
            .last()
            .and_then(|frame| frame.scopes.iter().rev().find_map(|scope| scope.get(name)))
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }

    /// Updates the nearest binding of `name`.
    ///
    /// The new value is conformed to the type the variable was declared with.
    ///
    /// # Errors
    /// `UndefinedVariable` if no active scope binds `name`, `TypeMismatch` if
    /// the value does not fit.
    pub fn assign(&mut self, name: &str, value: Value) -> EvalResult<()> {
        let binding = self.frame_mut()
                          .scopes
                          .iter_mut()
                          .rev()
                          .find_map(|scope| scope.get_mut(name))
                          .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })?;

        binding.value = value.conform_to(binding.ty, name)?;
        tracing::trace!(%name, value = %binding.value, "assign");
        Ok(())
    }
}

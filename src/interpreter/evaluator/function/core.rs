use std::collections::HashSet;

use crate::{
    ast::{Expr, FunctionDef, Type},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Binding, Context, EvalResult, Flow, Frame},
            function::builtin,
        },
        value::core::Value,
    },
    util::stack::ensure_sufficient_stack,
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the context and a slice of evaluated argument values.
type BuiltinFn = fn(&mut Context, &[Value]) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a string name, the exact number of arguments and a
/// function pointer implementing the builtin.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names reserved by builtins. User definitions may not reuse them.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "print" => { arity: 1, func: builtin::print },
}

impl Context {
    /// Evaluates a function call.
    ///
    /// Arguments are evaluated left to right in the caller's frame. The name
    /// is then looked up among the builtins first and the user definitions
    /// second.
    ///
    /// # Errors
    /// `UndefinedFunction` for an unknown name, `ArgumentCountMismatch` for a
    /// wrong number of arguments, and anything the callee raises.
    pub fn eval_function_call(&mut self, name: &str, arguments: &[Expr]) -> EvalResult<Value> {
        let args = arguments.iter()
                            .map(|arg| self.eval(arg))
                            .collect::<EvalResult<Vec<_>>>()?;

        if let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) {
            if builtin.arity != args.len() {
                return Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                                 expected: builtin.arity,
                                                                 found:    args.len(), });
            }
            return (builtin.func)(self, &args);
        }

        let def = self.functions
                      .get(name)
                      .cloned()
                      .ok_or_else(|| RuntimeError::UndefinedFunction { name: name.to_string() })?;

        ensure_sufficient_stack(|| self.invoke(&def, args)).map(|(value, _)| value)
    }

    /// Runs a user-defined function in a new frame.
    ///
    /// Parameters are bound in the frame's outermost scope after being
    /// conformed to their declared types. The frame is popped again whether
    /// the body returns normally or fails, and handed back together with the
    /// result so callers can inspect the final bindings.
    ///
    /// A body that finishes without reaching `return` yields `Void`. A
    /// returned value must conform to the declared return type.
    ///
    /// # Errors
    /// - `CallDepthExceeded` if the call would nest deeper than
    ///   `EvalOptions::max_call_depth`.
    /// - `ArgumentCountMismatch` if `args` does not match the parameter list.
    /// - `TypeMismatch` for a `void` or repeated parameter, an argument of the
    ///   wrong type or a returned value of the wrong type.
    #[tracing::instrument(level = "debug", skip_all, fields(function = %def.name))]
    pub fn invoke(&mut self, def: &FunctionDef, args: Vec<Value>) -> EvalResult<(Value, Frame)> {
        // The bottom frame is the caller of the entry function.
        let depth = self.frames.len();
        if depth > self.options.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded { limit: self.options.max_call_depth });
        }

        if args.len() != def.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name:     def.name.clone(),
                                                             expected: def.params.len(),
                                                             found:    args.len(), });
        }

        let mut seen = HashSet::new();
        for param in &def.params {
            if param.ty == Type::Void {
                return Err(RuntimeError::type_mismatch(format!("parameter {} of {} cannot have type void",
                                                               param.name, def.name)));
            }
            if !seen.insert(param.name.as_str()) {
                return Err(RuntimeError::type_mismatch(format!("parameter {} of {} is declared twice",
                                                               param.name, def.name)));
            }
        }

        let mut frame = Frame::new(&def.name);
        for (param, arg) in def.params.iter().zip(args) {
            let value = arg.conform_to(param.ty, &param.name)?;
            if let Some(scope) = frame.scopes.first_mut() {
                scope.insert(param.name.clone(), Binding { ty: param.ty, value });
            }
        }

        tracing::debug!(depth, "enter");
        self.frames.push(frame);
        let flow = self.exec_statements(&def.body);
        let frame = self.frames.pop().unwrap_or_default();
        tracing::debug!(depth, "exit");

        let value = match flow? {
            Flow::Return(value) => {
                value.conform_to(def.return_type, &format!("return value of {}", def.name))?
            },
            Flow::Next => Value::Void,
        };

        Ok((value, frame))
    }
}

/// Returns `true` if `name` belongs to a builtin function.
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

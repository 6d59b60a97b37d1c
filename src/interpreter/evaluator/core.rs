use std::{
    collections::{BTreeMap, HashMap},
    rc::Rc,
};

use crate::{
    ast::{Expr, FunctionDef, Program, Statement, Type},
    error::RuntimeError,
    interpreter::{
        evaluator::function::core::is_builtin,
        value::core::Value,
    },
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Name of the function run by default.
pub const DEFAULT_ENTRY: &str = "main";
/// Default limit on nested calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 256;

/// Settings for a single evaluation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalOptions {
    /// The function invoked, without arguments, to start the program.
    pub entry:          String,
    /// Calls nested deeper than this fail with `CallDepthExceeded`.
    pub max_call_depth: usize,
    /// Also write every `print` line to standard output as it happens.
    pub echo_console:   bool,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self { entry:          DEFAULT_ENTRY.to_string(),
               max_call_depth: DEFAULT_MAX_CALL_DEPTH,
               echo_console:   false, }
    }
}

/// A name bound in some scope, together with the type it was declared with.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// Declared type; later assignments must conform to it.
    pub ty:    Type,
    /// Current value.
    pub value: Value,
}

/// The scopes of one function invocation, innermost last.
#[derive(Debug, Default, Clone)]
pub struct Frame {
    /// Name of the function being executed.
    pub function: String,
    /// Block scopes. The first one holds the parameters.
    pub scopes:   Vec<HashMap<String, Binding>>,
}

impl Frame {
    /// A frame with a single empty scope.
    #[must_use]
    pub fn new(function: &str) -> Self {
        Self { function: function.to_string(),
               scopes:   vec![HashMap::new()], }
    }
}

/// How control leaves a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Carry on with the next statement.
    Next,
    /// A `return` was reached; unwind to the caller with this value.
    Return(Value),
}

/// Everything a finished evaluation hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The entry function's return value, or `Void` if it never returned.
    pub value:       Value,
    /// Lines written by `print`, in order.
    pub console:     Vec<String>,
    /// Names of all registered functions, sorted.
    pub functions:   Vec<String>,
    /// The entry function's outermost bindings at the moment it returned.
    pub entry_scope: BTreeMap<String, Value>,
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state for one request: the global table
/// of function definitions, the call stack and the console. It is created per
/// evaluation and never shared.
pub struct Context {
    /// A mapping from function names to their definitions.
    pub functions: HashMap<String, Rc<FunctionDef>>,
    /// The call stack. The bottom frame belongs to the caller of the entry
    /// function and stays empty unless the context is driven by hand.
    pub frames:    Vec<Frame>,
    /// Lines written by `print`.
    pub console:   Vec<String>,
    /// Settings for this request.
    pub options:   EvalOptions,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a context with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(EvalOptions::default())
    }

    /// Creates a context with no functions and a single top-level frame.
    #[must_use]
    pub fn with_options(options: EvalOptions) -> Self {
        Self { functions: HashMap::new(),
               frames: vec![Frame::new("<toplevel>")],
               console: Vec::new(),
               options }
    }

    /// Registers every definition of `program` in the global function table.
    ///
    /// All definitions are registered before anything runs, so functions may
    /// call each other regardless of their order in the source.
    ///
    /// # Errors
    /// `FunctionAlreadyDefined` for a repeated name and
    /// `BuiltinFunctionRedefinition` for a name taken by a builtin.
    pub fn register(&mut self, program: Program) -> EvalResult<()> {
        for def in program.definitions {
            if is_builtin(&def.name) {
                return Err(RuntimeError::BuiltinFunctionRedefinition { name: def.name.clone() });
            }
            if self.functions.contains_key(&def.name) {
                return Err(RuntimeError::FunctionAlreadyDefined { name: def.name.clone() });
            }
            tracing::debug!(name = %def.name, "registered function");
            self.functions.insert(def.name.clone(), Rc::new(def));
        }
        Ok(())
    }

    /// Runs a program: registers its definitions and calls the entry function
    /// with no arguments.
    ///
    /// # Errors
    /// `UndefinedFunction` if the entry function does not exist, or any error
    /// raised while running it.
    ///
    /// # Example
    /// ```
    /// use minic::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     parse_program,
    /// };
    ///
    /// let program = parse_program("int main() { int x = 5; x--; x--; return x; }").unwrap();
    /// let result = Context::new().run(program).unwrap();
    ///
    /// assert_eq!(result.value, Value::Int(3));
    /// assert_eq!(result.entry_scope["x"], Value::Int(3));
    /// ```
    pub fn run(&mut self, program: Program) -> EvalResult<Evaluation> {
        self.register(program)?;

        let name = self.options.entry.clone();
        let entry = self.functions
                        .get(&name)
                        .cloned()
                        .ok_or(RuntimeError::UndefinedFunction { name })?;

        tracing::debug!(entry = %entry.name, "running entry function");
        let (value, frame) = self.invoke(&entry, Vec::new())?;

        let entry_scope = frame.scopes
                               .into_iter()
                               .next()
                               .unwrap_or_default()
                               .into_iter()
                               .map(|(name, binding)| (name, binding.value))
                               .collect();

        let mut functions = self.functions.keys().cloned().collect::<Vec<_>>();
        functions.sort();

        Ok(Evaluation { value,
                        console: self.console.clone(),
                        functions,
                        entry_scope })
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Binary operators
    /// evaluate both operands, left first, before applying the operator; there
    /// is no short circuit for `&&` and `||`.
    ///
    /// # Example
    /// ```
    /// use minic::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::new();
    /// let expr = Expr::binary(Expr::Int(2), BinaryOperator::Times, Expr::Float(1.5));
    ///
    /// assert_eq!(context.eval(&expr), Ok(Value::Float(3.0)));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        ensure_sufficient_stack(|| match expr {
            Expr::Int(n) => Ok(Value::Int(*n)),
            Expr::Float(r) => Ok(Value::Float(*r)),
            Expr::Str(s) => Ok(Value::Str(s.clone())),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Variable(name) => Ok(self.lookup(name)?.value.clone()),
            Expr::Call { name, arguments } => self.eval_function_call(name, arguments),
            Expr::Binary { left, op, right } => self.eval_binary_op(left, *op, right),
            Expr::Unary { op, expr } => self.eval_unary_op(*op, expr),
        })
    }

    /// Executes a single statement in the current scope.
    ///
    /// Declarations bind in the innermost scope, assignments update the
    /// nearest binding, and the bodies of `if` and `while` run in a child
    /// scope that is dropped when the block exits.
    ///
    /// # Returns
    /// [`Flow::Return`] once a `return` is reached, [`Flow::Next`] otherwise.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Init { ty, name, value } => {
                let value = self.eval(value)?;
                self.declare(name, *ty, value)?;
            },
            Statement::Declaration { ty, name } => {
                let value = Value::default_for(*ty)?;
                self.declare(name, *ty, value)?;
            },
            Statement::Assignment { name, value } => {
                self.lookup(name)?;
                let value = self.eval(value)?;
                self.assign(name, value)?;
            },
            Statement::Expression(expr) => {
                self.eval(expr)?;
            },
            Statement::IfElse { condition,
                                then_branch,
                                else_branch, } => {
                let branch = if self.eval(condition)?.as_bool("if condition")? {
                    then_branch
                } else {
                    else_branch
                };
                return self.exec_block(branch);
            },
            Statement::While { condition, body } => {
                while self.eval(condition)?.as_bool("while condition")? {
                    if let Flow::Return(value) = self.exec_block(body)? {
                        return Ok(Flow::Return(value));
                    }
                }
            },
            Statement::Return(expr) => return Ok(Flow::Return(self.eval(expr)?)),
        }
        Ok(Flow::Next)
    }

    /// Executes statements in order in the current scope, stopping at the
    /// first `return`.
    pub fn exec_statements(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            if let Flow::Return(value) = self.exec_statement(statement)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Next)
    }

    /// Executes statements inside a fresh child scope.
    ///
    /// The scope is removed again whether the block finishes, returns or
    /// fails.
    pub fn exec_block(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        self.push_scope();
        let flow = ensure_sufficient_stack(|| self.exec_statements(statements));
        self.pop_scope();
        flow
    }
}

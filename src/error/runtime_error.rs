#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read or assign a variable that is not bound.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is neither defined nor built in.
    UndefinedFunction {
        /// The name of the function.
        name: String,
    },
    /// Declared a variable twice in the same scope.
    DuplicateDeclaration {
        /// The name of the variable.
        name: String,
    },
    /// A value had an unexpected or incompatible type.
    TypeMismatch {
        /// Details about the type mismatch.
        details: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Two definitions share a name.
    FunctionAlreadyDefined {
        /// The name of the function.
        name: String,
    },
    /// Attempted to define a function named like a builtin.
    BuiltinFunctionRedefinition {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
    },
    /// Integer arithmetic overflowed.
    Overflow,
    /// Calls nested deeper than the configured limit.
    CallDepthExceeded {
        /// The configured limit.
        limit: usize,
    },
}

impl RuntimeError {
    /// Shorthand for building a [`RuntimeError::TypeMismatch`].
    pub fn type_mismatch(details: impl Into<String>) -> Self {
        Self::TypeMismatch { details: details.into() }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => {
                write!(f, "Runtime error: Undefined variable '{name}'.")
            },
            Self::UndefinedFunction { name } => {
                write!(f, "Runtime error: Undefined function '{name}'.")
            },
            Self::DuplicateDeclaration { name } => write!(f,
                                                          "Runtime error: Variable '{name}' is already declared in this scope."),
            Self::TypeMismatch { details } => write!(f, "Runtime error: Type mismatch: {details}."),
            Self::DivisionByZero => write!(f, "Runtime error: Division by zero."),
            Self::FunctionAlreadyDefined { name } => {
                write!(f, "Runtime error: Function '{name}' is already defined.")
            },
            Self::BuiltinFunctionRedefinition { name } => {
                write!(f, "Runtime error: Cannot redefine built-in function '{name}'.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found, } => write!(f,
                                                             "Runtime error: Function '{name}' takes {expected} argument(s) but {found} were supplied."),
            Self::Overflow => write!(f,
                                     "Runtime error: Integer overflow while trying to compute result."),
            Self::CallDepthExceeded { limit } => {
                write!(f, "Runtime error: Call depth exceeded the limit of {limit}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}

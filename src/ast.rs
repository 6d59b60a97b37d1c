use std::fmt;

/// A type annotation on a declaration, parameter or function.
///
/// Types carry no runtime behavior; the evaluator uses them to validate the
/// values bound to a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// `int`
    Int,
    /// `bool`
    Bool,
    /// `float`
    Float,
    /// `string`
    String,
    /// `void`
    Void,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Float => "float",
            Self::String => "string",
            Self::Void => "void",
        };
        write!(f, "{name}")
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every binary node owns exactly two children and every unary node exactly
/// one. Because the grammar gives all binary operators the same precedence
/// and associates them to the right, a parsed `Binary` only has a `Binary` on
/// its left when the source used parentheses.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal.
    Int(i64),
    /// A floating point literal.
    Float(f64),
    /// A string literal with its escapes resolved.
    Str(String),
    /// `true` or `false`.
    Bool(bool),
    /// Reference to a variable by name.
    Variable(String),
    /// Function call expression (e.g. `square(x)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
    },
    /// A binary operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// An increment or decrement.
    Unary {
        /// The operator to apply.
        op:   UnaryOperator,
        /// The operand, which must name a variable at runtime.
        expr: Box<Self>,
    },
}

impl Expr {
    /// Builds a binary node.
    ///
    /// ## Example
    /// ```
    /// use minic::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(Expr::Int(1), BinaryOperator::Plus, Expr::Int(2));
    ///
    /// assert!(matches!(sum, Expr::Binary { op: BinaryOperator::Plus, .. }));
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       op,
                       right: Box::new(right) }
    }

    /// Builds a unary node.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self) -> Self {
        Self::Unary { op,
                      expr: Box::new(expr) }
    }

    /// Returns `true` for nodes the parser reads as a single atom, which never
    /// need parentheses when printed.
    #[must_use]
    pub const fn is_atom(&self) -> bool {
        !matches!(self, Self::Binary { .. } | Self::Unary { .. })
    }

    /// Moves this node's children onto `pending`, leaving leaves behind.
    fn take_children(&mut self, pending: &mut Vec<Self>) {
        match self {
            Self::Call { arguments, .. } => pending.append(arguments),
            Self::Binary { left, right, .. } => {
                pending.push(std::mem::replace(&mut **left, Self::Bool(false)));
                pending.push(std::mem::replace(&mut **right, Self::Bool(false)));
            },
            Self::Unary { expr, .. } => pending.push(std::mem::replace(&mut **expr, Self::Bool(false))),
            _ => {},
        }
    }
}

// Long operator chains nest one box per operand; tearing them down
// recursively would overflow the stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut child) = pending.pop() {
            child.take_children(&mut pending);
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and logical connectives.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Plus,
    /// Subtraction (`-`)
    Minus,
    /// Multiplication (`*`)
    Times,
    /// Division (`/`)
    Div,
    /// Greater than (`>`)
    Gt,
    /// Greater than or equal (`>=`)
    GtEq,
    /// Less than (`<`)
    Lt,
    /// Less than or equal (`<=`)
    LtEq,
    /// Equal to (`==`)
    Eq,
    /// Not equal to (`!=`)
    NotEq,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{And, Div, Eq, Gt, GtEq, Lt, LtEq, Minus, NotEq, Or, Plus, Times};
        let operator = match self {
            Plus => "+",
            Minus => "-",
            Times => "*",
            Div => "/",
            Gt => ">",
            GtEq => ">=",
            Lt => "<",
            LtEq => "<=",
            Eq => "==",
            NotEq => "!=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

/// Represents an increment or decrement operator.
///
/// The pre forms yield the updated value, the post forms the value the
/// variable held before the update.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `++x`
    PreIncrement,
    /// `--x`
    PreDecrement,
    /// `x++`
    PostIncrement,
    /// `x--`
    PostDecrement,
}

impl UnaryOperator {
    /// The operator's source text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::PreIncrement | Self::PostIncrement => "++",
            Self::PreDecrement | Self::PostDecrement => "--",
        }
    }

    /// Returns `true` if the operator is written before its operand.
    #[must_use]
    pub const fn is_prefix(self) -> bool {
        matches!(self, Self::PreIncrement | Self::PreDecrement)
    }
}

/// Represents a statement inside a function body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `int x = 1;`
    Init {
        /// The declared type.
        ty:    Type,
        /// The name of the variable.
        name:  String,
        /// The initial value of the variable.
        value: Expr,
    },
    /// `int x;`
    Declaration {
        /// The declared type.
        ty:   Type,
        /// The name of the variable.
        name: String,
    },
    /// `x = 1;`
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
    },
    /// A standalone expression evaluated for its side effects.
    Expression(Expr),
    /// `if (c) { ... } else { ... }`
    IfElse {
        /// The condition, which must evaluate to a boolean.
        condition:   Expr,
        /// Statements run when the condition holds.
        then_branch: Vec<Self>,
        /// Statements run otherwise. Empty when the source had no `else`.
        else_branch: Vec<Self>,
    },
    /// `while (c) { ... }`
    While {
        /// The loop condition, which must evaluate to a boolean.
        condition: Expr,
        /// The loop body.
        body:      Vec<Self>,
    },
    /// `return e;`
    Return(Expr),
}

/// A single typed function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// The declared type.
    pub ty:   Type,
    /// The parameter name.
    pub name: String,
}

/// Represents a user-defined function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The declared return type.
    pub return_type: Type,
    /// The name of the function.
    pub name:        String,
    /// The parameters, in declaration order.
    pub params:      Vec<Param>,
    /// The statements of the body.
    pub body:        Vec<Statement>,
}

/// A whole program: function definitions in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level definitions.
    pub definitions: Vec<FunctionDef>,
}

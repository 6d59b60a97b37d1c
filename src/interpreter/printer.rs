use crate::{
    ast::{Expr, FunctionDef, Program, Statement},
    interpreter::lexer::escape_string,
    util::stack::ensure_sufficient_stack,
};

const INDENT: &str = "    ";

/// Renders a program as source text.
///
/// Definitions are separated by a blank line, statements sit one per line and
/// blocks are indented by four spaces. Parsing the output again yields an
/// equal AST.
///
/// # Example
/// ```
/// use minic::{interpreter::printer::print_program, parse_program};
///
/// let program = parse_program("int main(){int x=1+2;return x;}").unwrap();
///
/// assert_eq!(print_program(&program),
///            "int main() {\n    int x = 1 + 2;\n    return x;\n}\n");
/// ```
#[must_use]
pub fn print_program(program: &Program) -> String {
    let mut out = String::new();
    for (i, def) in program.definitions.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        print_definition(&mut out, def);
    }
    out
}

/// Appends one indented line.
fn push_line(out: &mut String, depth: usize, parts: &[&str]) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    for part in parts {
        out.push_str(part);
    }
    out.push('\n');
}

/// Renders one function definition, including its trailing newline.
fn print_definition(out: &mut String, def: &FunctionDef) {
    let params = def.params
                    .iter()
                    .map(|p| format!("{} {}", p.ty, p.name))
                    .collect::<Vec<_>>()
                    .join(", ");
    let header = format!("{} {}({params}) {{", def.return_type, def.name);
    push_line(out, 0, &[&header]);
    print_statements(out, &def.body, 1);
    push_line(out, 0, &["}"]);
}

fn print_statements(out: &mut String, statements: &[Statement], depth: usize) {
    for statement in statements {
        print_statement(out, statement, depth);
    }
}

fn print_statement(out: &mut String, statement: &Statement, depth: usize) {
    match statement {
        Statement::Init { ty, name, value } => {
            let ty = ty.to_string();
            push_line(out, depth, &[&ty, " ", name, " = ", &print_expr(value), ";"]);
        },
        Statement::Declaration { ty, name } => {
            let ty = ty.to_string();
            push_line(out, depth, &[&ty, " ", name, ";"]);
        },
        Statement::Assignment { name, value } => {
            push_line(out, depth, &[name, " = ", &print_expr(value), ";"]);
        },
        Statement::Expression(expr) => push_line(out, depth, &[&print_expr(expr), ";"]),
        Statement::IfElse { condition,
                            then_branch,
                            else_branch, } => {
            push_line(out, depth, &["if (", &print_expr(condition), ") {"]);
            print_statements(out, then_branch, depth + 1);
            push_line(out, depth, &["} else {"]);
            print_statements(out, else_branch, depth + 1);
            push_line(out, depth, &["}"]);
        },
        Statement::While { condition, body } => {
            push_line(out, depth, &["while (", &print_expr(condition), ") {"]);
            print_statements(out, body, depth + 1);
            push_line(out, depth, &["}"]);
        },
        Statement::Return(expr) => push_line(out, depth, &["return ", &print_expr(expr), ";"]),
    }
}

/// Renders an expression.
///
/// The right operand of a binary node is printed bare, since the grammar
/// already nests to the right. A left operand that is not an atom is wrapped
/// in parentheses, as is the operand of an increment or decrement.
///
/// # Example
/// ```
/// use minic::{
///     ast::{BinaryOperator, Expr},
///     interpreter::printer::print_expr,
/// };
///
/// let nested_left = Expr::binary(Expr::binary(Expr::Int(10), BinaryOperator::Minus, Expr::Int(2)),
///                                BinaryOperator::Minus,
///                                Expr::Int(3));
///
/// assert_eq!(print_expr(&nested_left), "(10 - 2) - 3");
/// ```
#[must_use]
pub fn print_expr(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr);
    out
}

/// Appends `expr` to `out`, walking right-nested binary chains in a loop.
fn write_expr(out: &mut String, expr: &Expr) {
    ensure_sufficient_stack(|| {
        let mut expr = expr;
        loop {
            match expr {
                Expr::Int(n) => out.push_str(&n.to_string()),
                Expr::Float(r) => out.push_str(&format!("{r:?}")),
                Expr::Str(s) => out.push_str(&escape_string(s)),
                Expr::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
                Expr::Variable(name) => out.push_str(name),
                Expr::Call { name, arguments } => {
                    out.push_str(name);
                    out.push('(');
                    for (i, arg) in arguments.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        write_expr(out, arg);
                    }
                    out.push(')');
                },
                Expr::Binary { left, op, right } => {
                    write_operand(out, left);
                    out.push_str(&format!(" {op} "));
                    expr = right;
                    continue;
                },
                Expr::Unary { op, expr } => {
                    if op.is_prefix() {
                        out.push_str(op.symbol());
                        write_operand(out, expr);
                    } else {
                        write_operand(out, expr);
                        out.push_str(op.symbol());
                    }
                },
            }
            break;
        }
    });
}

fn write_operand(out: &mut String, expr: &Expr) {
    if expr.is_atom() {
        write_expr(out, expr);
    } else {
        out.push('(');
        write_expr(out, expr);
        out.push(')');
    }
}

use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind, unescape_string},
        parser::{
            core::ParseResult,
            utils::{expect, parse_comma_separated, peek_kind, unexpected_next},
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses a full expression.
///
/// An expression starts with one atom. What follows the atom decides the
/// shape:
///
/// - a binary operator: the operator is consumed and the *entire* rest of the
///   expression becomes the right operand, so every operator shares one
///   precedence level and chains associate to the right (`1 + 2 * 3` is
///   `1 + (2 * 3)` and `10 - 2 - 3` is `10 - (2 - 3)`);
/// - `++` or `--`: a post increment/decrement that ends the expression;
/// - anything else: the atom alone.
///
/// A leading `++` or `--` applies to the following atom and also ends the
/// expression.
///
/// Grammar:
/// ```text
///     expression := ("++" | "--") atom
///                 | atom ("++" | "--")
///                 | atom binary_op expression
///                 | atom
/// ```
///
/// # Example
/// ```
/// use minic::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::expression::parse_expression},
/// };
///
/// let tokens = tokenize("1 + 2 * 3");
/// let expr = parse_expression(&mut tokens.iter().peekable()).unwrap();
///
/// let expected = Expr::binary(Expr::Int(1),
///                             BinaryOperator::Plus,
///                             Expr::binary(Expr::Int(2), BinaryOperator::Times, Expr::Int(3)));
/// assert_eq!(expr, expected);
/// ```
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    ensure_sufficient_stack(|| {
        let mut operands = Vec::new();
        let mut operators = Vec::new();

        loop {
            if let Some(op) = prefix_operator(peek_kind(tokens, 0)) {
                tokens.next();
                operands.push(Expr::unary(op, parse_atom(tokens)?));
                break;
            }

            let atom = parse_atom(tokens)?;

            if let Some(op) = postfix_operator(peek_kind(tokens, 0)) {
                tokens.next();
                operands.push(Expr::unary(op, atom));
                break;
            }

            operands.push(atom);
            match binary_operator(peek_kind(tokens, 0)) {
                Some(op) => {
                    tokens.next();
                    operators.push(op);
                },
                None => break,
            }
        }

        // One more operand than operators; fold from the right.
        let mut expr = operands.pop().ok_or_else(|| unexpected_next(tokens, "expression"))?;
        while let (Some(op), Some(left)) = (operators.pop(), operands.pop()) {
            expr = Expr::binary(left, op, expr);
        }
        Ok(expr)
    })
}

/// Parses an atom: a literal, a variable, a call or a parenthesized
/// expression.
///
/// Grammar:
/// ```text
///     atom := INT | FLOAT | STRING | "true" | "false"
///           | IDENT | IDENT "(" (expression ("," expression)*)? ")"
///           | "(" expression ")"
/// ```
///
/// # Errors
/// `ExpressionExpected` when no atom starts at the cursor, `LiteralTooLarge`
/// for integer literals outside the `i64` range and float literals that
/// overflow to infinity.
pub fn parse_atom<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(tok) = tokens.peek().copied() else {
        return Err(ParseError::UnexpectedEndOfInput { expected: "expression".to_string() });
    };

    let atom = match tok.kind {
        TokenKind::Int => {
            let value = tok.lexeme
                           .parse::<i64>()
                           .map_err(|_| ParseError::LiteralTooLarge { literal: tok.lexeme.clone(),
                                                                      offset:  tok.offset, })?;
            Expr::Int(value)
        },
        TokenKind::Float => {
            let value = tok.lexeme
                           .parse::<f64>()
                           .ok()
                           .filter(|r| r.is_finite())
                           .ok_or_else(|| ParseError::LiteralTooLarge { literal: tok.lexeme.clone(),
                                                                        offset:  tok.offset, })?;
            Expr::Float(value)
        },
        TokenKind::Str => Expr::Str(unescape_string(&tok.lexeme)),
        TokenKind::True => Expr::Bool(true),
        TokenKind::False => Expr::Bool(false),
        TokenKind::Identifier => return parse_variable_or_call(tokens),
        TokenKind::LParen => return parse_grouping(tokens),
        _ => {
            return Err(ParseError::ExpressionExpected { found:  tok.lexeme.clone(),
                                                        offset: tok.offset, });
        },
    };

    tokens.next();
    Ok(atom)
}

/// Parses `name` or `name(arg, ...)`.
fn parse_variable_or_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let name = expect(tokens, TokenKind::Identifier, "identifier")?.lexeme.clone();

    if peek_kind(tokens, 0) != TokenKind::LParen {
        return Ok(Expr::Variable(name));
    }

    tokens.next();
    let arguments = parse_comma_separated(tokens, parse_expression, TokenKind::RParen)?;
    Ok(Expr::Call { name, arguments })
}

/// Parses `( expression )`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::LParen, "'('")?;
    let inner = parse_expression(tokens)?;
    expect(tokens, TokenKind::RParen, "')'")?;
    Ok(inner)
}

/// Maps a token to the binary operator it spells, if any.
#[must_use]
pub const fn binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    let op = match kind {
        TokenKind::Plus => BinaryOperator::Plus,
        TokenKind::Minus => BinaryOperator::Minus,
        TokenKind::Star => BinaryOperator::Times,
        TokenKind::Slash => BinaryOperator::Div,
        TokenKind::Greater => BinaryOperator::Gt,
        TokenKind::GreaterEqual => BinaryOperator::GtEq,
        TokenKind::Less => BinaryOperator::Lt,
        TokenKind::LessEqual => BinaryOperator::LtEq,
        TokenKind::EqualEqual => BinaryOperator::Eq,
        TokenKind::BangEqual => BinaryOperator::NotEq,
        TokenKind::AndAnd => BinaryOperator::And,
        TokenKind::PipePipe => BinaryOperator::Or,
        _ => return None,
    };
    Some(op)
}

const fn prefix_operator(kind: TokenKind) -> Option<UnaryOperator> {
    match kind {
        TokenKind::Increment => Some(UnaryOperator::PreIncrement),
        TokenKind::Decrement => Some(UnaryOperator::PreDecrement),
        _ => None,
    }
}

const fn postfix_operator(kind: TokenKind) -> Option<UnaryOperator> {
    match kind {
        TokenKind::Increment => Some(UnaryOperator::PostIncrement),
        TokenKind::Decrement => Some(UnaryOperator::PostDecrement),
        _ => None,
    }
}

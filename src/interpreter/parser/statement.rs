use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_block,
            core::ParseResult,
            expression::parse_expression,
            utils::{expect, parse_identifier, parse_type, peek_kind, unexpected_next},
        },
    },
};

/// Parses a single statement.
///
/// The rule is picked from the kinds of the next three tokens, in this order:
///
/// | lookahead      | statement                 |
/// |----------------|---------------------------|
/// | `return`       | `return <expr>;`          |
/// | `if`           | `if (<expr>) {..} else {..}` |
/// | `while`        | `while (<expr>) {..}`     |
/// | type           | `<type> <id> = <expr>;` or `<type> <id>;` |
/// | identifier `=` | `<id> = <expr>;`          |
/// | anything else  | `<expr>;`                 |
///
/// A leading keyword or type commits to its rule; there is no backtracking.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let lookahead = (peek_kind(tokens, 0), peek_kind(tokens, 1), peek_kind(tokens, 2));

    let statement = match lookahead {
        (TokenKind::Return, ..) => {
            tokens.next();
            let value = parse_expression(tokens)?;
            Statement::Return(value)
        },
        (TokenKind::If, ..) => return parse_if_else(tokens),
        (TokenKind::While, ..) => return parse_while(tokens),
        (first, TokenKind::Identifier, TokenKind::Assign) if first.is_type() => {
            let ty = parse_type(tokens)?;
            let name = parse_identifier(tokens)?;
            tokens.next();
            let value = parse_expression(tokens)?;
            Statement::Init { ty, name, value }
        },
        (first, TokenKind::Identifier, TokenKind::Semicolon) if first.is_type() => {
            let ty = parse_type(tokens)?;
            let name = parse_identifier(tokens)?;
            Statement::Declaration { ty, name }
        },
        (first, ..) if first.is_type() => {
            parse_type(tokens)?;
            parse_identifier(tokens)?;
            return Err(unexpected_next(tokens, "'=' or ';'"));
        },
        (TokenKind::Identifier, TokenKind::Assign, _) => {
            let name = parse_identifier(tokens)?;
            tokens.next();
            let value = parse_expression(tokens)?;
            Statement::Assignment { name, value }
        },
        _ => Statement::Expression(parse_expression(tokens)?),
    };

    expect(tokens, TokenKind::Semicolon, "';'")?;
    Ok(statement)
}

/// Parses `if (<condition>) { ... }` with an optional `else { ... }`.
///
/// A missing `else` yields an empty else branch.
fn parse_if_else<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::If, "'if'")?;
    let condition = parse_condition(tokens)?;
    let then_branch = parse_block(tokens)?;

    let else_branch = if peek_kind(tokens, 0) == TokenKind::Else {
        tokens.next();
        parse_block(tokens)?
    } else {
        Vec::new()
    };

    Ok(Statement::IfElse { condition,
                           then_branch,
                           else_branch })
}

/// Parses `while (<condition>) { ... }`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::While, "'while'")?;
    let condition = parse_condition(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Statement::While { condition, body })
}

/// Parses a parenthesized condition.
fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::LParen, "'('")?;
    let condition = parse_expression(tokens)?;
    expect(tokens, TokenKind::RParen, "')'")?;
    Ok(condition)
}

use std::iter::Peekable;

use crate::{
    ast::{FunctionDef, Param},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_block,
            core::ParseResult,
            utils::{expect, parse_comma_separated, parse_identifier, parse_type},
        },
    },
};

/// Parses a function definition of the form
/// `<type> <name>(<type> <param>, ...) { <statements> }`.
///
/// The caller has already seen a type keyword at the cursor, so any mismatch
/// from here on is an error rather than a signal to try something else.
///
/// # Errors
/// Returns a `ParseError` if the name, parentheses, parameters or body are
/// malformed.
pub fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<FunctionDef>
    where I: Iterator<Item = &'a Token> + Clone
{
    let return_type = parse_type(tokens)?;
    let name = parse_identifier(tokens)?;

    expect(tokens, TokenKind::LParen, "'('")?;
    let params = parse_comma_separated(tokens, parse_param, TokenKind::RParen)?;
    let body = parse_block(tokens)?;

    Ok(FunctionDef { return_type,
                     name,
                     params,
                     body })
}

/// Parses a single `<type> <name>` parameter.
fn parse_param<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Param>
    where I: Iterator<Item = &'a Token> + Clone
{
    let ty = parse_type(tokens)?;
    let name = parse_identifier(tokens)?;
    Ok(Param { ty, name })
}

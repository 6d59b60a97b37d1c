use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, peek_kind},
        },
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until a
/// closing `}` token is consumed; reaching the end marker first is an error.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Returns
/// The statements in source order.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::LBrace, "'{'")?;

    let mut statements = Vec::new();
    loop {
        match peek_kind(tokens, 0) {
            TokenKind::RBrace => {
                tokens.next();
                break;
            },
            TokenKind::End => {
                expect(tokens, TokenKind::RBrace, "'}'")?;
            },
            _ => statements.push(parse_statement(tokens)?),
        }
    }

    Ok(statements)
}

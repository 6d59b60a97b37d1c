use std::iter::Peekable;

use crate::{
    ast::Type,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Looks `n` tokens past the cursor without consuming anything.
///
/// Running past the end marker reports [`TokenKind::End`] again, so lookahead
/// is always defined.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &Peekable<I>, n: usize) -> TokenKind
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.clone().nth(n).map_or(TokenKind::End, |t| t.kind)
}

/// Consumes the next token if it has the given kind.
///
/// # Errors
/// Returns `UnexpectedToken` carrying `expected`, the lexeme found and its
/// offset, without consuming the offending token.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                     kind: TokenKind,
                                                     expected: &str)
                                                     -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek().copied() {
        Some(tok) if tok.is(kind) => {
            tokens.next();
            Ok(tok)
        },
        Some(tok) => Err(unexpected(tok, expected)),
        None => Err(ParseError::UnexpectedEndOfInput { expected: expected.to_string() }),
    }
}

/// Builds an `UnexpectedToken` error for `tok`.
pub(in crate::interpreter::parser) fn unexpected(tok: &Token, expected: &str) -> ParseError {
    ParseError::UnexpectedToken { expected: expected.to_string(),
                                  found:    tok.lexeme.clone(),
                                  offset:   tok.offset, }
}

/// Builds the error for whatever token sits at the cursor.
pub(in crate::interpreter::parser) fn unexpected_next<'a, I>(tokens: &mut Peekable<I>,
                                                             expected: &str)
                                                             -> ParseError
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek().copied() {
        Some(tok) => unexpected(tok, expected),
        None => ParseError::UnexpectedEndOfInput { expected: expected.to_string() },
    }
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::Identifier, "identifier").map(|tok| tok.lexeme.clone())
}

/// Parses one of the five type keywords.
///
/// # Errors
/// Returns a `ParseError` if the next token is not a type keyword.
pub(in crate::interpreter::parser) fn parse_type<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<Type>
    where I: Iterator<Item = &'a Token> + Clone
{
    let ty = match peek_kind(tokens, 0) {
        TokenKind::TypeInt => Type::Int,
        TokenKind::TypeBool => Type::Bool,
        TokenKind::TypeFloat => Type::Float,
        TokenKind::TypeString => Type::String,
        TokenKind::TypeVoid => Type::Void,
        _ => return Err(unexpected_next(tokens, "type")),
    };
    tokens.next();
    Ok(ty)
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by parameter lists and call arguments. It
/// repeatedly calls `parse_item` to parse one element, expecting either a
/// comma to continue the list or the closing token to end it. An immediately
/// encountered closing token produces an empty list. The closing token is
/// consumed.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or if something other than
/// a comma or the closing token follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: TokenKind)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();
    if peek_kind(tokens, 0) == closing {
        tokens.next();
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek().copied() {
            Some(tok) if tok.is(TokenKind::Comma) => {
                tokens.next();
            },
            Some(tok) if tok.is(closing) => {
                tokens.next();
                break;
            },
            Some(tok) => return Err(unexpected(tok, &format!("',' or {closing}"))),
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected: closing.to_string() });
            },
        }
    }
    Ok(items)
}

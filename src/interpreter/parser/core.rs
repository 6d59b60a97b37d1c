use std::iter::Peekable;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            definition::parse_function_definition,
            utils::{expect, peek_kind},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program from a token slice produced by
/// [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// Definitions are parsed for as long as the next token is a type keyword.
/// Whatever follows the last definition must be the end marker; anything else
/// is reported as an unexpected token.
///
/// Grammar: `program := definition*`
///
/// # Example
/// ```
/// use minic::interpreter::{lexer::tokenize, parser::core::parse_tokens};
///
/// let tokens = tokenize("int main() { return 1; } void noop() { }");
/// let program = parse_tokens(&tokens).unwrap();
///
/// assert_eq!(program.definitions.len(), 2);
/// assert_eq!(program.definitions[1].name, "noop");
/// ```
pub fn parse_tokens(tokens: &[Token]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    parse_program(&mut iter)
}

/// Parses definitions until no leading type keyword remains, then requires
/// the end marker.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut definitions = Vec::new();

    while peek_kind(tokens, 0).is_type() {
        let def = parse_function_definition(tokens)?;
        tracing::debug!(name = %def.name, params = def.params.len(), "parsed definition");
        definitions.push(def);
    }

    expect(tokens, TokenKind::End, "type keyword or end of input")?;

    Ok(Program { definitions })
}

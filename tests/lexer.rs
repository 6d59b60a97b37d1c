use minic::{
    interpreter::lexer::{Token, TokenKind, escape_string, unescape_string},
    tokenize,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|t| t.kind).collect()
}

#[test]
fn keywords_win_over_identifiers() {
    assert_eq!(kinds("int integer if iff while whilst true truest"),
               vec![TokenKind::TypeInt,
                    TokenKind::Identifier,
                    TokenKind::If,
                    TokenKind::Identifier,
                    TokenKind::While,
                    TokenKind::Identifier,
                    TokenKind::True,
                    TokenKind::Identifier,
                    TokenKind::End]);
}

#[test]
fn literals() {
    assert_eq!(kinds(r#"42 3.14 .5 2e10 1.5E-3 "hi \"there\"" 'c'"#),
               vec![TokenKind::Int,
                    TokenKind::Float,
                    TokenKind::Float,
                    TokenKind::Float,
                    TokenKind::Float,
                    TokenKind::Str,
                    TokenKind::Char,
                    TokenKind::End]);
}

#[test]
fn longest_operator_wins() {
    assert_eq!(kinds("++ + -- - == = != >= > <= < && ||"),
               vec![TokenKind::Increment,
                    TokenKind::Plus,
                    TokenKind::Decrement,
                    TokenKind::Minus,
                    TokenKind::EqualEqual,
                    TokenKind::Assign,
                    TokenKind::BangEqual,
                    TokenKind::GreaterEqual,
                    TokenKind::Greater,
                    TokenKind::LessEqual,
                    TokenKind::Less,
                    TokenKind::AndAnd,
                    TokenKind::PipePipe,
                    TokenKind::End]);
    assert_eq!(kinds("x--"), vec![TokenKind::Identifier, TokenKind::Decrement, TokenKind::End]);
}

#[test]
fn comments_and_whitespace_are_dropped() {
    let tokens = tokenize("x // line comment\n/* block\ncomment */ y");

    assert_eq!(tokens,
               vec![Token { kind:   TokenKind::Identifier,
                            lexeme: "x".to_string(),
                            offset: 0, },
                    Token { kind:   TokenKind::Identifier,
                            lexeme: "y".to_string(),
                            offset: 38, },
                    Token { kind:   TokenKind::End,
                            lexeme: String::new(),
                            offset: 39, }]);
}

#[test]
fn unknown_characters_do_not_stop_lexing() {
    let tokens = tokenize("a @ b");

    assert_eq!(tokens[1].kind, TokenKind::Unknown);
    assert_eq!(tokens[1].lexeme, "@");
    assert_eq!(tokens[1].offset, 2);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
}

#[test]
fn unterminated_string_is_a_lone_quote() {
    let token = |kind, lexeme: &str, offset| Token { kind,
                                                     lexeme: lexeme.to_string(),
                                                     offset };

    assert_eq!(tokenize("x = \"abc; y"),
               vec![token(TokenKind::Identifier, "x", 0),
                    token(TokenKind::Assign, "=", 2),
                    token(TokenKind::Unknown, "\"", 4),
                    token(TokenKind::Identifier, "abc", 5),
                    token(TokenKind::Semicolon, ";", 8),
                    token(TokenKind::Identifier, "y", 10),
                    token(TokenKind::End, "", 11)]);
}

#[test]
fn unknown_characters_keep_their_width() {
    let tokens = tokenize("a é b");

    assert_eq!(tokens[1].lexeme, "é");
    assert_eq!(tokens[1].offset, 2);
    assert_eq!(tokens[2].lexeme, "b");
    assert_eq!(tokens[2].offset, 5);
}

#[test]
fn empty_source_is_just_the_end_marker() {
    assert_eq!(tokenize(""),
               vec![Token { kind:   TokenKind::End,
                            lexeme: String::new(),
                            offset: 0, }]);
}

#[test]
fn escapes() {
    assert_eq!(unescape_string(r#""a\"b\\c\nd\te""#), "a\"b\\c\nd\te");
    assert_eq!(unescape_string(r#""\q""#), "q");
    assert_eq!(escape_string("say \"hi\"\n"), r#""say \"hi\"\n""#);
}

const VOCABULARY: &[&str] = &["int", "float", "bool", "string", "void", "return", "if", "else",
                              "while", "true", "false", "x", "counter", "_tmp", "0", "42",
                              "3.5", ".25", "\"text\"", "\"esc\\\"aped\"", "(", ")", "{", "}",
                              ";", ",", "=", "++", "--", "+", "-", "*", "/", "==", "!=", ">=",
                              ">", "<=", "<", "&&", "||"];

proptest! {
    #[test]
    fn lexemes_reconstruct_the_source(words in prop::collection::vec(prop::sample::select(VOCABULARY), 0..24)) {
        let source = words.join(" ");
        let tokens = tokenize(&source);

        prop_assert_eq!(tokens.len(), words.len() + 1);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::End));
        prop_assert!(tokens.windows(2).all(|pair| pair[0].offset < pair[1].offset || pair[1].is(TokenKind::End)));

        for (token, word) in tokens.iter().zip(&words) {
            prop_assert_eq!(&token.lexeme, word);
            prop_assert_eq!(&source[token.offset..token.offset + token.lexeme.len()], *word);
            prop_assert!(token.kind != TokenKind::Unknown);
        }

        let rebuilt = tokens.iter()
                            .filter(|t| !t.is(TokenKind::End))
                            .map(|t| t.lexeme.as_str())
                            .collect::<Vec<_>>()
                            .join(" ");
        prop_assert_eq!(rebuilt, source);
    }
}

use std::fmt;

use logos::Logos;

/// The kind of a lexical token.
///
/// Keywords and type names are exact-lexeme tokens, so they win over the
/// identifier pattern whenever both match the same slice, while a longer
/// identifier such as `integer` still lexes as an identifier.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// Floating point literals such as `3.14`, `.5`, `2.0` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+")]
    Float,
    /// Integer literals such as `42`.
    #[regex(r"[0-9]+")]
    Int,
    /// String literals, quotes included. Supports `\"`, `\\`, `\n`, `\t`,
    /// `\r` and `\0` escapes.
    #[regex(r#""([^"\\\n]|\\.)*""#, allow_greedy = true)]
    Str,
    /// Character literals such as `'a'`. The grammar has no use for them yet.
    #[regex(r"'([^'\\\n]|\\.)'")]
    Char,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `return`
    #[token("return")]
    Return,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `int`
    #[token("int")]
    TypeInt,
    /// `bool`
    #[token("bool")]
    TypeBool,
    /// `float`
    #[token("float")]
    TypeFloat,
    /// `string`
    #[token("string")]
    TypeString,
    /// `void`
    #[token("void")]
    TypeVoid,
    /// Variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `/* Multi line comments. */`
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", logos::skip, allow_greedy = true)]
    MultiLineComment,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Assign,
    /// `++`
    #[token("++")]
    Increment,
    /// `--`
    #[token("--")]
    Decrement,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    PipePipe,
    /// Spaces, tabs, newlines and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Whitespace,
    /// Anything the lexer does not recognize. Rejecting it is the parser's job.
    Unknown,
    /// End-of-input sentinel, always the last token.
    End,
}

impl TokenKind {
    /// Returns `true` for the five type keywords.
    #[must_use]
    pub const fn is_type(self) -> bool {
        matches!(self,
                 Self::TypeInt | Self::TypeBool | Self::TypeFloat | Self::TypeString | Self::TypeVoid)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Float => "float literal",
            Self::Int => "integer literal",
            Self::Str => "string literal",
            Self::Char => "char literal",
            Self::True => "'true'",
            Self::False => "'false'",
            Self::Return => "'return'",
            Self::If => "'if'",
            Self::Else => "'else'",
            Self::While => "'while'",
            Self::TypeInt => "'int'",
            Self::TypeBool => "'bool'",
            Self::TypeFloat => "'float'",
            Self::TypeString => "'string'",
            Self::TypeVoid => "'void'",
            Self::Identifier => "identifier",
            Self::Comment | Self::MultiLineComment => "comment",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Semicolon => "';'",
            Self::Comma => "','",
            Self::Assign => "'='",
            Self::Increment => "'++'",
            Self::Decrement => "'--'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::EqualEqual => "'=='",
            Self::BangEqual => "'!='",
            Self::GreaterEqual => "'>='",
            Self::Greater => "'>'",
            Self::LessEqual => "'<='",
            Self::Less => "'<'",
            Self::AndAnd => "'&&'",
            Self::PipePipe => "'||'",
            Self::Whitespace => "whitespace",
            Self::Unknown => "unknown character",
            Self::End => "end of input",
        };
        write!(f, "{text}")
    }
}

/// A classified, positioned lexical unit.
///
/// `lexeme` is the exact source slice (string literals keep their quotes) and
/// `offset` is the byte offset of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The raw source text of the token.
    pub lexeme: String,
    /// Zero-based byte offset into the source.
    pub offset: usize,
}

impl Token {
    /// Tests the token's kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?} {} at position {})", self.kind, self.lexeme, self.offset)
    }
}

/// Splits `source` into tokens.
///
/// Lexing never fails: unrecognized input comes back as
/// [`TokenKind::Unknown`] tokens. Whitespace and comments are dropped. The
/// returned sequence always ends with a [`TokenKind::End`] token positioned at
/// `source.len()`.
///
/// # Example
/// ```
/// use minic::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("int x = 42;");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::TypeInt,
///             TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::Int,
///             TokenKind::Semicolon,
///             TokenKind::End]);
/// assert_eq!(tokens[3].offset, 8);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut base = 0;
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let offset = base + lexer.span().start;
        if let Ok(kind) = result {
            tokens.push(Token { kind,
                                lexeme: lexer.slice().to_string(),
                                offset });
            continue;
        }

        // A failed match may cover far more than the bad character (an
        // unterminated string runs to the end of input). Report one character
        // and resume lexing right after it.
        let unknown = source[offset..].chars().next().map_or(1, char::len_utf8);
        tokens.push(Token { kind: TokenKind::Unknown,
                            lexeme: source[offset..offset + unknown].to_string(),
                            offset });
        base = offset + unknown;
        lexer = TokenKind::lexer(&source[base..]);
    }

    tokens.push(Token { kind:   TokenKind::End,
                        lexeme: String::new(),
                        offset: source.len(), });

    tracing::trace!(count = tokens.len(), "lexed source");
    tokens
}

/// Resolves the escapes of a string literal lexeme and strips its quotes.
///
/// Unknown escapes keep the escaped character, so `"\q"` becomes `q`.
#[must_use]
pub fn unescape_string(lexeme: &str) -> String {
    let inner = lexeme.strip_prefix('"')
                      .and_then(|s| s.strip_suffix('"'))
                      .unwrap_or(lexeme);
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}

/// Turns a string value back into a quoted literal that [`tokenize`] accepts.
#[must_use]
pub fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

//! Token kinds and the token representation produced by [`crate::lexer`].

use std::fmt;

use strum::{Display, EnumString};

/// Every lexical category the lexer can produce, plus `Eof`.
///
/// Keywords and built-ins each get their own variant (rather than being folded into a
/// generic `Identifier` with a string payload) so the parser can match on `TokenKind`
/// directly, the same way the reference tokenizer hands back a fixed closed alphabet.
#[derive(Debug, Display, EnumString, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Int,
    Float,
    String,
    Bool,
    Null,
    Identifier,

    Plus,
    Minus,
    Mul,
    Exp,
    Div,
    FDiv,
    Mod,
    Average,

    Incr,
    Decr,

    Eq,
    Neq,
    Approx,
    Lt,
    Gt,
    Lte,
    Gte,

    And,
    Or,
    Not,

    LParen,
    RParen,
    LBrace,
    RBrace,
    LSquare,
    RSquare,
    Comma,

    Eof,

    Import,
    From,

    Var,
    Const,
    Assign,
    Over,

    If,
    Elif,
    Else,

    While,
    For,
    As,
    Do,

    Func,

    Exec,
    Return,
    Input,
    Len,
    Type,
    StrCon,
    IntCon,
    FloatCon,
    BoolCon,
    Abs,
    Pow,
}

/// The decoded payload carried by a token, when it carries one.
///
/// Number and string literals are decoded at lex time, so the lexeme already holds the
/// value the evaluator will use rather than a raw source slice.
#[derive(Debug, Clone, PartialEq)]
pub enum Lexeme {
    Int(i64),
    Float(f64),
    Str(String),
    /// Spelling of an identifier, keyword, or built-in name.
    Name(String),
    None,
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "{v}"),
            Self::Name(v) => write!(f, "{v}"),
            Self::None => write!(f, ""),
        }
    }
}

/// A single lexed token: a kind plus its decoded lexeme, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Lexeme,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: Lexeme) -> Self {
        Self { kind, lexeme }
    }

    #[must_use]
    pub fn bare(kind: TokenKind) -> Self {
        Self { kind, lexeme: Lexeme::None }
    }

    /// The `bool` payload for a `Bool` token (`"true"`/`"false"` spelling).
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match &self.lexeme {
            Lexeme::Name(name) => match name.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// The identifier spelling, for tokens that carry one (identifiers, keywords,
    /// built-ins).
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match &self.lexeme {
            Lexeme::Name(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lexeme {
            Lexeme::None => write!(f, "{}", self.kind),
            lexeme => write!(f, "{}: {lexeme}", self.kind),
        }
    }
}

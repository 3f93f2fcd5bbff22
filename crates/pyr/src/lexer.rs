//! Character stream → token stream (`SPEC_FULL.md` §4.1).
//!
//! A pure function over the input text: [`Lexer::tokenize`] consumes `self` and returns
//! the full token list or the first `SyntaxError` encountered. Faithful to the quirks of
//! `examples/original_source/lexer.py` — see `SPEC_FULL.md` §9.

use crate::{
    error::ScriptError,
    token::{Lexeme, Token, TokenKind},
};

fn keyword_kind(word: &str) -> Option<TokenKind> {
    use TokenKind::{As, Const, Do, Elif, Else, For, Func, If, Import, Over, Var, While};
    Some(match word {
        "var" => Var,
        "con" => Const,
        "over" => Over,
        "true" | "false" => TokenKind::Bool,
        "null" => TokenKind::Null,
        "if" => If,
        "elif" => Elif,
        "else" => Else,
        "while" => While,
        "for" => For,
        "as" => As,
        "do" => Do,
        "func" => Func,
        "import" => Import,
        "from" => TokenKind::From,
        _ => return None,
    })
}

fn builtin_kind(word: &str) -> Option<TokenKind> {
    use TokenKind::{Abs, BoolCon, Exec, FloatCon, Input, IntCon, Len, Pow, Return, StrCon, Type};
    Some(match word {
        "exec" => Exec,
        "return" => Return,
        "input" => Input,
        "len" => Len,
        "type" => Type,
        "str" => StrCon,
        "int" => IntCon,
        "flt" => FloatCon,
        "bool" => BoolCon,
        "abs" => Abs,
        "pow" => Pow,
        _ => return None,
    })
}

/// Converts program text into a token stream terminated by `Eof`.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), pos: 0 }
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Lexes the whole input, returning the token stream or the first `SyntaxError`.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ScriptError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.current() {
            match ch {
                ' ' | '\t' | '\n' | '\r' => self.advance(),

                '#' => {
                    while let Some(c) = self.current() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }

                '/' if self.peek() == Some('#') => {
                    self.advance();
                    self.advance();
                    // Unterminated block comments consume to EOF silently (SPEC_FULL §9 (b)).
                    while let Some(c) = self.current() {
                        if c == '#' && self.peek() == Some('/') {
                            self.advance();
                            self.advance();
                            break;
                        }
                        self.advance();
                    }
                }

                c if c.is_ascii_digit() => tokens.push(self.read_number()),
                c if c.is_ascii_alphabetic() => tokens.push(self.read_identifier()),
                '"' | '\'' => tokens.push(self.read_string()?),

                '=' => {
                    self.advance();
                    if self.current() == Some('=') {
                        self.advance();
                        tokens.push(Token::bare(TokenKind::Eq));
                    } else {
                        tokens.push(Token::bare(TokenKind::Assign));
                    }
                }
                '!' => {
                    self.advance();
                    if self.current() == Some('=') {
                        self.advance();
                        tokens.push(Token::bare(TokenKind::Neq));
                    }
                    // Bare `!` emits no token (SPEC_FULL §9 (c)): the reference's `T_NOT`
                    // arm is unreachable dead code, preserved here verbatim.
                }
                '<' => {
                    self.advance();
                    if self.current() == Some('=') {
                        self.advance();
                        tokens.push(Token::bare(TokenKind::Lte));
                    } else {
                        tokens.push(Token::bare(TokenKind::Lt));
                    }
                }
                '>' => {
                    self.advance();
                    if self.current() == Some('=') {
                        self.advance();
                        tokens.push(Token::bare(TokenKind::Gte));
                    } else {
                        tokens.push(Token::bare(TokenKind::Gt));
                    }
                }
                '~' => {
                    self.advance();
                    if self.current() == Some('=') {
                        self.advance();
                        tokens.push(Token::bare(TokenKind::Approx));
                    } else {
                        tokens.push(Token::bare(TokenKind::Average));
                    }
                }

                '&' => {
                    tokens.push(Token::bare(TokenKind::And));
                    self.advance();
                }
                '|' => {
                    tokens.push(Token::bare(TokenKind::Or));
                    self.advance();
                }

                '+' => {
                    self.advance();
                    if self.current() == Some('+') {
                        self.advance();
                        tokens.push(Token::bare(TokenKind::Incr));
                    } else {
                        tokens.push(Token::bare(TokenKind::Plus));
                    }
                }
                '-' => {
                    self.advance();
                    if self.current() == Some('-') {
                        self.advance();
                        tokens.push(Token::bare(TokenKind::Decr));
                    } else {
                        tokens.push(Token::bare(TokenKind::Minus));
                    }
                }
                '*' => {
                    tokens.push(Token::bare(TokenKind::Mul));
                    self.advance();
                }
                '^' => {
                    tokens.push(Token::bare(TokenKind::Exp));
                    self.advance();
                }
                '/' => {
                    self.advance();
                    if self.current() == Some('/') {
                        self.advance();
                        tokens.push(Token::bare(TokenKind::FDiv));
                    } else {
                        tokens.push(Token::bare(TokenKind::Div));
                    }
                }
                '%' => {
                    tokens.push(Token::bare(TokenKind::Mod));
                    self.advance();
                }

                '(' => {
                    tokens.push(Token::bare(TokenKind::LParen));
                    self.advance();
                }
                ')' => {
                    tokens.push(Token::bare(TokenKind::RParen));
                    self.advance();
                }
                '{' => {
                    tokens.push(Token::bare(TokenKind::LBrace));
                    self.advance();
                }
                '}' => {
                    tokens.push(Token::bare(TokenKind::RBrace));
                    self.advance();
                }
                '[' => {
                    tokens.push(Token::bare(TokenKind::LSquare));
                    self.advance();
                }
                ']' => {
                    tokens.push(Token::bare(TokenKind::RSquare));
                    self.advance();
                }
                ',' => {
                    tokens.push(Token::bare(TokenKind::Comma));
                    self.advance();
                }

                other => {
                    return Err(ScriptError::syntax(format!("Illegal character '{other}'")));
                }
            }
        }

        tokens.push(Token::bare(TokenKind::Eof));
        Ok(tokens)
    }

    fn read_number(&mut self) -> Token {
        let mut text = String::new();
        let mut seen_dot = false;

        while let Some(c) = self.current() {
            if c.is_ascii_digit() {
                text.push(c);
                self.advance();
            } else if c == '.' {
                if seen_dot {
                    break;
                }
                seen_dot = true;
                text.push(c);
                self.advance();
            } else {
                break;
            }
        }

        if seen_dot {
            let value: f64 = text.parse().unwrap_or(0.0);
            Token::new(TokenKind::Float, Lexeme::Float(value))
        } else {
            let value: i64 = text.parse().unwrap_or(0);
            Token::new(TokenKind::Int, Lexeme::Int(value))
        }
    }

    fn read_identifier(&mut self) -> Token {
        let mut text = String::new();

        while let Some(c) = self.current() {
            if c.is_ascii_alphanumeric() || c == '_' {
                text.push(c);
                self.advance();
            } else {
                break;
            }
        }

        if let Some(kind) = keyword_kind(&text) {
            return Token::new(kind, Lexeme::Name(text));
        }
        if let Some(kind) = builtin_kind(&text) {
            return Token::new(kind, Lexeme::Name(text));
        }
        Token::new(TokenKind::Identifier, Lexeme::Name(text))
    }

    fn read_string(&mut self) -> Result<Token, ScriptError> {
        // Either quote character closes either kind of opening quote — a quirk
        // inherited from the reference lexer (SPEC_FULL §9 (a)).
        self.advance();
        let mut text = String::new();

        loop {
            match self.current() {
                None => return Err(ScriptError::syntax("Unterminated string")),
                Some('"' | '\'') => {
                    self.advance();
                    break;
                }
                Some(c) => {
                    text.push(c);
                    self.advance();
                }
            }
        }

        Ok(Token::new(TokenKind::String, Lexeme::Str(text)))
    }
}

//! Token types for the Cell lexer.

use super::Span;
use std::fmt;

/// A token with its text and its span in the source.
///
/// `text` is empty for punctuation, the raw digits for numbers, the name
/// for symbols, the operator character for operations, and the contents
/// (without quotes) for strings.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Punctuation token, which carries no text.
    #[inline]
    pub fn punct(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            text: String::new(),
            span,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.span)
    }
}

/// Token kinds for Cell.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `=`
    Equals,
    Symbol,
    Number,
    String,
    /// One of `+ - * /`.
    Operation,
}

impl TokenKind {
    /// Punctuation kind for a character, if it is one of `(){},;:=`.
    pub fn punctuation(c: char) -> Option<TokenKind> {
        Some(match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            '=' => TokenKind::Equals,
            _ => return None,
        })
    }

    /// Name used in listings and messages: the character itself for
    /// punctuation, a word for everything else.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Equals => "=",
            TokenKind::Symbol => "symbol",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Operation => "operation",
        }
    }

    pub const fn is_punctuation(self) -> bool {
        !matches!(
            self,
            TokenKind::Symbol | TokenKind::Number | TokenKind::String | TokenKind::Operation
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Token scanner.
//!
//! Characters are classified in a fixed order, first match wins:
//!
//! 1. punctuation `(){},;:=`
//! 2. symbol start `[A-Za-z_]`, continued by `[A-Za-z0-9_]`
//! 3. number `[0-9.]`, continued greedily (not validated)
//! 4. quote `'` or `"`, up to the matching quote; no escapes
//! 5. operation `+-*/`
//! 6. space or newline, skipped
//! 7. tab, an error
//! 8. anything else, an error

use crate::lex_error::{LexError, LexErrorKind};
use crate::stream::CharStream;
use cell_ir::{Span, Token, TokenKind};
use tracing::trace;

/// Lazy token sequence over a character source.
///
/// Yields `Err` at most once; after an error (or the end of the input) the
/// sequence is finished.
pub struct Lexer<S: Iterator<Item = char>> {
    chars: CharStream<S>,
    finished: bool,
}

impl<S: Iterator<Item = char>> Lexer<S> {
    pub fn new(source: S) -> Self {
        Lexer {
            chars: CharStream::new(source),
            finished: false,
        }
    }

    fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        loop {
            let start = self.chars.offset();
            let c = self.chars.next()?;

            if let Some(kind) = TokenKind::punctuation(c) {
                return Some(Ok(Token::punct(kind, self.span_from(start))));
            }
            if is_symbol_start(c) {
                let text = self.scan_while(c, is_symbol_char);
                return Some(Ok(Token::new(TokenKind::Symbol, text, self.span_from(start))));
            }
            if is_number_char(c) {
                let text = self.scan_while(c, is_number_char);
                return Some(Ok(Token::new(TokenKind::Number, text, self.span_from(start))));
            }
            match c {
                '\'' | '"' => return Some(self.scan_string(c, start)),
                '+' | '-' | '*' | '/' => {
                    return Some(Ok(Token::new(
                        TokenKind::Operation,
                        c,
                        self.span_from(start),
                    )));
                }
                ' ' | '\n' | '\r' => {}
                '\t' => {
                    return Some(Err(LexError::new(
                        LexErrorKind::TabCharacter,
                        self.span_from(start),
                    )));
                }
                other => {
                    return Some(Err(LexError::new(
                        LexErrorKind::UnrecognisedCharacter(other),
                        self.span_from(start),
                    )));
                }
            }
        }
    }

    fn scan_while(&mut self, first: char, accept: fn(char) -> bool) -> String {
        let mut text = String::from(first);
        while let Some(c) = self.chars.peek() {
            if !accept(c) {
                break;
            }
            text.push(c);
            self.chars.next();
        }
        text
    }

    fn scan_string(&mut self, quote: char, start: u32) -> Result<Token, LexError> {
        let mut value = String::new();
        loop {
            match self.chars.next() {
                Some(c) if c == quote => {
                    return Ok(Token::new(TokenKind::String, value, self.span_from(start)));
                }
                Some(c) => value.push(c),
                None => {
                    return Err(LexError::new(
                        LexErrorKind::UnterminatedString,
                        self.span_from(start),
                    ));
                }
            }
        }
    }

    #[inline]
    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.chars.offset())
    }
}

impl<S: Iterator<Item = char>> Iterator for Lexer<S> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.next_token();
        match &item {
            Some(Ok(token)) => trace!(kind = %token.kind, text = %token.text, "token"),
            Some(Err(_)) | None => self.finished = true,
        }
        item
    }
}

impl<S: Iterator<Item = char>> std::iter::FusedIterator for Lexer<S> {}

#[inline]
fn is_symbol_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[inline]
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

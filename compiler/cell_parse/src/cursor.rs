//! Token cursor over a lazy token stream.

use crate::SyntaxError;
use cell_ir::{Span, Token, TokenKind};
use cell_lexer::LexError;

/// One-token look-ahead over the lexer's output.
///
/// Lexing errors surface from `advance`/`peek_kind` as
/// [`SyntaxError::Lexing`].
pub struct Cursor<I> {
    tokens: I,
    peeked: Option<Option<Token>>,
    /// End of the last consumed token, for end-of-input spans.
    last_end: u32,
}

impl<I: Iterator<Item = Result<Token, LexError>>> Cursor<I> {
    pub fn new(tokens: I) -> Self {
        Cursor {
            tokens,
            peeked: None,
            last_end: 0,
        }
    }

    /// Consume and return the next token, or `None` at end of input.
    pub fn advance(&mut self) -> Result<Option<Token>, SyntaxError> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.tokens.next().transpose()?,
        };
        if let Some(token) = &token {
            self.last_end = token.span.end;
        }
        Ok(token)
    }

    /// Kind of the next token without consuming it.
    pub fn peek_kind(&mut self) -> Result<Option<TokenKind>, SyntaxError> {
        if self.peeked.is_none() {
            self.peeked = Some(self.tokens.next().transpose()?);
        }
        Ok(self.peeked.as_ref().and_then(|t| t.as_ref().map(|t| t.kind)))
    }

    /// Consume the next token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> Result<bool, SyntaxError> {
        if self.peek_kind()? == Some(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Zero-width span just after the last consumed token.
    #[inline]
    pub fn end_span(&self) -> Span {
        Span::point(self.last_end)
    }
}

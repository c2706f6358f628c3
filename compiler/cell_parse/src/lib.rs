//! Streaming parser for Cell.
//!
//! [`Parser`] pulls tokens from any token iterator and yields one top-level
//! statement at a time. A statement is returned as soon as its `;` has been
//! read, before anything after it is lexed, which is what lets the REPL run
//! each line as it is typed.
//!
//! After the first error the parser yields nothing more.

mod context;
mod cursor;
mod error;
mod grammar;

use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind, SyntaxError};

use cell_ir::{Expr, StringInterner, Token};
use cell_lexer::{LexError, Lexer};
use context::Context;
use tracing::trace;

/// Parser state.
pub struct Parser<'a, I> {
    cursor: Cursor<I>,
    interner: &'a StringInterner,
    finished: bool,
}

impl<'a, I: Iterator<Item = Result<Token, LexError>>> Parser<'a, I> {
    /// Create a parser over a token stream, interning symbols into
    /// `interner`.
    pub fn new(tokens: I, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            interner,
            finished: false,
        }
    }

    fn next_statement(&mut self) -> Result<Option<Expr>, SyntaxError> {
        // Empty statements (a lone `;`) produce nothing; keep going.
        while self.cursor.peek_kind()?.is_some() {
            let mut ctx = Context::statement();
            if let Some(statement) = self.expression(&mut ctx, None)? {
                return Ok(Some(statement));
            }
        }
        Ok(None)
    }
}

impl<I: Iterator<Item = Result<Token, LexError>>> Iterator for Parser<'_, I> {
    type Item = Result<Expr, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_statement() {
            Ok(Some(statement)) => {
                trace!(kind = statement.kind_name(), "statement");
                Some(Ok(statement))
            }
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl<I: Iterator<Item = Result<Token, LexError>>> std::iter::FusedIterator for Parser<'_, I> {}

/// Lex and parse a whole string.
pub fn parse(source: &str, interner: &StringInterner) -> Result<Vec<Expr>, SyntaxError> {
    Parser::new(Lexer::new(source.chars()), interner).collect()
}

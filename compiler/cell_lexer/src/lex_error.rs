//! Lexer error types.

use cell_ir::Span;
use thiserror::Error;

/// A lexing error. Always fatal for the input being lexed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LexErrorKind {
    #[error("Tab characters are not allowed in Cell.")]
    TabCharacter,
    #[error("Unrecognised character - {0}")]
    UnrecognisedCharacter(char),
    /// The input ended inside a string literal.
    #[error("A string ran off the end of the program.")]
    UnterminatedString,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }
}

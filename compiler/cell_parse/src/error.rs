//! Parse error types.
//!
//! A [`ParseError`] is structural (the tokens cannot form a statement) or,
//! for [`ParseErrorKind::UnexpectedEof`], recoverable: the input stopped
//! mid-statement and more of it might complete the statement.

use cell_ir::{BinaryOp, Span, TokenKind};
use cell_lexer::LexError;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseErrorKind {
    /// Input ended while `expected` was still needed to close a statement,
    /// argument list or function.
    #[error("Hit end of file - expected '{expected}'.")]
    UnexpectedEof { expected: TokenKind },
    /// A literal or symbol directly after another expression, e.g. `100 101`.
    #[error("Unexpected {kind} token, '{text}'.")]
    UnexpectedValue { kind: TokenKind, text: String },
    /// Punctuation that cannot appear at this point.
    #[error("Unexpected '{found}' - expected '{expected}'.")]
    UnexpectedToken { found: TokenKind, expected: TokenKind },
    #[error("You can't assign to anything except a symbol.")]
    AssignToNonSymbol,
    #[error("':' must be followed by '(' in a function.")]
    ColonWithoutParams,
    /// `found` is a snapshot of the offending parameter.
    #[error("Only symbols are allowed in function parameter lists. I found: {found}.")]
    NonSymbolParameter { found: String },
    #[error("Operator '{op}' has nothing on its left.")]
    MissingLeftOperand { op: BinaryOp },
    #[error("Operator '{op}' has nothing on its right.")]
    MissingRightOperand { op: BinaryOp },
    #[error("Nothing is assigned to '{name}'.")]
    MissingAssignedValue { name: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    /// True if more input could turn this into a valid statement.
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind, ParseErrorKind::UnexpectedEof { .. })
    }
}

/// Any error raised while turning characters into statements.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lexing(#[from] LexError),
    #[error(transparent)]
    Parsing(#[from] ParseError),
}

impl SyntaxError {
    /// Lexing errors are never recoverable.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SyntaxError::Lexing(_) => false,
            SyntaxError::Parsing(err) => err.is_recoverable(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            SyntaxError::Lexing(err) => err.span,
            SyntaxError::Parsing(err) => err.span,
        }
    }
}

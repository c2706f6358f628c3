//! Terminator/separator contexts.
//!
//! The same punctuation closes different constructs depending on where the
//! parser is: `;` ends a top-level statement, `,` ends a call argument,
//! `)` ends the argument list and `}` ends a function body. Each nested
//! construct gets its own `Context` naming the token that ends the whole
//! construct and the token that ends one element of it.

use cell_ir::TokenKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Context {
    pub terminator: TokenKind,
    pub separator: TokenKind,
    /// Set once the terminator has been consumed.
    pub finished: bool,
}

impl Context {
    /// Top-level statements: `;` both separates and terminates.
    pub const fn statement() -> Self {
        Self::new(TokenKind::Semicolon, TokenKind::Semicolon)
    }

    /// Call arguments and parameter lists.
    pub const fn arguments() -> Self {
        Self::new(TokenKind::RParen, TokenKind::Comma)
    }

    /// Function bodies.
    pub const fn body() -> Self {
        Self::new(TokenKind::RBrace, TokenKind::Semicolon)
    }

    pub const fn new(terminator: TokenKind, separator: TokenKind) -> Self {
        Context {
            terminator,
            separator,
            finished: false,
        }
    }
}

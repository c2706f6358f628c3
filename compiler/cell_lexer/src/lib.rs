//! Lexer for the Cell language.
//!
//! Turns a stream of characters into a lazy stream of [`Token`]s. The input
//! can be any `Iterator<Item = char>`: a string's `chars()` for files, or a
//! [`ReaderSource`] for interactive input, where lines are read only when
//! the lexer reaches them.
//!
//! ```text
//! for token in Lexer::new("x = 3;".chars()) {
//!     let token = token?;
//!     println!("{} {:?}", token.kind, token.text);
//! }
//! ```

mod lex_error;
mod lexer;
mod source;
mod stream;

pub use cell_ir::{Token, TokenKind};
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::Lexer;
pub use source::{LineHook, ReaderSource};
pub use stream::CharStream;

/// Lex a whole string, stopping at the first error.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source.chars()).collect()
}

//! Cell Eval - interpreter for the Cell language.
//!
//! # Architecture
//!
//! - [`Environment`]: chain of write-once scopes, shared by closures
//! - [`Value`]: numbers, strings, none, closures and native functions
//! - [`Interpreter`]: evaluates statements against an environment
//! - [`EvalError`]: execution errors; [`Error`] joins them with lexing and
//!   parsing errors for callers that run the whole pipeline
//!
//! The interpreter has no built-in functions. Natives and the prelude are
//! registered into the top-level environment by the caller before any user
//! code runs.

mod environment;
pub mod errors;
mod interpreter;
mod print_handler;
mod value;

pub use environment::{Environment, LocalScope, Scope, ScopeError};
pub use errors::{native_error, Arity, EvalError, EvalResult};
pub use interpreter::Interpreter;
pub use print_handler::{buffer_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler};
pub use value::{FunctionValue, NativeFn, NativeFunction, Value};

use cell_ir::Span;
use cell_lexer::LexError;
use cell_parse::{ParseError, SyntaxError};
use thiserror::Error;

/// Any error from running source code: lexing, parsing or execution.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lexing(LexError),
    #[error(transparent)]
    Parsing(ParseError),
    #[error(transparent)]
    Execution(#[from] EvalError),
}

impl Error {
    /// True only for parse errors caused by input ending mid-statement.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::Parsing(err) => err.is_recoverable(),
            Error::Lexing(_) | Error::Execution(_) => false,
        }
    }

    /// Source location, for lexing and parsing errors.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Lexing(err) => Some(err.span),
            Error::Parsing(err) => Some(err.span),
            Error::Execution(_) => None,
        }
    }
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Self {
        match err {
            SyntaxError::Lexing(err) => Error::Lexing(err),
            SyntaxError::Parsing(err) => Error::Parsing(err),
        }
    }
}

#[cfg(test)]
mod tests;

//! Runtime errors.
//!
//! Errors carry structured fields (names, counts, value snapshots) and
//! are only turned into text by their `Display` impls. The constructor
//! functions below are the canonical way to build them.

use cell_ir::BinaryOp;
use std::fmt;
use thiserror::Error;

/// Result of evaluation.
pub type EvalResult = Result<crate::Value, EvalError>;

/// An execution error. Aborts the statement being evaluated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Unknown symbol '{name}'.")]
    UnknownSymbol { name: String },
    /// A name was bound twice in the same scope.
    #[error("Not allowed to re-assign symbol '{name}'.")]
    Redefinition { name: String },
    #[error("Only functions can be called, but I was asked to call {found}.")]
    NotCallable { found: String },
    /// `callee` is a snapshot of the called expression (or value, for
    /// calls made by native functions).
    #[error("{supplied} arguments passed to function {callee}, but it requires {required} arguments.")]
    ArityMismatch {
        callee: String,
        supplied: usize,
        required: Arity,
    },
    #[error("Both sides of '{op}' must be numbers, but the {side} side was {found}.")]
    OperandNotNumber {
        op: BinaryOp,
        side: Side,
        found: String,
    },
    /// Raised by a native function; the message names the function and the
    /// offending argument.
    #[error("{message}")]
    Native {
        function: &'static str,
        message: String,
    },
}

/// Which operand of a binary operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Left => "left",
            Side::Right => "right",
        })
    }
}

/// Number of arguments a callable accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    pub max: usize,
}

impl Arity {
    pub const fn exact(n: usize) -> Self {
        Arity { min: n, max: n }
    }

    pub const fn range(min: usize, max: usize) -> Self {
        Arity { min, max }
    }

    #[inline]
    pub const fn accepts(self, count: usize) -> bool {
        self.min <= count && count <= self.max
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{} to {}", self.min, self.max)
        }
    }
}

pub fn unknown_symbol(name: &str) -> EvalError {
    EvalError::UnknownSymbol {
        name: name.to_string(),
    }
}

pub fn redefinition(name: &str) -> EvalError {
    EvalError::Redefinition {
        name: name.to_string(),
    }
}

pub fn not_callable(found: String) -> EvalError {
    EvalError::NotCallable { found }
}

pub fn arity_mismatch(callee: String, supplied: usize, required: Arity) -> EvalError {
    EvalError::ArityMismatch {
        callee,
        supplied,
        required,
    }
}

pub fn operand_not_number(op: BinaryOp, side: Side, found: String) -> EvalError {
    EvalError::OperandNotNumber { op, side, found }
}

/// Error raised by the native function `function`.
pub fn native_error(function: &'static str, message: impl Into<String>) -> EvalError {
    EvalError::Native {
        function,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_display() {
        assert_eq!(Arity::exact(0).to_string(), "0");
        assert_eq!(Arity::range(2, 3).to_string(), "2 to 3");
        assert!(Arity::range(2, 3).accepts(3));
        assert!(!Arity::range(2, 3).accepts(1));
    }

    #[test]
    fn test_messages() {
        assert_eq!(unknown_symbol("y").to_string(), "Unknown symbol 'y'.");
        assert_eq!(
            redefinition("x").to_string(),
            "Not allowed to re-assign symbol 'x'."
        );
        assert_eq!(
            arity_mismatch("('function', [], [])".into(), 1, Arity::exact(0)).to_string(),
            "1 arguments passed to function ('function', [], []), but it requires 0 arguments."
        );
        assert_eq!(
            native_error("len", "len() can only be called for a string.").to_string(),
            "len() can only be called for a string."
        );
    }
}

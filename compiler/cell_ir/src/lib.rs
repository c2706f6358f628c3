//! Cell IR - shared data types for the Cell pipeline.
//!
//! This crate contains the types every stage agrees on:
//! - Spans for source locations
//! - Names for interned symbols
//! - Tokens produced by the lexer
//! - The AST produced by the parser and consumed by the evaluator
//! - A [`Folder`] for tree-to-tree transforms
//!
//! # Design Philosophy
//!
//! - **Intern symbols**: every symbol is a `Name(u32)`, compared in O(1)
//! - **Closed sum types**: each AST node is one `Expr` variant with its own
//!   payload, so the "assignment target is a symbol" and "parameters are
//!   symbols" rules hold by construction
//! - **Immutable trees**: transforms consume a tree and build a new one

pub mod ast;
pub mod folder;
mod interner;
mod name;
pub mod number;
mod snapshot;
mod span;
mod token;

pub use ast::{BinaryOp, Expr, FunctionDef};
pub use folder::{walk_expr, Folder};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use snapshot::snapshot;
pub use span::Span;
pub use token::{Token, TokenKind};

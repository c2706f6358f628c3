//! Tree-to-tree transforms.
//!
//! A [`Folder`] consumes an expression and returns a new one. The default
//! methods rebuild the node unchanged after folding its children; override
//! `fold_expr` to rewrite nodes and `fold_name` to rename symbols.
//!
//! # Example
//!
//! ```text
//! struct Upper<'a> { interner: &'a StringInterner }
//!
//! impl Folder for Upper<'_> {
//!     fn fold_name(&mut self, name: Name) -> Name {
//!         let text = self.interner.lookup(name).to_uppercase();
//!         self.interner.intern(&text)
//!     }
//! }
//! ```
//!
//! Every name position (symbol references, assignment targets and
//! parameters) goes through `fold_name`, so a renaming folder stays
//! consistent across a whole tree.

use crate::ast::{Expr, FunctionDef};
use crate::Name;
use cell_stack::ensure_sufficient_stack;
use std::mem;
use std::rc::Rc;

pub trait Folder {
    /// Fold an expression. The default folds children first (bottom-up).
    fn fold_expr(&mut self, expr: Expr) -> Expr {
        walk_expr(self, expr)
    }

    /// Fold a name in any position.
    fn fold_name(&mut self, name: Name) -> Name {
        name
    }
}

/// Rebuild `expr` with every child passed through the folder.
pub fn walk_expr<F: Folder + ?Sized>(folder: &mut F, mut expr: Expr) -> Expr {
    ensure_sufficient_stack(|| {
        match &mut expr {
            Expr::Number(_) | Expr::String(_) => {}
            Expr::Symbol(name) => *name = folder.fold_name(*name),
            Expr::Operation { lhs, rhs, .. } => {
                fold_child(folder, lhs);
                fold_child(folder, rhs);
            }
            Expr::Assignment { target, value } => {
                *target = folder.fold_name(*target);
                fold_child(folder, value);
            }
            Expr::Call { callee, args } => {
                fold_child(folder, callee);
                for arg in args {
                    fold_child(folder, arg);
                }
            }
            Expr::Function(def) => {
                let FunctionDef { params, body } = Rc::make_mut(def);
                for param in params {
                    *param = folder.fold_name(*param);
                }
                for statement in body {
                    fold_child(folder, statement);
                }
            }
        }
        expr
    })
}

fn fold_child<F: Folder + ?Sized>(folder: &mut F, slot: &mut Expr) {
    let child = mem::replace(slot, Expr::placeholder());
    *slot = folder.fold_expr(child);
}

//! AST node types.
//!
//! A Cell program is a sequence of top-level statements, each one [`Expr`].
//! Parents own their children outright; the only sharing is the
//! [`FunctionDef`] behind `Expr::Function`, which function values created
//! at runtime point at instead of copying the body.
//!
//! Trees can nest as deep as the input, so [`Expr`] tears itself down with
//! an explicit work list instead of the recursive drop glue.

mod operators;

pub use operators::BinaryOp;

use crate::Name;
use std::mem;
use std::rc::Rc;

/// An expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Number literal, kept as source text until evaluation.
    Number(String),
    /// String literal, already unquoted.
    String(String),
    Symbol(Name),
    Operation {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Assignment {
        target: Name,
        value: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Function(Rc<FunctionDef>),
}

/// Parameters and body of a function literal.
///
/// The value of a call is the value of the last body statement, or none
/// for an empty body.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FunctionDef {
    pub params: Vec<Name>,
    pub body: Vec<Expr>,
}

impl Expr {
    pub fn number(text: impl Into<String>) -> Self {
        Expr::Number(text.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::String(value.into())
    }

    pub fn operation(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Operation {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn assignment(target: Name, value: Expr) -> Self {
        Expr::Assignment {
            target,
            value: Box::new(value),
        }
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn function(params: Vec<Name>, body: Vec<Expr>) -> Self {
        Expr::Function(Rc::new(FunctionDef { params, body }))
    }

    /// Leaf left behind when a child is moved out of its parent.
    pub(crate) const fn placeholder() -> Self {
        Expr::Number(String::new())
    }

    const fn is_leaf(&self) -> bool {
        matches!(self, Expr::Number(_) | Expr::String(_) | Expr::Symbol(_))
    }

    /// Move every child that has children of its own onto `stack`.
    fn detach_children(&mut self, stack: &mut Vec<Expr>) {
        let mut detach = |child: &mut Expr| {
            if !child.is_leaf() {
                stack.push(mem::replace(child, Expr::placeholder()));
            }
        };
        match self {
            Expr::Number(_) | Expr::String(_) | Expr::Symbol(_) => {}
            Expr::Operation { lhs, rhs, .. } => {
                detach(&mut **lhs);
                detach(&mut **rhs);
            }
            Expr::Assignment { value, .. } => detach(&mut **value),
            Expr::Call { callee, args } => {
                detach(&mut **callee);
                args.iter_mut().for_each(detach);
            }
            // A shared body still has another owner.
            Expr::Function(def) => {
                if let Some(def) = Rc::get_mut(def) {
                    def.body.iter_mut().for_each(detach);
                }
            }
        }
    }

    /// Tag name of this node, as it appears in snapshots and tree views.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Expr::Number(_) => "number",
            Expr::String(_) => "string",
            Expr::Symbol(_) => "symbol",
            Expr::Operation { .. } => "operation",
            Expr::Assignment { .. } => "assignment",
            Expr::Call { .. } => "call",
            Expr::Function(_) => "function",
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        if self.is_leaf() {
            return;
        }
        let mut stack = Vec::new();
        self.detach_children(&mut stack);
        while let Some(mut expr) = stack.pop() {
            expr.detach_children(&mut stack);
        }
    }
}

#[cfg(test)]
mod tests;

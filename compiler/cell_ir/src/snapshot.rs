//! Tuple-style rendering of AST nodes for error messages.
//!
//! `x + 3` renders as `('operation', '+', ('symbol', 'x'), ('number', '3'))`
//! and an empty function literal as `('function', [], [])`.

use crate::{Expr, StringInterner};
use cell_stack::ensure_sufficient_stack;
use std::fmt::Write;

/// Render `expr` as a nested tuple.
pub fn snapshot(expr: &Expr, interner: &StringInterner) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr, interner);
    out
}

fn write_expr(out: &mut String, expr: &Expr, interner: &StringInterner) {
    ensure_sufficient_stack(|| write_node(out, expr, interner));
}

fn write_node(out: &mut String, expr: &Expr, interner: &StringInterner) {
    match expr {
        Expr::Number(text) => leaf(out, "number", text),
        Expr::String(value) => leaf(out, "string", value),
        Expr::Symbol(name) => leaf(out, "symbol", interner.lookup(*name)),
        Expr::Operation { op, lhs, rhs } => {
            let _ = write!(out, "('operation', '{op}', ");
            write_expr(out, lhs, interner);
            out.push_str(", ");
            write_expr(out, rhs, interner);
            out.push(')');
        }
        Expr::Assignment { target, value } => {
            out.push_str("('assignment', ");
            leaf(out, "symbol", interner.lookup(*target));
            out.push_str(", ");
            write_expr(out, value, interner);
            out.push(')');
        }
        Expr::Call { callee, args } => {
            out.push_str("('call', ");
            write_expr(out, callee, interner);
            out.push_str(", ");
            write_list(out, args, interner);
            out.push(')');
        }
        Expr::Function(def) => {
            out.push_str("('function', [");
            for (i, param) in def.params.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                leaf(out, "symbol", interner.lookup(*param));
            }
            out.push_str("], ");
            write_list(out, &def.body, interner);
            out.push(')');
        }
    }
}

fn write_list(out: &mut String, exprs: &[Expr], interner: &StringInterner) {
    out.push('[');
    for (i, expr) in exprs.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_expr(out, expr, interner);
    }
    out.push(']');
}

fn leaf(out: &mut String, kind: &str, text: &str) {
    let _ = write!(out, "('{kind}', '{text}')");
}

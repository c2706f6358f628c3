//! Compact source output.
//!
//! No whitespace is needed anywhere: a number or symbol is never followed
//! directly by another number or symbol in a parsed tree.

use cell_ir::{Expr, StringInterner};
use cell_stack::ensure_sufficient_stack;

/// Minimal source for one statement, without its terminating `;`.
pub fn minimise(expr: &Expr, interner: &StringInterner) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr, interner);
    out
}

/// Minimal source for a whole program, each statement terminated by `;`.
pub fn minimise_program(statements: &[Expr], interner: &StringInterner) -> String {
    let mut out = String::new();
    for stmt in statements {
        write_expr(&mut out, stmt, interner);
        out.push(';');
    }
    out
}

fn write_expr(out: &mut String, expr: &Expr, interner: &StringInterner) {
    ensure_sufficient_stack(|| write_expr_inner(out, expr, interner));
}

fn write_expr_inner(out: &mut String, expr: &Expr, interner: &StringInterner) {
    match expr {
        Expr::Number(text) => out.push_str(text),
        Expr::Symbol(name) => out.push_str(interner.lookup(*name)),
        Expr::String(value) => {
            let quote = if value.contains('\'') { '"' } else { '\'' };
            out.push(quote);
            out.push_str(value);
            out.push(quote);
        }
        Expr::Assignment { target, value } => {
            out.push_str(interner.lookup(*target));
            out.push('=');
            write_expr(out, value, interner);
        }
        Expr::Operation { op, lhs, rhs } => {
            write_expr(out, lhs, interner);
            out.push_str(op.as_symbol());
            write_expr(out, rhs, interner);
        }
        Expr::Call { callee, args } => {
            write_expr(out, callee, interner);
            out.push('(');
            write_separated(out, args, ',', interner);
            out.push(')');
        }
        Expr::Function(def) => {
            out.push('{');
            if !def.params.is_empty() {
                out.push_str(":(");
                for (i, param) in def.params.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    out.push_str(interner.lookup(*param));
                }
                out.push(')');
            }
            write_separated(out, &def.body, ';', interner);
            out.push('}');
        }
    }
}

fn write_separated(out: &mut String, items: &[Expr], separator: char, interner: &StringInterner) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        write_expr(out, item, interner);
    }
}

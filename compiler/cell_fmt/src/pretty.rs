//! Indented tree view.
//!
//! ```text
//!  [ assignment
//!    [ symbol, x ]
//!    [ number, 3 ]
//!  ]
//! ```
//!
//! Every line starts with one space; children are indented two more.

use crate::color::{colors, Painter};
use cell_ir::{Expr, StringInterner};
use cell_stack::ensure_sufficient_stack;
use std::fmt::Write;

/// Render one statement as a tree, one node per line.
pub fn pretty_print(expr: &Expr, interner: &StringInterner, use_colors: bool) -> String {
    let mut printer = PrettyPrinter {
        interner,
        painter: Painter::new(use_colors),
        out: String::new(),
    };
    printer.node(expr, 0);
    printer.out
}

struct PrettyPrinter<'a> {
    interner: &'a StringInterner,
    painter: Painter,
    out: String,
}

impl PrettyPrinter<'_> {
    fn line(&mut self, indent: usize, text: &str) {
        let _ = writeln!(self.out, "{:indent$} {text}", "");
    }

    fn kind(&self, name: &str) -> String {
        self.painter.paint(colors::KIND, name)
    }

    fn node(&mut self, expr: &Expr, indent: usize) {
        ensure_sufficient_stack(|| self.node_inner(expr, indent));
    }

    fn node_inner(&mut self, expr: &Expr, indent: usize) {
        let kind = self.kind(expr.kind_name());
        match expr {
            Expr::Symbol(name) => {
                let text = self.painter.paint(colors::SYMBOL, self.interner.lookup(*name));
                self.line(indent, &format!("[ {kind}, {text} ]"));
            }
            Expr::Number(text) => {
                let text = self.painter.paint(colors::NUMBER, text);
                self.line(indent, &format!("[ {kind}, {text} ]"));
            }
            Expr::String(value) => {
                let value = self.painter.paint(colors::STRING, value);
                self.line(indent, &format!("[ {kind}, '{value}' ]"));
            }
            Expr::Assignment { target, value } => {
                self.line(indent, &format!("[ {kind}"));
                self.node(&Expr::Symbol(*target), indent + 2);
                self.node(value, indent + 2);
                self.line(indent, "]");
            }
            Expr::Operation { op, lhs, rhs } => {
                let op = self.painter.paint(colors::OPERATOR, op.as_symbol());
                self.line(indent, &format!("[ {kind}, {op}"));
                self.node(lhs, indent + 2);
                self.node(rhs, indent + 2);
                self.line(indent, "]");
            }
            Expr::Call { callee, args } => {
                self.line(indent, &format!("[ {kind}"));
                self.node(callee, indent + 2);
                self.list(args, indent);
                self.line(indent, "]");
            }
            Expr::Function(def) => {
                self.line(indent, &format!("[ {kind}"));
                let params: Vec<Expr> = def.params.iter().map(|p| Expr::Symbol(*p)).collect();
                self.list(&params, indent);
                if def.body.is_empty() {
                    self.line(indent, "  [");
                    self.line(indent, "  ]");
                } else {
                    self.list(&def.body, indent);
                }
                self.line(indent, "]");
            }
        }
    }

    /// A bracketed child list; `[ ]` on one line when empty.
    fn list(&mut self, items: &[Expr], indent: usize) {
        if items.is_empty() {
            self.line(indent, "  [ ]");
            return;
        }
        self.line(indent, "  [");
        for item in items {
            self.node(item, indent + 4);
        }
        self.line(indent, "  ]");
    }
}

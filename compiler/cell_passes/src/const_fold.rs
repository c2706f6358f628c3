//! Constant folding.
//!
//! Folds `Operation` nodes whose operands are both number literals, bottom
//! up, so `1 + 2 * 3` becomes `7`. A result is only substituted when it can
//! be written back as a number literal: finite, not negative and not in
//! exponent form. Otherwise the operation stays, with its children folded.

use crate::Pass;
use cell_ir::number::{format_number, is_literal, parse_number};
use cell_ir::{walk_expr, BinaryOp, Expr, Folder};
use tracing::debug;

#[derive(Default)]
pub struct ConstantFoldingPass {
    /// Operations replaced since creation.
    count: usize,
}

impl ConstantFoldingPass {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    fn try_fold(op: BinaryOp, lhs: &Expr, rhs: &Expr) -> Option<Expr> {
        let (Expr::Number(a), Expr::Number(b)) = (lhs, rhs) else {
            return None;
        };
        let result = op.apply(parse_number(a), parse_number(b));
        if !result.is_finite() || result < 0.0 {
            return None;
        }
        let text = format_number(result);
        is_literal(&text).then(|| Expr::number(text))
    }
}

impl Folder for ConstantFoldingPass {
    fn fold_expr(&mut self, expr: Expr) -> Expr {
        let expr = walk_expr(self, expr);
        if let Expr::Operation { op, lhs, rhs } = &expr {
            if let Some(folded) = Self::try_fold(*op, lhs, rhs) {
                self.count += 1;
                return folded;
            }
        }
        expr
    }
}

impl Pass for ConstantFoldingPass {
    fn name(&self) -> &'static str {
        "fold"
    }

    fn run(&mut self, statement: Expr) -> Expr {
        let before = self.count;
        let folded = self.fold_expr(statement);
        debug!(folded = self.count - before, "constant folding");
        folded
    }
}

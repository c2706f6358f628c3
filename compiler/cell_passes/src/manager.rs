//! Ordered list of passes.

use crate::{ConstantFoldingPass, ObfuscationPass, Pass, Processor};
use cell_ir::{Expr, SharedInterner};
use tracing::trace;

/// Runs each configured pass over a statement, in order.
#[derive(Default)]
pub struct PassManager {
    passes: Vec<Box<dyn Pass>>,
}

impl PassManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the passes for `processors`, in the order given. `reserved`
    /// names are left alone by obfuscation.
    pub fn from_processors(
        processors: &[Processor],
        interner: &SharedInterner,
        reserved: &[&str],
    ) -> Self {
        let mut manager = Self::new();
        for processor in processors {
            match processor {
                Processor::Fold => manager.add(ConstantFoldingPass::new()),
                Processor::Obfuscate => manager.add(ObfuscationPass::new(
                    interner.clone(),
                    reserved.iter().copied(),
                )),
            }
        }
        manager
    }

    pub fn add(&mut self, pass: impl Pass + 'static) {
        self.passes.push(Box::new(pass));
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    /// Apply every pass to one top-level statement.
    pub fn run(&mut self, statement: Expr) -> Expr {
        self.passes.iter_mut().fold(statement, |stmt, pass| {
            trace!(pass = pass.name(), "running pass");
            pass.run(stmt)
        })
    }
}

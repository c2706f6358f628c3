//! Cell Passes - processors applied to each statement after parsing.
//!
//! Each pass is a [`Folder`](cell_ir::Folder) wrapped in the [`Pass`]
//! trait so a [`PassManager`] can run a configured list of them in order.
//!
//! - [`ConstantFoldingPass`] (`fold`): arithmetic on literals
//! - [`ObfuscationPass`] (`obfuscate`): renames user symbols

mod const_fold;
mod manager;
mod obfuscate;

pub use const_fold::ConstantFoldingPass;
pub use manager::PassManager;
pub use obfuscate::ObfuscationPass;

use cell_ir::Expr;
use std::fmt;

/// A statement-level transform.
pub trait Pass {
    /// Name used on the command line and in logs.
    fn name(&self) -> &'static str;

    /// Transform one top-level statement.
    fn run(&mut self, statement: Expr) -> Expr;
}

/// The processors that can be selected by name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Processor {
    Fold,
    Obfuscate,
}

impl Processor {
    pub const ALL: [Processor; 2] = [Processor::Fold, Processor::Obfuscate];

    pub fn name(self) -> &'static str {
        match self {
            Processor::Fold => "fold",
            Processor::Obfuscate => "obfuscate",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processor_names() {
        assert_eq!(Processor::from_name("fold"), Some(Processor::Fold));
        assert_eq!(Processor::from_name("obfuscate"), Some(Processor::Obfuscate));
        assert_eq!(Processor::from_name("minify"), None);
        assert_eq!(Processor::Obfuscate.to_string(), "obfuscate");
    }
}

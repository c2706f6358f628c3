//! Symbol obfuscation.
//!
//! Every user symbol becomes `obs_` followed by the hex of its UTF-8 bytes
//! (`total` becomes `obs_746f74616c`), so the result is still a valid
//! symbol and can be printed back as source. Library names and names that
//! already start with `obs_` are kept. The mapping persists across
//! statements, so a name defined in one statement and used in a later one
//! is renamed the same way in both.

use crate::Pass;
use cell_ir::{Expr, Folder, Name, SharedInterner};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt::Write;

const PREFIX: &str = "obs_";

pub struct ObfuscationPass {
    interner: SharedInterner,
    /// Names that must keep their spelling.
    reserved: FxHashSet<Name>,
    renamed: FxHashMap<Name, Name>,
}

impl ObfuscationPass {
    /// `reserved` is usually every name the library defines.
    pub fn new<'r>(interner: SharedInterner, reserved: impl IntoIterator<Item = &'r str>) -> Self {
        let reserved = reserved.into_iter().map(|s| interner.intern(s)).collect();
        ObfuscationPass {
            interner,
            reserved,
            renamed: FxHashMap::default(),
        }
    }

    fn obfuscated(text: &str) -> String {
        text.bytes().fold(String::from(PREFIX), |mut out, b| {
            let _ = write!(out, "{b:02x}");
            out
        })
    }
}

impl Folder for ObfuscationPass {
    fn fold_name(&mut self, name: Name) -> Name {
        if self.reserved.contains(&name) {
            return name;
        }
        if let Some(&renamed) = self.renamed.get(&name) {
            return renamed;
        }
        let text = self.interner.lookup(name);
        let renamed = if text.starts_with(PREFIX) {
            name
        } else {
            self.interner.intern(&Self::obfuscated(text))
        };
        self.renamed.insert(name, renamed);
        renamed
    }
}

impl Pass for ObfuscationPass {
    fn name(&self) -> &'static str {
        "obfuscate"
    }

    fn run(&mut self, statement: Expr) -> Expr {
        self.fold_expr(statement)
    }
}

//! Integration test utilities for identifier lowering

use anyhow::Result;
use ln_driver::{CompilerOptions, UnitOutput, compile_unit};
use ln_intern::Interner;
use ln_syntax::{NodeId, SyntaxTree, TreeBuilder};

/// A unit built, bound and lowered in one go
pub struct LoweredUnit {
    /// Interner owning every name in `tree`
    pub interner: Interner,
    /// The source tree
    pub tree: SyntaxTree,
    /// What lowering produced
    pub output: UnitOutput,
}

impl LoweredUnit {
    /// Build a unit with `build` (which returns the top-level statements) and
    /// compile it with default options
    ///
    /// # Errors
    ///
    /// Returns an error if the unit does not compile.
    pub fn compile(build: impl FnOnce(&mut TreeBuilder<'_>) -> Vec<NodeId>) -> Result<Self> {
        Self::compile_with(&CompilerOptions::default(), build)
    }

    /// Like [`LoweredUnit::compile`] with explicit options
    ///
    /// # Errors
    ///
    /// Returns an error if the unit does not compile.
    pub fn compile_with(
        options: &CompilerOptions,
        build: impl FnOnce(&mut TreeBuilder<'_>) -> Vec<NodeId>,
    ) -> Result<Self> {
        let mut interner = Interner::new();
        let mut builder = TreeBuilder::new(&mut interner);
        let statements = build(&mut builder);
        let tree = builder.finish(statements);
        let output = compile_unit(&tree, &mut interner, options)?;
        Ok(Self { interner, tree, output })
    }

    /// Spellings of the references hoisted ahead of `statement`
    #[must_use]
    pub fn hoisted_names(&self, statement: NodeId) -> Vec<&str> {
        self.output
            .hoists
            .hoists_for(statement)
            .iter()
            .filter_map(|&reference| self.tree.text(reference))
            .map(|name| self.interner.resolve(&name))
            .collect()
    }

    /// Rendered hoist plan
    #[must_use]
    pub fn render_hoists(&self) -> String {
        self.output.render_hoists(&self.tree, &self.interner)
    }
}

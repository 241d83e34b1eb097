//! Per-compilation-unit transform state

use crate::error::LowerError;
use crate::hoist::{FxIndexMap, HoistPlan};
use crate::macros::MacroRegistry;
use ln_intern::Interner;
use ln_resolve::{SemanticModel, SymbolId};
use ln_syntax::{NodeId, SyntaxKind, SyntaxTree};
use rustc_hash::FxHashMap;

/// Options that change how builtins are lowered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Name of the runtime library table in the target (`TS.Promise`)
    pub runtime_library: String,
    /// Value substituted for `PKG_VERSION`
    pub package_version: Option<String>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            runtime_library: "TS".to_string(),
            package_version: None,
        }
    }
}

/// State shared by every transformation of one compilation unit.
///
/// Owns the hoist registry (statement -> references to pre-declare before it)
/// and the per-symbol decided flags. Created empty at the start of a unit and
/// consumed by [`TransformState::finish`] once the walk is over.
pub struct TransformState<'a> {
    /// Tree being lowered
    pub tree: &'a SyntaxTree,
    /// Binding results for `tree`
    pub semantics: &'a dyn SemanticModel,
    /// Interner that owns the tree's names
    pub interner: &'a Interner,
    /// Identifier macros, fixed before lowering starts
    pub macros: &'a MacroRegistry,
    /// Lowering options
    pub options: &'a TransformOptions,
    pub(crate) hoists_by_statement: FxIndexMap<NodeId, Vec<NodeId>>,
    pub(crate) is_hoisted: FxHashMap<SymbolId, bool>,
}

impl<'a> TransformState<'a> {
    /// Fresh state for one unit
    pub fn new(
        tree: &'a SyntaxTree,
        semantics: &'a dyn SemanticModel,
        interner: &'a Interner,
        macros: &'a MacroRegistry,
        options: &'a TransformOptions,
    ) -> Self {
        Self {
            tree,
            semantics,
            interner,
            macros,
            options,
            hoists_by_statement: FxIndexMap::default(),
            is_hoisted: FxHashMap::default(),
        }
    }

    /// References that must be declared before `statement`, in discovery order
    #[must_use]
    pub fn hoists_for(&self, statement: NodeId) -> &[NodeId] {
        self.hoists_by_statement
            .get(&statement)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Hoist decision recorded for `symbol`, if one was made
    #[must_use]
    pub fn is_hoisted(&self, symbol: SymbolId) -> Option<bool> {
        self.is_hoisted.get(&symbol).copied()
    }

    /// Spelling of an identifier node
    ///
    /// # Errors
    ///
    /// Returns `LowerError::NotAnIdentifier` if `node` is not a named identifier.
    pub fn identifier_text(&self, node: NodeId) -> Result<&'a str, LowerError> {
        let tree = self.tree;
        let interner = self.interner;
        match (tree.kind(node), tree.text(node)) {
            (SyntaxKind::Identifier, Some(name)) => Ok(interner.resolve(&name)),
            (kind, _) => Err(LowerError::NotAnIdentifier {
                kind,
                span: tree.span(node),
            }),
        }
    }

    /// End the unit and hand the hoist registry to the emission stage
    #[must_use]
    pub fn finish(self) -> HoistPlan {
        HoistPlan::new(self.hoists_by_statement)
    }
}

//! Read-only view of binding results used by lowering

use crate::symbol::{SymbolId, SymbolKind, SymbolTable};
use ln_syntax::NodeId;

/// Semantic queries available once binding has completed for a unit.
///
/// Lowering only reads through this trait, so it can run on top of any
/// analyzer that assigns one `SymbolId` per declaration.
pub trait SemanticModel {
    /// Symbol an identifier reference denotes
    fn symbol_at_location(&self, node: NodeId) -> Option<SymbolId>;

    /// Whether `symbol` is the language's single `undefined` binding
    fn is_undefined_symbol(&self, symbol: SymbolId) -> bool;

    /// Canonical declaration node of `symbol`
    fn value_declaration(&self, symbol: SymbolId) -> Option<NodeId>;
}

impl SemanticModel for SymbolTable {
    fn symbol_at_location(&self, node: NodeId) -> Option<SymbolId> {
        self.reference(node)
    }

    fn is_undefined_symbol(&self, symbol: SymbolId) -> bool {
        symbol == self.undefined_symbol() || self.symbol(symbol).kind == SymbolKind::Undefined
    }

    fn value_declaration(&self, symbol: SymbolId) -> Option<NodeId> {
        self.symbol(symbol).value_declaration
    }
}

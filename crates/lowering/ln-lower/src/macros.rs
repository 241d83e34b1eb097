//! Identifier macros
//!
//! Some builtins have no plain-identifier representation in the target, for
//! example values provided by the runtime library. A macro registered for such
//! a symbol takes over lowering of every reference to it.

use crate::state::TransformState;
use ln_intern::Interner;
use ln_lua::{self as lua, Expression};
use ln_resolve::{SymbolId, SymbolTable};
use ln_syntax::NodeId;
use rustc_hash::FxHashMap;
use std::fmt;

/// Replacement lowering for references to one symbol
pub type IdentifierMacro = fn(&mut TransformState<'_>, NodeId) -> Expression;

/// Builtin identifier macros keyed by global name
const BUILTIN_IDENTIFIER_MACROS: &[(&str, IdentifierMacro)] = &[
    ("Promise", promise),
    ("PKG_VERSION", package_version),
];

/// `Promise` lives on the runtime library table
fn promise(state: &mut TransformState<'_>, _node: NodeId) -> Expression {
    lua::property_access(lua::identifier(state.options.runtime_library.as_str()), "Promise")
}

fn package_version(state: &mut TransformState<'_>, _node: NodeId) -> Expression {
    match &state.options.package_version {
        Some(version) => lua::string(version.as_str()),
        None => lua::nil(),
    }
}

/// Lookup table from symbol to identifier macro.
///
/// Filled before any unit is lowered and only read afterwards.
#[derive(Default)]
pub struct MacroRegistry {
    identifier_macros: FxHashMap<SymbolId, IdentifierMacro>,
}

impl MacroRegistry {
    /// Registry without any macros
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every builtin macro whose global is declared in `symbols`
    #[must_use]
    pub fn with_builtins(symbols: &SymbolTable, interner: &Interner) -> Self {
        let mut registry = Self::new();
        for &(name, expand) in BUILTIN_IDENTIFIER_MACROS {
            let Some(symbol) = interner.get(name).and_then(|name| symbols.global(name)) else {
                continue;
            };
            registry.register_identifier_macro(symbol, expand);
        }
        registry
    }

    /// Register `expand` for `symbol`, returning the macro it replaces
    pub fn register_identifier_macro(
        &mut self,
        symbol: SymbolId,
        expand: IdentifierMacro,
    ) -> Option<IdentifierMacro> {
        self.identifier_macros.insert(symbol, expand)
    }

    /// Macro registered for `symbol`
    #[must_use]
    pub fn identifier_macro(&self, symbol: SymbolId) -> Option<IdentifierMacro> {
        self.identifier_macros.get(&symbol).copied()
    }

    /// Number of registered identifier macros
    #[must_use]
    pub fn len(&self) -> usize {
        self.identifier_macros.len()
    }

    /// Whether no macro is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identifier_macros.is_empty()
    }
}

impl fmt::Debug for MacroRegistry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MacroRegistry")
            .field("identifier_macros", &self.identifier_macros.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ln_resolve::{Binder, DEFAULT_GLOBALS};
    use ln_syntax::TreeBuilder;

    #[test]
    fn test_builtins_follow_declared_globals() {
        let mut interner = Interner::new();
        let tree = TreeBuilder::new(&mut interner).finish(vec![]);

        let symbols = Binder::bind(&tree, &mut interner, DEFAULT_GLOBALS).symbols;
        let registry = MacroRegistry::with_builtins(&symbols, &interner);
        assert_eq!(registry.len(), 2);

        let promise = symbols.global(interner.get("Promise").unwrap()).unwrap();
        assert!(registry.identifier_macro(promise).is_some());
        let print = symbols.global(interner.get("print").unwrap()).unwrap();
        assert!(registry.identifier_macro(print).is_none());

        let symbols = Binder::bind(&tree, &mut interner, &["print"]).symbols;
        assert!(MacroRegistry::with_builtins(&symbols, &interner).is_empty());
    }
}

//! Symbol table produced by binding

use la_arena::{Arena, Idx};
use ln_intern::Name;
use ln_syntax::NodeId;
use rustc_hash::FxHashMap;

/// Opaque handle for a declaration; equal handles denote the same binding
pub type SymbolId = Idx<SymbolData>;

/// A declared name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolData {
    /// Declared name
    pub name: Name,
    /// What kind of declaration introduced it
    pub kind: SymbolKind,
    /// Canonical declaration node (None for globals)
    pub value_declaration: Option<NodeId>,
}

/// Kind of symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// `let`/`const` declarator or destructured binding
    Variable,
    /// Function declaration or named function expression
    Function,
    /// Class declaration
    Class,
    /// Function parameter
    Parameter,
    /// Namespace declaration
    Module,
    /// Ambient global provided by the runtime
    Global,
    /// The canonical `undefined` value
    Undefined,
}

/// Symbols of one compilation unit and the references bound to them
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: Arena<SymbolData>,
    references: FxHashMap<NodeId, SymbolId>,
    globals: FxHashMap<Name, SymbolId>,
    undefined: SymbolId,
}

impl SymbolTable {
    /// Create a table holding only the `undefined` symbol, spelled `undefined_name`
    #[must_use]
    pub fn new(undefined_name: Name) -> Self {
        let mut symbols = Arena::new();
        let undefined = symbols.alloc(SymbolData {
            name: undefined_name,
            kind: SymbolKind::Undefined,
            value_declaration: None,
        });

        let mut globals = FxHashMap::default();
        globals.insert(undefined_name, undefined);

        Self {
            symbols,
            references: FxHashMap::default(),
            globals,
            undefined,
        }
    }

    /// Declare an ambient global, returning the existing symbol if already declared
    pub fn declare_global(&mut self, name: Name) -> SymbolId {
        if let Some(&existing) = self.globals.get(&name) {
            return existing;
        }
        let symbol = self.symbols.alloc(SymbolData {
            name,
            kind: SymbolKind::Global,
            value_declaration: None,
        });
        self.globals.insert(name, symbol);
        symbol
    }

    /// Declare a symbol whose canonical declaration is `declaration`
    pub fn declare(&mut self, name: Name, kind: SymbolKind, declaration: NodeId) -> SymbolId {
        self.symbols.alloc(SymbolData {
            name,
            kind,
            value_declaration: Some(declaration),
        })
    }

    /// Bind an identifier reference to a symbol
    pub fn record_reference(&mut self, reference: NodeId, symbol: SymbolId) {
        self.references.insert(reference, symbol);
    }

    /// Data of a declared symbol
    #[must_use]
    pub fn symbol(&self, symbol: SymbolId) -> &SymbolData {
        &self.symbols[symbol]
    }

    /// Symbol a reference was bound to, if any
    #[must_use]
    pub fn reference(&self, reference: NodeId) -> Option<SymbolId> {
        self.references.get(&reference).copied()
    }

    /// Global symbol by name
    #[must_use]
    pub fn global(&self, name: Name) -> Option<SymbolId> {
        self.globals.get(&name).copied()
    }

    /// The canonical `undefined` symbol
    #[must_use]
    pub fn undefined_symbol(&self) -> SymbolId {
        self.undefined
    }

    /// Number of symbols, globals included
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Never true: `undefined` is always present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of bound references
    #[must_use]
    pub fn reference_count(&self) -> usize {
        self.references.len()
    }
}

//! Scope tree for name resolution

use crate::error::ResolutionError;
use crate::symbol::SymbolId;
use ln_intern::{Interner, Name};
use ln_span::FileSpan;
use ln_syntax::NodeId;
use rustc_hash::FxHashMap;

/// Unique identifier for a scope
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct ScopeId(pub u32);

/// Kind of scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// Ambient globals and builtins
    Global,
    /// Top level of a compilation unit
    SourceFile,
    /// Brace block
    Block,
    /// Namespace body
    Module,
    /// All clauses of one switch statement
    CaseBlock,
    /// Parameters (and the name of a named function expression)
    Function,
}

/// A name bound in a scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Definition {
    /// Symbol the name denotes
    pub symbol: SymbolId,
    /// Where it was declared
    pub span: FileSpan,
}

/// A single scope in the scope tree
#[derive(Debug, Clone)]
pub struct Scope {
    /// Parent scope (None for the global scope)
    pub parent: Option<ScopeId>,
    /// Kind of scope
    pub kind: ScopeKind,
    /// Node that introduced this scope (None for the global scope)
    pub node: Option<NodeId>,
    /// Names declared directly in this scope
    pub defs: FxHashMap<Name, Definition>,
}

impl Scope {
    fn new(parent: Option<ScopeId>, kind: ScopeKind, node: Option<NodeId>) -> Self {
        Self {
            parent,
            kind,
            node,
            defs: FxHashMap::default(),
        }
    }
}

/// Scope tree for name resolution
#[derive(Debug, Clone)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
    /// Global (root) scope
    pub global_scope: ScopeId,
}

impl ScopeTree {
    /// Create a tree holding only the global scope
    #[must_use]
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::new(None, ScopeKind::Global, None)],
            global_scope: ScopeId(0),
        }
    }

    /// Create a child scope introduced by `node`
    pub fn create_child(&mut self, parent: ScopeId, kind: ScopeKind, node: NodeId) -> ScopeId {
        let scope_id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope::new(Some(parent), kind, Some(node)));
        scope_id
    }

    /// Declare a name in a scope
    ///
    /// # Errors
    ///
    /// Returns `ResolutionError::DuplicateDefinition` if the name is already
    /// declared in this scope. The first declaration is kept.
    pub fn define(
        &mut self,
        scope: ScopeId,
        name: Name,
        symbol: SymbolId,
        span: FileSpan,
    ) -> Result<(), ResolutionError> {
        let scope_data = &mut self.scopes[scope.0 as usize];

        if let Some(existing) = scope_data.defs.get(&name) {
            return Err(ResolutionError::DuplicateDefinition {
                name,
                first: existing.span,
                second: span,
            });
        }

        scope_data.defs.insert(name, Definition { symbol, span });
        Ok(())
    }

    /// Resolve a name in a scope, walking up the scope chain
    ///
    /// # Errors
    ///
    /// Returns `ResolutionError::Undefined` if the name is not declared in any
    /// enclosing scope.
    pub fn resolve(
        &self,
        scope: ScopeId,
        name: Name,
        use_site: FileSpan,
        interner: &Interner,
    ) -> Result<Definition, ResolutionError> {
        if let Some(definition) = self.lookup(scope, name) {
            return Ok(definition);
        }

        let available_names = self.visible_names(scope);
        Err(ResolutionError::Undefined {
            name,
            use_site,
            suggestions: ResolutionError::compute_suggestions(name, interner, &available_names),
        })
    }

    /// Find the innermost definition of `name` visible from `scope`
    #[must_use]
    pub fn lookup(&self, scope: ScopeId, name: Name) -> Option<Definition> {
        self.chain(scope)
            .find_map(|scope_id| self.scopes[scope_id.0 as usize].defs.get(&name).copied())
    }

    /// `scope` followed by each of its ancestors
    pub fn chain(&self, scope: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(scope), move |current| self.scopes[current.0 as usize].parent)
    }

    /// Every name visible from `scope`, innermost scope first
    fn visible_names(&self, scope: ScopeId) -> Vec<Name> {
        self.chain(scope)
            .flat_map(|scope_id| self.scopes[scope_id.0 as usize].defs.keys().copied())
            .collect()
    }

    /// Get a scope by ID
    #[must_use]
    pub fn get_scope(&self, scope: ScopeId) -> &Scope {
        &self.scopes[scope.0 as usize]
    }

    /// Number of scopes, including the global scope
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Always false: the global scope exists from construction
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}

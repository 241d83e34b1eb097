//! Binding pass: declares names and resolves references

use crate::error::ResolutionError;
use crate::scope::{ScopeId, ScopeKind, ScopeTree};
use crate::symbol::{SymbolKind, SymbolTable};
use ln_intern::{Interner, Name};
use ln_span::{FileSpan, Span};
use ln_syntax::{NodeId, SyntaxKind, SyntaxTree};
use tracing::{debug, trace};

/// Ambient globals every unit can reference without declaring them
pub const DEFAULT_GLOBALS: &[&str] = &["print", "error", "Promise", "PKG_VERSION"];

/// Result of binding one compilation unit
#[derive(Debug, Clone)]
pub struct BindResult {
    /// Declared symbols and the reference-to-symbol map
    pub symbols: SymbolTable,
    /// Scope tree built during binding
    pub scopes: ScopeTree,
    /// Errors encountered during binding
    pub errors: Vec<ResolutionError>,
}

/// Binder for one syntax tree
pub struct Binder<'a> {
    tree: &'a SyntaxTree,
    interner: &'a Interner,
    scopes: ScopeTree,
    current_scope: ScopeId,
    symbols: SymbolTable,
    errors: Vec<ResolutionError>,
}

impl<'a> Binder<'a> {
    /// Bind every declaration and reference in `tree`.
    ///
    /// `globals` are declared in the global scope next to `undefined`.
    pub fn bind(tree: &'a SyntaxTree, interner: &'a mut Interner, globals: &[&str]) -> BindResult {
        let undefined_name = interner.intern("undefined");
        let global_names: Vec<Name> = globals.iter().map(|name| interner.intern(name)).collect();
        let interner: &'a Interner = interner;

        let mut symbols = SymbolTable::new(undefined_name);
        let mut scopes = ScopeTree::new();
        let mut errors = Vec::new();
        let global_scope = scopes.global_scope;
        let ambient_span = FileSpan::new(tree.file(), Span::default());

        for name in std::iter::once(undefined_name).chain(global_names) {
            if scopes.lookup(global_scope, name).is_some() {
                continue;
            }
            let symbol = symbols.declare_global(name);
            if let Err(error) = scopes.define(global_scope, name, symbol, ambient_span) {
                errors.push(error);
            }
        }

        let mut binder = Self {
            tree,
            interner,
            scopes,
            current_scope: global_scope,
            symbols,
            errors,
        };
        binder.bind_node(tree.root());

        debug!(
            symbols = binder.symbols.len(),
            references = binder.symbols.reference_count(),
            scopes = binder.scopes.len(),
            errors = binder.errors.len(),
            "bound compilation unit"
        );

        BindResult {
            symbols: binder.symbols,
            scopes: binder.scopes,
            errors: binder.errors,
        }
    }

    fn bind_node(&mut self, node: NodeId) {
        let tree = self.tree;
        match tree.kind(node) {
            SyntaxKind::Identifier => self.resolve_reference(node),
            SyntaxKind::SourceFile => self.bind_block(node, ScopeKind::SourceFile),
            SyntaxKind::Block => self.bind_block(node, ScopeKind::Block),
            SyntaxKind::ModuleBlock => self.bind_block(node, ScopeKind::Module),
            SyntaxKind::CaseBlock => {
                // Clauses of one switch share a single lexical scope
                self.with_scope(ScopeKind::CaseBlock, node, |binder| {
                    for &clause in tree.children(node) {
                        binder.declare_statements(tree.statements(clause));
                    }
                    binder.bind_children(node);
                });
            }
            kind if kind.is_function_like() => self.bind_function(node),
            _ => self.bind_children(node),
        }
    }

    fn bind_children(&mut self, node: NodeId) {
        let tree = self.tree;
        for &child in tree.children(node) {
            self.bind_node(child);
        }
    }

    fn bind_block(&mut self, node: NodeId, kind: ScopeKind) {
        let tree = self.tree;
        self.with_scope(kind, node, |binder| {
            binder.declare_statements(tree.statements(node));
            binder.bind_children(node);
        });
    }

    fn bind_function(&mut self, node: NodeId) {
        let tree = self.tree;
        self.with_scope(ScopeKind::Function, node, |binder| {
            if tree.kind(node) == SyntaxKind::FunctionExpression {
                if let Some(name) = tree.text(node) {
                    binder.declare(name, SymbolKind::Function, node);
                }
            }
            for &child in tree.children(node) {
                if tree.kind(child) == SyntaxKind::Parameter {
                    if let Some(name) = tree.text(child) {
                        binder.declare(name, SymbolKind::Parameter, child);
                    }
                }
            }
            binder.bind_children(node);
        });
    }

    fn with_scope(&mut self, kind: ScopeKind, node: NodeId, body: impl FnOnce(&mut Self)) {
        let scope = self.scopes.create_child(self.current_scope, kind, node);
        let previous_scope = std::mem::replace(&mut self.current_scope, scope);
        body(self);
        self.current_scope = previous_scope;
    }

    /// Declare every binding introduced by `statements` in the current scope
    fn declare_statements(&mut self, statements: &[NodeId]) {
        let tree = self.tree;
        for &statement in statements {
            let kind = match tree.kind(statement) {
                SyntaxKind::VariableStatement => {
                    for &list in tree.children(statement) {
                        for &declaration in tree.children(list) {
                            self.declare_variable(declaration);
                        }
                    }
                    continue;
                }
                SyntaxKind::FunctionDeclaration => SymbolKind::Function,
                SyntaxKind::ClassDeclaration => SymbolKind::Class,
                SyntaxKind::ModuleDeclaration => SymbolKind::Module,
                _ => continue,
            };
            if let Some(name) = tree.text(statement) {
                self.declare(name, kind, statement);
            }
        }
    }

    fn declare_variable(&mut self, declaration: NodeId) {
        let tree = self.tree;
        if let Some(name) = tree.text(declaration) {
            self.declare(name, SymbolKind::Variable, declaration);
            return;
        }

        let Some(&pattern) = tree.children(declaration).first() else {
            return;
        };
        self.declare_pattern(pattern);
    }

    fn declare_pattern(&mut self, pattern: NodeId) {
        let tree = self.tree;
        if !matches!(
            tree.kind(pattern),
            SyntaxKind::ObjectBindingPattern | SyntaxKind::ArrayBindingPattern
        ) {
            return;
        }
        for &element in tree.children(pattern) {
            if let Some(name) = tree.text(element) {
                self.declare(name, SymbolKind::Variable, element);
            }
        }
    }

    fn declare(&mut self, name: Name, kind: SymbolKind, node: NodeId) {
        debug_assert!(
            self.tree.kind(node).is_declaration(),
            "{} cannot declare a symbol",
            self.tree.kind(node)
        );
        let symbol = self.symbols.declare(name, kind, node);
        let span = self.tree.span(node);
        let scope_kind = self.scopes.get_scope(self.current_scope).kind;
        trace!(name = self.interner.resolve(&name), ?kind, ?scope_kind, %span, "declared");
        if let Err(error) = self.scopes.define(self.current_scope, name, symbol, span) {
            self.errors.push(error);
        }
    }

    fn resolve_reference(&mut self, node: NodeId) {
        let Some(name) = self.tree.text(node) else {
            return;
        };
        let use_site = self.tree.span(node);
        match self
            .scopes
            .resolve(self.current_scope, name, use_site, self.interner)
        {
            Ok(definition) => self.symbols.record_reference(node, definition.symbol),
            Err(error) => self.errors.push(error),
        }
    }
}

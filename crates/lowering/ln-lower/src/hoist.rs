//! Hoist planning
//!
//! A block-scoped declaration referenced from an earlier statement of its block
//! must be pre-declared in front of that statement. The planner decides this
//! once per symbol, on the first reference visited, and records the reference
//! under the sibling statement it belongs to.

use crate::locate::{ancestor_which_is_child_of, declaration_statement, is_block_like};
use crate::state::TransformState;
use indexmap::IndexMap;
use ln_resolve::SymbolId;
use ln_syntax::{NodeId, SyntaxKind};
use rustc_hash::FxBuildHasher;
use tracing::trace;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Which branch of the planner a reference took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoistOutcome {
    /// A decision for the symbol was already made
    AlreadyDecided,
    /// The declaration is not bound to a statement (parameter, global, ...)
    NoDeclarationStatement,
    /// The declaration statement is not directly inside a block-like node
    NotBlockScoped,
    /// The reference has no statement-level ancestor in the declaration's block
    NoSibling,
    /// The reference is in a later statement than the declaration
    DeclaredBefore,
    /// A function declaration referring to itself
    SelfReference,
    /// The declaration must be hoisted in front of `statement`
    Hoisted {
        /// Sibling statement the reference was recorded under
        statement: NodeId,
    },
}

/// Decide whether `symbol`'s declaration must be hoisted because of `node`.
///
/// Only `HoistOutcome::Hoisted` mutates the state; it appends `node` to the
/// registry entry of the sibling statement and marks `symbol` as decided.
/// Structural skips leave the symbol undecided so a later reference can still
/// trigger a hoist.
pub fn check_hoist(state: &mut TransformState<'_>, node: NodeId, symbol: SymbolId) -> HoistOutcome {
    if state.is_hoisted.contains_key(&symbol) {
        return HoistOutcome::AlreadyDecided;
    }

    let tree = state.tree;
    let Some(declaration_statement) = state
        .semantics
        .value_declaration(symbol)
        .and_then(|declaration| declaration_statement(tree, declaration))
    else {
        return HoistOutcome::NoDeclarationStatement;
    };

    let Some(parent) = tree
        .parent(declaration_statement)
        .filter(|&parent| is_block_like(tree, parent))
    else {
        return HoistOutcome::NotBlockScoped;
    };

    let Some(sibling) = ancestor_which_is_child_of(tree, parent, node)
        .filter(|&sibling| tree.kind(sibling).is_statement())
    else {
        return HoistOutcome::NoSibling;
    };

    let statements = tree.statements(parent);
    let position = |target: NodeId| statements.iter().position(|&statement| statement == target);
    let (Some(declaration_index), Some(sibling_index)) =
        (position(declaration_statement), position(sibling))
    else {
        return HoistOutcome::NoSibling;
    };

    if sibling_index > declaration_index {
        return HoistOutcome::DeclaredBefore;
    }

    if sibling_index == declaration_index
        && tree.kind(declaration_statement) == SyntaxKind::FunctionDeclaration
    {
        return HoistOutcome::SelfReference;
    }

    state
        .hoists_by_statement
        .entry(sibling)
        .or_default()
        .push(node);
    state.is_hoisted.insert(symbol, true);

    trace!(
        reference = ?node,
        statement = ?sibling,
        declaration_index,
        sibling_index,
        "hoisting declaration"
    );

    HoistOutcome::Hoisted { statement: sibling }
}

/// Hoist registry of a finished unit, read by statement emission.
///
/// Maps each sibling statement to the references whose declarations must be
/// emitted before it. Statements iterate in the order their first hoist was
/// discovered, references in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoistPlan {
    by_statement: FxIndexMap<NodeId, Vec<NodeId>>,
}

impl HoistPlan {
    pub(crate) fn new(by_statement: FxIndexMap<NodeId, Vec<NodeId>>) -> Self {
        Self { by_statement }
    }

    /// References to pre-declare before `statement`
    #[must_use]
    pub fn hoists_for(&self, statement: NodeId) -> &[NodeId] {
        self.by_statement
            .get(&statement)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Statements with hoists and their references
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[NodeId])> + '_ {
        self.by_statement
            .iter()
            .map(|(&statement, references)| (statement, references.as_slice()))
    }

    /// Number of statements with at least one hoist
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_statement.len()
    }

    /// Whether no statement needs a hoist
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_statement.is_empty()
    }

    /// Total number of hoisted references
    #[must_use]
    pub fn reference_count(&self) -> usize {
        self.by_statement.values().map(Vec::len).sum()
    }
}

//! Ancestor walks used to place hoisted declarations.
//!
//! All functions are pure, allocation-free loops over parent links.

use ln_syntax::{NodeId, SyntaxKind, SyntaxTree};

/// Whether `node` owns a statement list sharing one lexical scope
#[must_use]
pub fn is_block_like(tree: &SyntaxTree, node: NodeId) -> bool {
    tree.kind(node).is_block_like()
}

/// The statement that contains (or is) `declaration`.
///
/// Parameters and named function expressions are scoped to their function,
/// not to a statement, so they have none.
#[must_use]
pub fn declaration_statement(tree: &SyntaxTree, declaration: NodeId) -> Option<NodeId> {
    if tree.kind(declaration) == SyntaxKind::FunctionExpression {
        return None;
    }
    for ancestor in tree.ancestors(declaration) {
        let kind = tree.kind(ancestor);
        if kind == SyntaxKind::Parameter {
            return None;
        }
        if kind.is_statement() {
            return Some(ancestor);
        }
    }
    None
}

/// The ancestor of `node` (possibly `node` itself) whose parent is `parent`
#[must_use]
pub fn ancestor_which_is_child_of(tree: &SyntaxTree, parent: NodeId, node: NodeId) -> Option<NodeId> {
    let mut current = node;
    loop {
        let next = tree.parent(current)?;
        if next == parent {
            return Some(current);
        }
        current = next;
    }
}

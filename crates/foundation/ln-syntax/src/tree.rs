//! Parent-linked syntax tree storage and traversal

use crate::kind::SyntaxKind;
use la_arena::{Arena, Idx};
use ln_intern::Name;
use ln_span::{FileId, FileSpan, Span};

/// Index of a node inside its [`SyntaxTree`]
pub type NodeId = Idx<Node>;

/// A single source node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Syntactic kind
    pub kind: SyntaxKind,
    /// Enclosing node (None only for the root)
    pub parent: Option<NodeId>,
    /// Ordered child nodes
    pub children: Vec<NodeId>,
    /// Identifier spelling, declaration name, literal text or operator token
    pub text: Option<Name>,
    /// Source location
    pub span: Span,
}

/// Immutable syntax tree of one compilation unit
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Arena<Node>,
    root: NodeId,
    file: FileId,
}

impl SyntaxTree {
    pub(crate) fn new(nodes: Arena<Node>, root: NodeId, file: FileId) -> Self {
        Self { nodes, root, file }
    }

    /// The `SourceFile` node
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// File this tree was parsed from
    #[must_use]
    pub fn file(&self) -> FileId {
        self.file
    }

    /// Raw node storage, for in-crate tests
    #[cfg(test)]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Syntactic kind of a node
    #[must_use]
    pub fn kind(&self, id: NodeId) -> SyntaxKind {
        self.nodes[id].kind
    }

    /// Enclosing node, `None` for the root
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    /// Ordered children of a node
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    /// Interned text of a node (name, literal spelling or operator)
    #[must_use]
    pub fn text(&self, id: NodeId) -> Option<Name> {
        self.nodes[id].text
    }

    /// Source location of a node, qualified with the tree's file
    #[must_use]
    pub fn span(&self, id: NodeId) -> FileSpan {
        FileSpan::new(self.file, self.nodes[id].span)
    }

    /// Statement list of a block-like node.
    ///
    /// A case clause's first child is its test expression and is not part of the
    /// list. Nodes that are not block-like have no statements.
    #[must_use]
    pub fn statements(&self, id: NodeId) -> &[NodeId] {
        let node = &self.nodes[id];
        match node.kind {
            SyntaxKind::CaseClause => node.children.get(1..).unwrap_or_default(),
            kind if kind.is_block_like() => &node.children,
            _ => &[],
        }
    }

    /// Iterate from `id` (inclusive) up to the root
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |&current| self.nodes[current].parent)
    }

    /// Pre-order (top-down, left-to-right) traversal of the subtree at `id`
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![id],
        }
    }
}

/// Pre-order traversal returned by [`SyntaxTree::descendants`]
pub struct Preorder<'a> {
    tree: &'a SyntaxTree,
    stack: Vec<NodeId>,
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(current).iter().rev().copied());
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::TreeBuilder;
    use crate::kind::SyntaxKind;
    use ln_intern::Interner;

    #[test]
    fn test_parent_links_are_wired() {
        let mut interner = Interner::new();
        let mut builder = TreeBuilder::new(&mut interner);
        let reference = builder.identifier("x");
        let call = builder.call_named("print", vec![reference]);
        let statement = builder.expression_statement(call);
        let tree = builder.finish(vec![statement]);

        assert_eq!(tree.parent(reference), Some(call));
        assert_eq!(tree.parent(call), Some(statement));
        assert_eq!(tree.parent(statement), Some(tree.root()));
        assert_eq!(tree.parent(tree.root()), None);
        assert_eq!(tree.statements(tree.root()), &[statement]);
    }

    #[test]
    fn test_ancestors_start_at_self() {
        let mut interner = Interner::new();
        let mut builder = TreeBuilder::new(&mut interner);
        let reference = builder.identifier("x");
        let statement = builder.expression_statement(reference);
        let tree = builder.finish(vec![statement]);

        let chain: Vec<_> = tree.ancestors(reference).collect();
        assert_eq!(chain, vec![reference, statement, tree.root()]);
    }

    #[test]
    fn test_descendants_are_preorder() {
        let mut interner = Interner::new();
        let mut builder = TreeBuilder::new(&mut interner);
        let first = builder.identifier("a");
        let second = builder.identifier("b");
        let call = builder.call(first, vec![second]);
        let statement = builder.expression_statement(call);
        let tree = builder.finish(vec![statement]);

        let order: Vec<_> = tree.descendants(tree.root()).collect();
        assert_eq!(order, vec![tree.root(), statement, call, first, second]);
    }

    #[test]
    fn test_case_clause_statements_skip_test_expression() {
        let mut interner = Interner::new();
        let mut builder = TreeBuilder::new(&mut interner);
        let scrutinee = builder.identifier("value");
        let test = builder.literal("1");
        let body_call = builder.call_named("print", vec![]);
        let body = builder.expression_statement(body_call);
        let clause = builder.case_clause(test, vec![body]);
        let switch = builder.switch_statement(scrutinee, vec![clause]);
        let tree = builder.finish(vec![switch]);

        assert_eq!(tree.kind(clause), SyntaxKind::CaseClause);
        assert_eq!(tree.statements(clause), &[body]);
        assert!(tree.statements(switch).is_empty());
    }
}

//! Bottom-up tree construction
//!
//! Children are allocated before their parent; attaching a child to a parent
//! records the parent link. Spans are synthesized from allocation order so that
//! every node covers its children.

use crate::kind::SyntaxKind;
use crate::tree::{Node, NodeId, SyntaxTree};
use la_arena::Arena;
use ln_intern::Interner;
use ln_span::{FileId, Span};

/// Builds a [`SyntaxTree`] from leaves to root
pub struct TreeBuilder<'i> {
    nodes: Arena<Node>,
    interner: &'i mut Interner,
    file: FileId,
    offset: u32,
}

impl<'i> TreeBuilder<'i> {
    /// Start building a tree for file 0
    pub fn new(interner: &'i mut Interner) -> Self {
        Self::for_file(interner, FileId::new(0))
    }

    /// Start building a tree for a specific file
    pub fn for_file(interner: &'i mut Interner, file: FileId) -> Self {
        Self {
            nodes: Arena::new(),
            interner,
            file,
            offset: 0,
        }
    }

    /// Allocate a node and adopt `children`.
    ///
    /// Each child must not already have a parent.
    pub fn node(&mut self, kind: SyntaxKind, text: Option<&str>, children: Vec<NodeId>) -> NodeId {
        let text = text.map(|text| self.interner.intern(text));
        let leaf_len = text.map_or(0, |name| self.interner.resolve(&name).len() as u32);

        let span = children
            .iter()
            .map(|&child| self.nodes[child].span)
            .reduce(Span::cover)
            .unwrap_or_else(|| {
                let span = Span::new(self.offset, self.offset + leaf_len);
                self.offset = span.end + 1;
                span
            });

        let id = self.nodes.alloc(Node {
            kind,
            parent: None,
            children,
            text,
            span,
        });

        for index in 0..self.nodes[id].children.len() {
            let child = self.nodes[id].children[index];
            debug_assert!(
                self.nodes[child].parent.is_none(),
                "node attached to two parents"
            );
            self.nodes[child].parent = Some(id);
        }

        id
    }

    /// Wrap the top-level statements in a `SourceFile` and finish the tree
    #[must_use]
    pub fn finish(mut self, statements: Vec<NodeId>) -> SyntaxTree {
        let root = self.node(SyntaxKind::SourceFile, None, statements);
        SyntaxTree::new(self.nodes, root, self.file)
    }

    // Expressions

    /// Identifier reference
    pub fn identifier(&mut self, name: &str) -> NodeId {
        self.node(SyntaxKind::Identifier, Some(name), Vec::new())
    }

    /// Literal with its source spelling
    pub fn literal(&mut self, text: &str) -> NodeId {
        self.node(SyntaxKind::Literal, Some(text), Vec::new())
    }

    /// `callee(arguments..)`
    pub fn call(&mut self, callee: NodeId, arguments: Vec<NodeId>) -> NodeId {
        let mut children = Vec::with_capacity(arguments.len() + 1);
        children.push(callee);
        children.extend(arguments);
        self.node(SyntaxKind::CallExpression, None, children)
    }

    /// Call whose callee is a plain identifier
    pub fn call_named(&mut self, callee: &str, arguments: Vec<NodeId>) -> NodeId {
        let callee = self.identifier(callee);
        self.call(callee, arguments)
    }

    /// `left operator right`
    pub fn binary(&mut self, left: NodeId, operator: &str, right: NodeId) -> NodeId {
        self.node(SyntaxKind::BinaryExpression, Some(operator), vec![left, right])
    }

    /// `object.name`
    pub fn property_access(&mut self, object: NodeId, name: &str) -> NodeId {
        self.node(SyntaxKind::PropertyAccessExpression, Some(name), vec![object])
    }

    /// `(parameters) => body`
    pub fn arrow_function(&mut self, parameters: Vec<NodeId>, body: NodeId) -> NodeId {
        let mut children = parameters;
        children.push(body);
        self.node(SyntaxKind::ArrowFunction, None, children)
    }

    /// `function name?(parameters) { body }` in expression position
    pub fn function_expression(
        &mut self,
        name: Option<&str>,
        parameters: Vec<NodeId>,
        body: Vec<NodeId>,
    ) -> NodeId {
        let children = self.function_children(parameters, body);
        self.node(SyntaxKind::FunctionExpression, name, children)
    }

    // Declarations

    /// Named parameter
    pub fn parameter(&mut self, name: &str) -> NodeId {
        self.node(SyntaxKind::Parameter, Some(name), Vec::new())
    }

    /// Named declarator `name = initializer?`
    pub fn variable_declaration(&mut self, name: &str, initializer: Option<NodeId>) -> NodeId {
        self.node(
            SyntaxKind::VariableDeclaration,
            Some(name),
            initializer.into_iter().collect(),
        )
    }

    /// Destructuring declarator: `pattern = initializer`
    pub fn destructuring_declaration(&mut self, pattern: NodeId, initializer: NodeId) -> NodeId {
        self.node(SyntaxKind::VariableDeclaration, None, vec![pattern, initializer])
    }

    /// `{ elements }` pattern
    pub fn object_binding_pattern(&mut self, elements: Vec<NodeId>) -> NodeId {
        self.node(SyntaxKind::ObjectBindingPattern, None, elements)
    }

    /// `[elements]` pattern
    pub fn array_binding_pattern(&mut self, elements: Vec<NodeId>) -> NodeId {
        self.node(SyntaxKind::ArrayBindingPattern, None, elements)
    }

    /// Name bound by a pattern, with an optional default
    pub fn binding_element(&mut self, name: &str, default: Option<NodeId>) -> NodeId {
        self.node(
            SyntaxKind::BindingElement,
            Some(name),
            default.into_iter().collect(),
        )
    }

    /// Statement declaring `declarations` through one declaration list
    pub fn variable_statement(&mut self, declarations: Vec<NodeId>) -> NodeId {
        let list = self.node(SyntaxKind::VariableDeclarationList, None, declarations);
        self.node(SyntaxKind::VariableStatement, None, vec![list])
    }

    /// `let name = initializer;`
    pub fn let_statement(&mut self, name: &str, initializer: Option<NodeId>) -> NodeId {
        let declaration = self.variable_declaration(name, initializer);
        self.variable_statement(vec![declaration])
    }

    /// `function name(parameters) { body }`
    pub fn function_declaration(
        &mut self,
        name: &str,
        parameters: Vec<NodeId>,
        body: Vec<NodeId>,
    ) -> NodeId {
        let children = self.function_children(parameters, body);
        self.node(SyntaxKind::FunctionDeclaration, Some(name), children)
    }

    /// Class method `name(parameters) { body }`
    pub fn method_declaration(
        &mut self,
        name: &str,
        parameters: Vec<NodeId>,
        body: Vec<NodeId>,
    ) -> NodeId {
        let children = self.function_children(parameters, body);
        self.node(SyntaxKind::MethodDeclaration, Some(name), children)
    }

    /// `class name { members }`
    pub fn class_declaration(&mut self, name: &str, members: Vec<NodeId>) -> NodeId {
        self.node(SyntaxKind::ClassDeclaration, Some(name), members)
    }

    /// `namespace name { statements }`
    pub fn module_declaration(&mut self, name: &str, statements: Vec<NodeId>) -> NodeId {
        let body = self.node(SyntaxKind::ModuleBlock, None, statements);
        self.node(SyntaxKind::ModuleDeclaration, Some(name), vec![body])
    }

    // Statements

    /// `{ statements }`
    pub fn block(&mut self, statements: Vec<NodeId>) -> NodeId {
        self.node(SyntaxKind::Block, None, statements)
    }

    /// `expression;`
    pub fn expression_statement(&mut self, expression: NodeId) -> NodeId {
        self.node(SyntaxKind::ExpressionStatement, None, vec![expression])
    }

    /// `return value?;`
    pub fn return_statement(&mut self, value: Option<NodeId>) -> NodeId {
        self.node(
            SyntaxKind::ReturnStatement,
            None,
            value.into_iter().collect(),
        )
    }

    /// `if (condition) then_branch else else_branch?`
    pub fn if_statement(
        &mut self,
        condition: NodeId,
        then_branch: NodeId,
        else_branch: Option<NodeId>,
    ) -> NodeId {
        let mut children = vec![condition, then_branch];
        children.extend(else_branch);
        self.node(SyntaxKind::IfStatement, None, children)
    }

    /// `while (condition) body`
    pub fn while_statement(&mut self, condition: NodeId, body: NodeId) -> NodeId {
        self.node(SyntaxKind::WhileStatement, None, vec![condition, body])
    }

    /// `switch (scrutinee) { clauses }`
    pub fn switch_statement(&mut self, scrutinee: NodeId, clauses: Vec<NodeId>) -> NodeId {
        let case_block = self.node(SyntaxKind::CaseBlock, None, clauses);
        self.node(SyntaxKind::SwitchStatement, None, vec![scrutinee, case_block])
    }

    /// `case test: statements`
    pub fn case_clause(&mut self, test: NodeId, statements: Vec<NodeId>) -> NodeId {
        let mut children = Vec::with_capacity(statements.len() + 1);
        children.push(test);
        children.extend(statements);
        self.node(SyntaxKind::CaseClause, None, children)
    }

    /// `default: statements`
    pub fn default_clause(&mut self, statements: Vec<NodeId>) -> NodeId {
        self.node(SyntaxKind::DefaultClause, None, statements)
    }

    fn function_children(&mut self, parameters: Vec<NodeId>, body: Vec<NodeId>) -> Vec<NodeId> {
        let body = self.block(body);
        let mut children = parameters;
        children.push(body);
        children
    }
}

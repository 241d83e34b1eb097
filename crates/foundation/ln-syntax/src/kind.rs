//! Node kinds and their structural classification

use std::fmt;

/// Syntactic kind of a source node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    /// Root of a compilation unit; children are statements
    SourceFile,
    /// Brace-delimited block; children are statements
    Block,
    /// `namespace N { ... }`; single `ModuleBlock` child
    ModuleDeclaration,
    /// Body of a module declaration; children are statements
    ModuleBlock,
    /// `switch (e) { ... }`; children are the scrutinee and a `CaseBlock`
    SwitchStatement,
    /// Clause list of a switch; children are case and default clauses
    CaseBlock,
    /// `case e: ...`; first child is the test, the rest are statements
    CaseClause,
    /// `default: ...`; children are statements
    DefaultClause,
    /// `let`/`const` statement; single `VariableDeclarationList` child
    VariableStatement,
    /// Declarations introduced by one variable statement
    VariableDeclarationList,
    /// One declarator. Named declarators carry the name; destructuring ones
    /// have a binding pattern as first child. An initializer comes last.
    VariableDeclaration,
    /// `{ a, b }` binding pattern
    ObjectBindingPattern,
    /// `[a, b]` binding pattern
    ArrayBindingPattern,
    /// One name bound by a pattern, optionally followed by a default value
    BindingElement,
    /// `function f(..) { .. }`; parameters then a `Block` body
    FunctionDeclaration,
    /// `class C { .. }`; children are members
    ClassDeclaration,
    /// Class method; parameters then a `Block` body
    MethodDeclaration,
    /// Expression evaluated for its effect
    ExpressionStatement,
    /// `return e;`
    ReturnStatement,
    /// `if (c) a else b`
    IfStatement,
    /// `while (c) body`
    WhileStatement,
    /// Named function parameter with an optional default value
    Parameter,
    /// Reference to a name
    Identifier,
    /// Callee followed by arguments
    CallExpression,
    /// Left and right operands; the operator token is the node text
    BinaryExpression,
    /// `object.name`; the property name is the node text
    PropertyAccessExpression,
    /// `(..) => body`; parameters then a body
    ArrowFunction,
    /// `function name?(..) { .. }` in expression position
    FunctionExpression,
    /// Literal value; the source spelling is the node text
    Literal,
}

impl SyntaxKind {
    /// Whether nodes of this kind sit at statement level
    #[must_use]
    pub const fn is_statement(self) -> bool {
        matches!(
            self,
            Self::Block
                | Self::ModuleDeclaration
                | Self::SwitchStatement
                | Self::VariableStatement
                | Self::FunctionDeclaration
                | Self::ClassDeclaration
                | Self::ExpressionStatement
                | Self::ReturnStatement
                | Self::IfStatement
                | Self::WhileStatement
        )
    }

    /// Whether nodes of this kind own a statement list sharing one lexical scope
    #[must_use]
    pub const fn is_block_like(self) -> bool {
        matches!(
            self,
            Self::SourceFile | Self::Block | Self::ModuleBlock | Self::CaseClause | Self::DefaultClause
        )
    }

    /// Whether nodes of this kind introduce a parameter list and a body
    #[must_use]
    pub const fn is_function_like(self) -> bool {
        matches!(
            self,
            Self::FunctionDeclaration
                | Self::MethodDeclaration
                | Self::ArrowFunction
                | Self::FunctionExpression
        )
    }

    /// Whether nodes of this kind can be a symbol's value declaration
    #[must_use]
    pub const fn is_declaration(self) -> bool {
        matches!(
            self,
            Self::VariableDeclaration
                | Self::BindingElement
                | Self::FunctionDeclaration
                | Self::FunctionExpression
                | Self::ClassDeclaration
                | Self::ModuleDeclaration
                | Self::Parameter
        )
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::SourceFile => "source_file",
            Self::Block => "block",
            Self::ModuleDeclaration => "module_declaration",
            Self::ModuleBlock => "module_block",
            Self::SwitchStatement => "switch_statement",
            Self::CaseBlock => "case_block",
            Self::CaseClause => "case_clause",
            Self::DefaultClause => "default_clause",
            Self::VariableStatement => "variable_statement",
            Self::VariableDeclarationList => "variable_declaration_list",
            Self::VariableDeclaration => "variable_declaration",
            Self::ObjectBindingPattern => "object_binding_pattern",
            Self::ArrayBindingPattern => "array_binding_pattern",
            Self::BindingElement => "binding_element",
            Self::FunctionDeclaration => "function_declaration",
            Self::ClassDeclaration => "class_declaration",
            Self::MethodDeclaration => "method_declaration",
            Self::ExpressionStatement => "expression_statement",
            Self::ReturnStatement => "return_statement",
            Self::IfStatement => "if_statement",
            Self::WhileStatement => "while_statement",
            Self::Parameter => "parameter",
            Self::Identifier => "identifier",
            Self::CallExpression => "call_expression",
            Self::BinaryExpression => "binary_expression",
            Self::PropertyAccessExpression => "property_access_expression",
            Self::ArrowFunction => "arrow_function",
            Self::FunctionExpression => "function_expression",
            Self::Literal => "literal",
        };
        formatter.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_like_kinds() {
        assert!(SyntaxKind::SourceFile.is_block_like());
        assert!(SyntaxKind::CaseClause.is_block_like());
        assert!(SyntaxKind::DefaultClause.is_block_like());
        assert!(!SyntaxKind::CaseBlock.is_block_like());
        assert!(!SyntaxKind::SwitchStatement.is_block_like());
    }

    #[test]
    fn test_declarations_are_not_all_statements() {
        assert!(SyntaxKind::VariableStatement.is_statement());
        assert!(!SyntaxKind::VariableDeclaration.is_statement());
        assert!(!SyntaxKind::Parameter.is_statement());
        assert!(SyntaxKind::FunctionDeclaration.is_statement());
        assert!(!SyntaxKind::SourceFile.is_statement());
    }
}

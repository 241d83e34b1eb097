//! Source syntax tree for the lowering pipeline
//!
//! This crate models the already-parsed source program as an arena of
//! parent-linked nodes. Every node knows its kind, its parent, and its ordered
//! children; block-like nodes additionally expose their statement list.
//!
//! Trees are built bottom-up with [`TreeBuilder`], which wires parent links
//! as nodes are attached to their parents.

pub mod builder;
pub mod kind;
pub mod tree;

pub use builder::TreeBuilder;
pub use kind::SyntaxKind;
pub use tree::{Node, NodeId, Preorder, SyntaxTree};

//! Name binding for the lowering pipeline
//!
//! This crate resolves every identifier reference in a [`SyntaxTree`] to the
//! declaration it denotes and exposes the result through the
//! [`SemanticModel`] trait that the lowering passes consume.
//!
//! # Architecture
//!
//! - **Scope tree**: lexical scopes and their parent relationships
//! - **Symbol table**: one symbol per declaration, plus globals and the
//!   canonical `undefined` binding
//! - **Binder**: walks the tree, declares names, and resolves references
//! - **Resolution errors**: undefined names and duplicate definitions
//!
//! Every block-like scope declares all of its statements' bindings before any
//! reference inside it is resolved, so a reference may bind to a declaration
//! that appears later in the same block.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ln_resolve::{Binder, DEFAULT_GLOBALS};
//!
//! let result = Binder::bind(&tree, &mut interner, DEFAULT_GLOBALS);
//! if !result.errors.is_empty() {
//!     // Report resolution errors
//! }
//! // Hand result.symbols to lowering as a SemanticModel
//! ```
//!
//! [`SyntaxTree`]: ln_syntax::SyntaxTree

pub mod binder;
pub mod error;
pub mod model;
pub mod scope;
pub mod symbol;

pub use binder::{BindResult, Binder, DEFAULT_GLOBALS};
pub use error::ResolutionError;
pub use model::SemanticModel;
pub use scope::{Definition, Scope, ScopeId, ScopeKind, ScopeTree};
pub use symbol::{SymbolData, SymbolId, SymbolKind, SymbolTable};

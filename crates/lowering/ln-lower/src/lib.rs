//! Identifier lowering and declaration hoisting
//!
//! The target language has no forward declarations: a name must be declared
//! before its first use in a block, otherwise the reference silently resolves to
//! an outer or global binding. The source language allows referencing a
//! block-scoped declaration from an earlier statement of the same block.
//!
//! This crate lowers identifier references and, while doing so, records which
//! declarations must be pre-declared ("hoisted") in front of which statement.
//!
//! # Architecture
//!
//! - [`locate`]: ancestor walks over the source tree (statement and block locators)
//! - [`hoist`]: the hoist planner, deciding once per symbol
//! - [`macros`]: identifier macros that replace ordinary lowering for builtins
//! - [`identifier`]: the entry point tying the above together
//! - [`state`]: per-unit transform state owning the hoist bookkeeping
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut state = TransformState::new(&tree, &symbols, &interner, &macros, &options);
//! for node in tree.descendants(tree.root()) {
//!     if tree.kind(node) == SyntaxKind::Identifier {
//!         let expression = transform_identifier(&mut state, node)?;
//!     }
//! }
//! let plan = state.finish();
//! ```

pub mod error;
pub mod hoist;
pub mod identifier;
pub mod locate;
pub mod macros;
pub mod state;

pub use error::LowerError;
pub use hoist::{HoistOutcome, HoistPlan, check_hoist};
pub use identifier::{transform_identifier, transform_identifier_defined};
pub use macros::{IdentifierMacro, MacroRegistry};
pub use state::{TransformOptions, TransformState};

//! Error types for lowering

use ln_span::FileSpan;
use ln_syntax::SyntaxKind;

/// Errors raised while lowering.
///
/// Both variants mean the binder and the lowering pass disagree about the tree.
/// They are internal compiler errors and abort the unit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LowerError {
    /// A reference did not resolve to any symbol
    #[error("identifier `{name}` at {span} did not resolve to a symbol")]
    UnresolvedIdentifier {
        /// Spelling of the reference
        name: String,
        /// Where the reference appears
        span: FileSpan,
    },

    /// An identifier transform was asked to lower some other node
    #[error("expected an identifier at {span}, found {kind}")]
    NotAnIdentifier {
        /// Kind of the node that was passed
        kind: SyntaxKind,
        /// Where the node appears
        span: FileSpan,
    },
}

//! Driver errors

use ln_lower::LowerError;
use ln_resolve::ResolutionError;

/// Why a unit failed to compile
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// Binding reported errors, so the unit is not lowered
    #[error("name resolution failed with {} error(s)", .0.len())]
    Resolution(Vec<ResolutionError>),

    /// Lowering hit a state binding should have ruled out
    #[error("internal compiler error: {0}")]
    Internal(#[from] LowerError),
}

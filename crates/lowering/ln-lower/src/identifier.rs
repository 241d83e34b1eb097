//! Identifier lowering entry point

use crate::error::LowerError;
use crate::hoist::check_hoist;
use crate::state::TransformState;
use ln_lua::{self as lua, Expression};
use ln_syntax::NodeId;
use tracing::trace;

/// Lower an identifier without any semantic checks: emit its spelling as is
///
/// # Errors
///
/// Returns `LowerError::NotAnIdentifier` if `node` is not a named identifier.
pub fn transform_identifier_defined(state: &TransformState<'_>, node: NodeId) -> Result<Expression, LowerError> {
    Ok(lua::identifier(state.identifier_text(node)?))
}

/// Lower an identifier reference.
///
/// `undefined` becomes `nil`, macro-backed symbols are lowered by their macro,
/// and everything else becomes a plain identifier after the hoist planner has
/// seen the reference.
///
/// # Errors
///
/// Returns `LowerError::UnresolvedIdentifier` if binding did not resolve the
/// reference. That can only happen when binding failed and the caller lowered
/// the unit anyway, so it is reported as an internal compiler error.
pub fn transform_identifier(state: &mut TransformState<'_>, node: NodeId) -> Result<Expression, LowerError> {
    let Some(symbol) = state.semantics.symbol_at_location(node) else {
        return Err(LowerError::UnresolvedIdentifier {
            name: state.identifier_text(node)?.to_string(),
            span: state.tree.span(node),
        });
    };

    if state.semantics.is_undefined_symbol(symbol) {
        return Ok(lua::nil());
    }

    if let Some(expand) = state.macros.identifier_macro(symbol) {
        return Ok(expand(state, node));
    }

    let outcome = check_hoist(state, node, symbol);
    trace!(reference = ?node, ?symbol, ?outcome, "checked hoist");

    transform_identifier_defined(state, node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hoist::HoistPlan;
    use crate::macros::MacroRegistry;
    use crate::state::TransformOptions;
    use ln_intern::Interner;
    use ln_resolve::{Binder, DEFAULT_GLOBALS, SemanticModel};
    use ln_syntax::{SyntaxKind, TreeBuilder};

    fn local_marker(_state: &mut TransformState<'_>, _node: NodeId) -> Expression {
        lua::string("from macro")
    }

    #[test]
    fn test_plain_reference_keeps_spelling() {
        let mut interner = Interner::new();
        let mut builder = TreeBuilder::new(&mut interner);
        let one = builder.literal("1");
        let declaration = builder.let_statement("value", Some(one));
        let reference = builder.identifier("value");
        let use_statement = builder.expression_statement(reference);
        let tree = builder.finish(vec![declaration, use_statement]);
        let symbols = Binder::bind(&tree, &mut interner, DEFAULT_GLOBALS).symbols;

        let macros = MacroRegistry::new();
        let options = TransformOptions::default();
        let mut state = TransformState::new(&tree, &symbols, &interner, &macros, &options);

        assert_eq!(transform_identifier(&mut state, reference), Ok(lua::identifier("value")));
        assert_eq!(state.finish(), HoistPlan::default());
    }

    #[test]
    fn test_undefined_is_nil_and_never_hoisted() {
        let mut interner = Interner::new();
        let mut builder = TreeBuilder::new(&mut interner);
        let reference = builder.identifier("undefined");
        let statement = builder.expression_statement(reference);
        let tree = builder.finish(vec![statement]);
        let symbols = Binder::bind(&tree, &mut interner, DEFAULT_GLOBALS).symbols;

        let macros = MacroRegistry::new();
        let options = TransformOptions::default();
        let mut state = TransformState::new(&tree, &symbols, &interner, &macros, &options);

        assert_eq!(transform_identifier(&mut state, reference), Ok(lua::nil()));
        let symbol = symbols.symbol_at_location(reference).unwrap();
        assert_eq!(state.is_hoisted(symbol), None);
        assert!(state.finish().is_empty());
    }

    #[test]
    fn test_macro_bypasses_hoisting() {
        let mut interner = Interner::new();
        let mut builder = TreeBuilder::new(&mut interner);
        let reference = builder.identifier("later");
        let use_statement = builder.expression_statement(reference);
        let declaration = builder.let_statement("later", None);
        let tree = builder.finish(vec![use_statement, declaration]);
        let symbols = Binder::bind(&tree, &mut interner, DEFAULT_GLOBALS).symbols;
        let symbol = symbols.symbol_at_location(reference).unwrap();

        let mut macros = MacroRegistry::new();
        assert!(macros.register_identifier_macro(symbol, local_marker).is_none());
        let options = TransformOptions::default();
        let mut state = TransformState::new(&tree, &symbols, &interner, &macros, &options);

        assert_eq!(transform_identifier(&mut state, reference), Ok(lua::string("from macro")));
        assert_eq!(state.is_hoisted(symbol), None);
        assert!(state.hoists_for(use_statement).is_empty());
    }

    #[test]
    fn test_builtin_macros_use_options() {
        let mut interner = Interner::new();
        let mut builder = TreeBuilder::new(&mut interner);
        let promise = builder.identifier("Promise");
        let version = builder.identifier("PKG_VERSION");
        let call = builder.call(promise, vec![version]);
        let statement = builder.expression_statement(call);
        let tree = builder.finish(vec![statement]);
        let symbols = Binder::bind(&tree, &mut interner, DEFAULT_GLOBALS).symbols;

        let macros = MacroRegistry::with_builtins(&symbols, &interner);
        let options = TransformOptions {
            runtime_library: "Runtime".to_string(),
            package_version: Some("2.1.0".to_string()),
        };
        let mut state = TransformState::new(&tree, &symbols, &interner, &macros, &options);

        let lowered = transform_identifier(&mut state, promise).unwrap();
        assert_eq!(lowered.to_string(), "Runtime.Promise");
        assert_eq!(transform_identifier(&mut state, version), Ok(lua::string("2.1.0")));
    }

    #[test]
    fn test_unresolved_reference_is_internal_error() {
        let mut interner = Interner::new();
        let mut builder = TreeBuilder::new(&mut interner);
        let reference = builder.identifier("missing");
        let statement = builder.expression_statement(reference);
        let tree = builder.finish(vec![statement]);
        let result = Binder::bind(&tree, &mut interner, DEFAULT_GLOBALS);
        assert_eq!(result.errors.len(), 1);

        let macros = MacroRegistry::new();
        let options = TransformOptions::default();
        let mut state = TransformState::new(&tree, &result.symbols, &interner, &macros, &options);

        let error = transform_identifier(&mut state, reference).unwrap_err();
        assert_eq!(
            error,
            LowerError::UnresolvedIdentifier {
                name: "missing".to_string(),
                span: tree.span(reference),
            }
        );
    }

    #[test]
    fn test_non_identifier_is_rejected() {
        let mut interner = Interner::new();
        let mut builder = TreeBuilder::new(&mut interner);
        let literal = builder.literal("1");
        let statement = builder.expression_statement(literal);
        let tree = builder.finish(vec![statement]);
        let symbols = Binder::bind(&tree, &mut interner, DEFAULT_GLOBALS).symbols;

        let macros = MacroRegistry::new();
        let options = TransformOptions::default();
        let state = TransformState::new(&tree, &symbols, &interner, &macros, &options);

        let error = transform_identifier_defined(&state, literal).unwrap_err();
        assert!(matches!(
            error,
            LowerError::NotAnIdentifier { kind: SyntaxKind::Literal, .. }
        ));
    }
}

//! Compiling one unit: bind, then lower every identifier reference

use crate::config::CompilerOptions;
use crate::error::CompileError;
use indexmap::IndexMap;
use ln_intern::Interner;
use ln_lower::{HoistPlan, MacroRegistry, TransformState, transform_identifier};
use ln_lua::Expression;
use ln_resolve::{Binder, DEFAULT_GLOBALS};
use ln_syntax::{NodeId, SyntaxKind, SyntaxTree};
use tracing::debug;

/// Everything lowering produced for one unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitOutput {
    /// Lowered expression for every identifier reference, in source order
    pub expressions: IndexMap<NodeId, Expression>,
    /// Declarations to emit ahead of their statements
    pub hoists: HoistPlan,
}

impl UnitOutput {
    /// Lowered form of the reference at `node`
    #[must_use]
    pub fn expression(&self, node: NodeId) -> Option<&Expression> {
        self.expressions.get(&node)
    }

    /// Render the hoist plan, one statement per line:
    /// `<statement kind> <span>: <names>`
    #[must_use]
    pub fn render_hoists(&self, tree: &SyntaxTree, interner: &Interner) -> String {
        self.hoists
            .iter()
            .map(|(statement, references)| {
                let names: Vec<&str> = references
                    .iter()
                    .filter_map(|&reference| tree.text(reference))
                    .map(|name| interner.resolve(&name))
                    .collect();
                format!(
                    "{} {}: {}\n",
                    tree.kind(statement),
                    tree.span(statement).span,
                    names.join(", ")
                )
            })
            .collect()
    }
}

/// Bind `tree` and lower every identifier reference in it.
///
/// # Errors
///
/// Returns `CompileError::Resolution` if binding failed and
/// `CompileError::Internal` if lowering met an identifier binding left
/// unresolved.
pub fn compile_unit(
    tree: &SyntaxTree,
    interner: &mut Interner,
    options: &CompilerOptions,
) -> Result<UnitOutput, CompileError> {
    let bound = Binder::bind(tree, interner, DEFAULT_GLOBALS);
    if !bound.errors.is_empty() {
        return Err(CompileError::Resolution(bound.errors));
    }
    let interner: &Interner = interner;

    let macros = if options.builtin_macros {
        MacroRegistry::with_builtins(&bound.symbols, interner)
    } else {
        MacroRegistry::new()
    };
    let transform_options = options.to_transform_options();
    let mut state = TransformState::new(tree, &bound.symbols, interner, &macros, &transform_options);

    let mut expressions = IndexMap::new();
    for node in tree.descendants(tree.root()) {
        if tree.kind(node) != SyntaxKind::Identifier {
            continue;
        }
        let expression = transform_identifier(&mut state, node)?;
        expressions.insert(node, expression);
    }

    let hoists = state.finish();
    debug!(
        file = %tree.file(),
        macros = macros.len(),
        references = expressions.len(),
        hoisted = hoists.reference_count(),
        statements = hoists.len(),
        "lowered unit"
    );

    Ok(UnitOutput { expressions, hoists })
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;
    use ln_lua as lua;
    use ln_syntax::TreeBuilder;

    #[test]
    fn test_forward_reference_is_hoisted() {
        let mut interner = Interner::new();
        let mut builder = TreeBuilder::new(&mut interner);
        let reference = builder.identifier("later");
        let call = builder.call_named("print", vec![reference]);
        let use_statement = builder.expression_statement(call);
        let one = builder.literal("1");
        let declaration = builder.let_statement("later", Some(one));
        let tree = builder.finish(vec![use_statement, declaration]);

        let output = compile_unit(&tree, &mut interner, &CompilerOptions::default()).unwrap();

        assert_eq!(output.expression(reference), Some(&lua::identifier("later")));
        assert_eq!(output.hoists.hoists_for(use_statement), &[reference]);
        assert!(output.hoists.hoists_for(declaration).is_empty());
        expect![[r#"
            expression_statement 0..11: later
        "#]]
        .assert_eq(&output.render_hoists(&tree, &interner));
    }

    #[test]
    fn test_builtins_can_be_disabled() {
        let mut interner = Interner::new();
        let mut builder = TreeBuilder::new(&mut interner);
        let promise = builder.identifier("Promise");
        let statement = builder.expression_statement(promise);
        let tree = builder.finish(vec![statement]);

        let output = compile_unit(&tree, &mut interner, &CompilerOptions::default()).unwrap();
        assert_eq!(output.expression(promise).map(ToString::to_string).as_deref(), Some("TS.Promise"));

        let options = CompilerOptions {
            builtin_macros: false,
            ..CompilerOptions::default()
        };
        let output = compile_unit(&tree, &mut interner, &options).unwrap();
        assert_eq!(output.expression(promise), Some(&lua::identifier("Promise")));
    }

    #[test]
    fn test_resolution_errors_stop_lowering() {
        let mut interner = Interner::new();
        let mut builder = TreeBuilder::new(&mut interner);
        let reference = builder.identifier("prnt");
        let statement = builder.expression_statement(reference);
        let tree = builder.finish(vec![statement]);

        let error = compile_unit(&tree, &mut interner, &CompilerOptions::default()).unwrap_err();
        assert!(matches!(
            &error,
            CompileError::Resolution(errors)
                if errors.len() == 1 && interner.resolve(&errors[0].name()) == "prnt"
        ));
    }
}

//! Error types for name resolution

use ln_intern::{Interner, Name};
use ln_span::FileSpan;
use rustc_hash::FxHashSet;

/// Errors that occur during name resolution
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    /// Name is not declared in any visible scope
    #[error("undefined name at {use_site}")]
    Undefined {
        /// The name that was not found
        name: Name,
        /// Where the name was used
        use_site: FileSpan,
        /// Similar visible names, closest first
        suggestions: Vec<Name>,
    },

    /// Name is declared twice in the same scope
    #[error("duplicate definition at {second} (first defined at {first})")]
    DuplicateDefinition {
        /// The redeclared name
        name: Name,
        /// First declaration
        first: FileSpan,
        /// Second declaration
        second: FileSpan,
    },
}

impl ResolutionError {
    /// The name the error is about
    #[must_use]
    pub fn name(&self) -> Name {
        match self {
            Self::Undefined { name, .. } | Self::DuplicateDefinition { name, .. } => *name,
        }
    }

    /// Pick up to three candidates within edit distance 3 of `name`
    #[must_use]
    pub fn compute_suggestions(name: Name, interner: &Interner, available_names: &[Name]) -> Vec<Name> {
        let target = interner.resolve(&name);
        // Shadowed names appear once per scope; keep the innermost occurrence
        let mut seen = FxHashSet::default();
        let mut suggestions: Vec<(Name, usize)> = available_names
            .iter()
            .filter(|&&candidate| candidate != name && seen.insert(candidate))
            .map(|&candidate| (candidate, edit_distance(target, interner.resolve(&candidate))))
            .filter(|&(_, distance)| distance <= 3)
            .collect();

        // Stable sort keeps scope order (innermost first) among equal distances
        suggestions.sort_by_key(|&(_, distance)| distance);
        suggestions.into_iter().take(3).map(|(candidate, _)| candidate).collect()
    }
}

/// Levenshtein distance over chars, two rows at a time
fn edit_distance(source: &str, target: &str) -> usize {
    let target: Vec<char> = target.chars().collect();
    let mut previous: Vec<usize> = (0..=target.len()).collect();
    let mut current = vec![0; target.len() + 1];

    for (row, source_char) in source.chars().enumerate() {
        current[0] = row + 1;
        for (column, &target_char) in target.iter().enumerate() {
            let substitution = previous[column] + usize::from(source_char != target_char);
            current[column + 1] = substitution
                .min(previous[column + 1] + 1)
                .min(current[column] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[target.len()]
}

//! String interning for identifier names

pub use lasso::Spur as Name;
use lasso::Rodeo;

/// Interner for identifier and declaration names.
///
/// Lowering is single threaded, so the interner is a plain `Rodeo` owned by
/// whoever builds the syntax tree and lent out by shared reference afterwards.
#[derive(Debug, Default)]
pub struct Interner {
    inner: Rodeo,
}

impl Interner {
    /// Empty interner
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `text`, returning the existing name if it was seen before
    pub fn intern(&mut self, text: &str) -> Name {
        self.inner.get_or_intern(text)
    }

    /// Look up an already interned name without inserting it
    pub fn get(&self, text: &str) -> Option<Name> {
        self.inner.get(text)
    }

    /// Spelling of an interned name
    pub fn resolve(&self, name: &Name) -> &str {
        self.inner.resolve(name)
    }
}

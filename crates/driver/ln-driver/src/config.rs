//! Compiler options loaded from TOML

use anyhow::{Context, Result};
use ln_lower::TransformOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options for compiling a unit
///
/// Every field has a default, so an empty document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerOptions {
    /// Name of the runtime library table in emitted code
    pub runtime_library: String,

    /// Value substituted for `PKG_VERSION`
    pub package_version: Option<String>,

    /// Register the builtin identifier macros (`Promise`, `PKG_VERSION`)
    pub builtin_macros: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            runtime_library: "TS".to_string(),
            package_version: None,
            builtin_macros: true,
        }
    }
}

impl CompilerOptions {
    /// Parse options from a TOML document
    ///
    /// # Errors
    ///
    /// Fails if the document is not valid TOML or has unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse compiler options")
    }

    /// Load options from a TOML file
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read compiler options: {}", path.display()))?;
        Self::from_toml_str(&source)
            .with_context(|| format!("Failed to load compiler options: {}", path.display()))
    }

    /// The subset of options the lowering pass reads
    #[must_use]
    pub fn to_transform_options(&self) -> TransformOptions {
        TransformOptions {
            runtime_library: self.runtime_library.clone(),
            package_version: self.package_version.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let options = CompilerOptions::from_toml_str("").unwrap();
        assert_eq!(options, CompilerOptions::default());
        assert_eq!(options.runtime_library, "TS");
        assert!(options.builtin_macros);
    }

    #[test]
    fn test_partial_document() {
        let options = CompilerOptions::from_toml_str(
            r#"
            package_version = "1.4.0"
            builtin_macros = false
            "#,
        )
        .unwrap();
        assert_eq!(options.runtime_library, "TS");
        assert_eq!(options.package_version.as_deref(), Some("1.4.0"));
        assert!(!options.builtin_macros);

        let transform = options.to_transform_options();
        assert_eq!(transform.package_version.as_deref(), Some("1.4.0"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let error = CompilerOptions::from_toml_str("runtime = \"RT\"").unwrap_err();
        assert!(error.to_string().contains("compiler options"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lune.toml");
        std::fs::write(&path, "runtime_library = \"RT\"\n").unwrap();

        let options = CompilerOptions::load(&path).unwrap();
        assert_eq!(options.runtime_library, "RT");

        let missing = CompilerOptions::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(missing.to_string().contains("missing.toml"));
    }
}

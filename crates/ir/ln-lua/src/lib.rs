//! Target (Lua) syntax tree
//!
//! Only the expression forms produced while lowering identifiers live here.
//! Nodes are plain immutable data; statement emission and pretty printing of
//! whole chunks belong to later stages.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

/// A Lua identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    /// Name exactly as spelled in the source
    pub name: String,
}

/// A Lua expression
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expression {
    /// `nil`
    Nil,
    /// Bare name
    Identifier(Identifier),
    /// String literal
    String(String),
    /// `expression.name`
    PropertyAccess {
        /// Object being indexed
        expression: Box<Expression>,
        /// Field name
        name: String,
    },
}

impl Expression {
    /// Whether this is the `nil` literal
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }
}

/// `nil`
#[must_use]
pub fn nil() -> Expression {
    Expression::Nil
}

/// Identifier carrying `name` unchanged.
///
/// Sanitizing reserved words and renaming happen in a later pass.
#[must_use]
pub fn identifier(name: impl Into<String>) -> Expression {
    let name = name.into();
    debug_assert!(!name.is_empty(), "identifier names are never empty");
    Expression::Identifier(Identifier { name })
}

/// String literal holding `value`
#[must_use]
pub fn string(value: impl Into<String>) -> Expression {
    Expression::String(value.into())
}

/// `expression.name`
#[must_use]
pub fn property_access(expression: Expression, name: impl Into<String>) -> Expression {
    Expression::PropertyAccess {
        expression: Box::new(expression),
        name: name.into(),
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(formatter, "nil"),
            Self::Identifier(identifier) => write!(formatter, "{}", identifier.name),
            Self::String(value) => write_string_literal(formatter, value),
            Self::PropertyAccess { expression, name } => write!(formatter, "{expression}.{name}"),
        }
    }
}

/// Double-quoted Lua string literal.
///
/// Control characters use decimal escapes, padded to three digits so a
/// following digit is never absorbed. Everything else is written as UTF-8.
fn write_string_literal(formatter: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    formatter.write_char('"')?;
    for character in value.chars() {
        match character {
            '"' => formatter.write_str("\\\"")?,
            '\\' => formatter.write_str("\\\\")?,
            '\n' => formatter.write_str("\\n")?,
            '\r' => formatter.write_str("\\r")?,
            '\t' => formatter.write_str("\\t")?,
            control if control.is_ascii_control() => write!(formatter, "\\{:03}", u32::from(control))?,
            other => formatter.write_char(other)?,
        }
    }
    formatter.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_keeps_spelling() {
        let expression = identifier("local");
        assert_eq!(expression, Expression::Identifier(Identifier { name: "local".to_string() }));
        assert_eq!(expression.to_string(), "local");
    }

    #[test]
    fn test_display_nested_access() {
        let expression = property_access(identifier("TS"), "Promise");
        assert_eq!(expression.to_string(), "TS.Promise");
        assert_eq!(string("1.0.0").to_string(), "\"1.0.0\"");
        assert!(nil().is_nil());
    }

    #[test]
    fn test_string_uses_lua_escapes() {
        assert_eq!(string("say \"hi\"\n").to_string(), r#""say \"hi\"\n""#);
        assert_eq!(string("a\\b").to_string(), r#""a\\b""#);
        assert_eq!(string("\u{1}2").to_string(), r#""\0012""#);
        assert_eq!(string("\u{7f}").to_string(), r#""\127""#);
        assert_eq!(string("héllo").to_string(), "\"héllo\"");
    }
}

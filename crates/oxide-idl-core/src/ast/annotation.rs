//! Annotations and literal arguments.

use core::fmt;

use crate::lexer::Span;

/// Annotation name overriding a declaration's physical table.
pub const TABLE_ANNOTATION: &str = "table";
/// Annotation name overriding a declaration's physical sequence.
pub const SEQUENCE_ANNOTATION: &str = "sequence";
/// Annotation name overriding a field's physical column.
pub const COLUMN_ANNOTATION: &str = "column";

/// A literal annotation argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Integer literal.
    Integer(i64),
    /// Floating-point literal.
    Float(f64),
    /// String literal.
    String(String),
    /// Boolean literal.
    Boolean(bool),
    /// `null`.
    Null,
    /// A bare identifier, e.g. `@on_delete(cascade)`.
    Identifier(String),
}

impl Literal {
    /// Returns the string payload for string and identifier literals.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Identifier(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer payload.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
            Self::Identifier(name) => f.write_str(name),
        }
    }
}

/// An `@name(args...)` annotation attached to a declaration or field.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Annotation name without the `@`.
    pub name: String,
    /// Arguments in source order.
    pub args: Vec<Literal>,
    /// Location of the `@`.
    pub span: Span,
}

impl Annotation {
    /// Returns the first argument as a string, if it is one.
    #[must_use]
    pub fn first_str(&self) -> Option<&str> {
        self.args.first().and_then(Literal::as_str)
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if !self.args.is_empty() {
            let args: Vec<String> = self.args.iter().map(ToString::to_string).collect();
            write!(f, "({})", args.join(", "))?;
        }
        Ok(())
    }
}

/// Finds the last annotation with the given name.
///
/// Later annotations win, so `@table("a") @table("b")` resolves to `b`.
#[must_use]
pub fn find_annotation<'a>(annotations: &'a [Annotation], name: &str) -> Option<&'a Annotation> {
    annotations.iter().rev().find(|a| a.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation(name: &str, args: Vec<Literal>) -> Annotation {
        Annotation {
            name: String::from(name),
            args,
            span: Span::default(),
        }
    }

    #[test]
    fn test_display() {
        let a = annotation(
            "default",
            vec![Literal::String(String::from("x")), Literal::Integer(3)],
        );
        assert_eq!(a.to_string(), "@default(\"x\", 3)");
        assert_eq!(annotation("id", vec![]).to_string(), "@id");
    }

    #[test]
    fn test_find_annotation_last_wins() {
        let list = vec![
            annotation("table", vec![Literal::String(String::from("a"))]),
            annotation("id", vec![]),
            annotation("table", vec![Literal::String(String::from("b"))]),
        ];
        let found = find_annotation(&list, TABLE_ANNOTATION).unwrap();
        assert_eq!(found.first_str(), Some("b"));
        assert!(find_annotation(&list, SEQUENCE_ANNOTATION).is_none());
    }
}

//! Field type references.

use core::fmt;

use crate::lexer::Span;

/// A declared field type, as written in source.
///
/// Type names are not resolved here: `Long`, `OrderLine` and `Whatever` are
/// all accepted and left to a later semantic stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// The type name (`String`, `List`, `OrderLine`, ...).
    pub name: String,
    /// Generic arguments (`List<String>` has one).
    pub args: Vec<TypeRef>,
    /// True for an array type (`Tag[]`).
    pub array: bool,
    /// True for an optional type (`String?`).
    pub optional: bool,
    /// Location of the type name.
    pub span: Span,
}

impl TypeRef {
    /// Creates a plain type reference without arguments or suffixes.
    #[must_use]
    pub fn named(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            array: false,
            optional: false,
            span,
        }
    }

    /// Returns true if the type has generic arguments.
    #[must_use]
    pub fn is_generic(&self) -> bool {
        !self.args.is_empty()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.args.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_str(">")?;
        }
        if self.array {
            f.write_str("[]")?;
        }
        if self.optional {
            f.write_str("?")?;
        }
        Ok(())
    }
}

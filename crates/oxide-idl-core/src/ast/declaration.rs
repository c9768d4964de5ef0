//! Declaration AST types.

use super::annotation::{
    find_annotation, Annotation, COLUMN_ANNOTATION, SEQUENCE_ANNOTATION, TABLE_ANNOTATION,
};
use super::types::TypeRef;
use crate::lexer::Span;

/// The ordered result of parsing one source text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompilationUnit {
    /// Top-level declarations in source order.
    pub declarations: Vec<Declaration>,
}

impl CompilationUnit {
    /// Creates a compilation unit from declarations.
    #[must_use]
    pub const fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    /// Returns the number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns true if there are no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Iterates over declarations in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    /// Finds the first declaration with the given logical name.
    #[must_use]
    pub fn find(&self, logical_name: &str) -> Option<&Declaration> {
        self.declarations
            .iter()
            .find(|d| d.logical_name() == logical_name)
    }
}

impl<'a> IntoIterator for &'a CompilationUnit {
    type Item = &'a Declaration;
    type IntoIter = core::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}

/// Kind discriminator of a declaration, the keyword that introduced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// `model`: a persistent entity with its own table.
    Model,
    /// `embeddable`: a value type stored inside its owner's table.
    Embeddable,
}

impl DeclarationKind {
    /// Returns the keyword for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Embeddable => "embeddable",
        }
    }

    /// Returns true if declarations of this kind map to their own table.
    #[must_use]
    pub const fn has_table(&self) -> bool {
        matches!(self, Self::Model)
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// `model Name { ... }`
    Model(ModelDeclaration),
    /// `embeddable Name { ... }`
    Embeddable(ModelDeclaration),
}

impl Declaration {
    /// Returns the kind discriminator.
    #[must_use]
    pub const fn kind(&self) -> DeclarationKind {
        match self {
            Self::Model(_) => DeclarationKind::Model,
            Self::Embeddable(_) => DeclarationKind::Embeddable,
        }
    }

    /// Returns the declaration body shared by all kinds.
    #[must_use]
    pub const fn body(&self) -> &ModelDeclaration {
        match self {
            Self::Model(body) | Self::Embeddable(body) => body,
        }
    }

    /// Returns the structural identifier written after the kind keyword.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.body().name
    }

    /// Returns the logical name (never empty).
    #[must_use]
    pub fn logical_name(&self) -> &str {
        &self.body().logical_name
    }

    /// Returns the field declarations in source order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDeclaration] {
        &self.body().fields
    }

    /// Returns the declaration annotations in source order.
    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        &self.body().annotations
    }

    /// Returns the `@table("...")` override, if any.
    #[must_use]
    pub fn table_override(&self) -> Option<&str> {
        find_annotation(self.annotations(), TABLE_ANNOTATION).and_then(Annotation::first_str)
    }

    /// Returns the `@sequence("...")` override, if any.
    #[must_use]
    pub fn sequence_override(&self) -> Option<&str> {
        find_annotation(self.annotations(), SEQUENCE_ANNOTATION).and_then(Annotation::first_str)
    }

    /// Returns the location of the kind keyword.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.body().span
    }
}

/// Body of a model-like declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDeclaration {
    /// Structural identifier (`Order` in `model Order as "sales_order"`).
    pub name: String,
    /// Logical name: the `as` clause when present, otherwise `name`.
    pub logical_name: String,
    /// Declaration annotations.
    pub annotations: Vec<Annotation>,
    /// Fields in source order. Duplicates are kept as written.
    pub fields: Vec<FieldDeclaration>,
    /// Location of the kind keyword.
    pub span: Span,
}

/// A field inside a declaration body.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDeclaration {
    /// Field name.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
    /// Annotations written before the name and after the type, in order.
    pub annotations: Vec<Annotation>,
    /// Location of the field name.
    pub span: Span,
}

impl FieldDeclaration {
    /// Returns true if the field carries an annotation with this name.
    #[must_use]
    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotations.iter().any(|a| a.name == name)
    }

    /// Returns the annotation with this name, if present (last one wins).
    #[must_use]
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        find_annotation(&self.annotations, name)
    }

    /// Returns the `@column("...")` override, if any.
    #[must_use]
    pub fn column_override(&self) -> Option<&str> {
        self.annotation(COLUMN_ANNOTATION)
            .and_then(Annotation::first_str)
    }
}

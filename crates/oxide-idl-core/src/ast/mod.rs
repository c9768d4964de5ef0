//! Abstract Syntax Tree (AST) types for model definitions.

mod annotation;
mod declaration;
mod types;

pub use annotation::{
    find_annotation, Annotation, Literal, COLUMN_ANNOTATION, SEQUENCE_ANNOTATION,
    TABLE_ANNOTATION,
};
pub use declaration::{
    CompilationUnit, Declaration, DeclarationKind, FieldDeclaration, ModelDeclaration,
};
pub use types::TypeRef;

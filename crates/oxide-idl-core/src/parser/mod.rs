//! IDL Parser
//!
//! A hand-written recursive descent parser producing a [`CompilationUnit`].

mod error;
mod parser;

pub use error::ParseError;
pub use parser::{Parser, MAX_TYPE_DEPTH};

use crate::ast::CompilationUnit;

/// Parses a complete model definition source.
///
/// # Errors
///
/// Returns a `ParseError` describing the first lexical or grammar violation.
pub fn parse(source: &str) -> Result<CompilationUnit, ParseError> {
    Parser::new(source).parse()
}

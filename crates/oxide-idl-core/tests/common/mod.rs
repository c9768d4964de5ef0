#![allow(dead_code)]

use oxide_idl_core::ast::{CompilationUnit, Declaration, FieldDeclaration};
use oxide_idl_core::{parse, ParseError};

pub fn parse_ok(source: &str) -> CompilationUnit {
    parse(source).unwrap_or_else(|e| panic!("Failed to parse: {source}\nError: {e}"))
}

pub fn parse_err(source: &str) -> ParseError {
    parse(source).expect_err(&format!("Expected parse error for: {source}"))
}

pub fn single(source: &str) -> Declaration {
    let unit = parse_ok(source);
    assert_eq!(unit.len(), 1, "expected exactly one declaration in: {source}");
    unit.declarations.into_iter().next().unwrap()
}

pub fn field<'a>(declaration: &'a Declaration, name: &str) -> &'a FieldDeclaration {
    declaration
        .fields()
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("no field `{name}` in {}", declaration.name()))
}

pub fn position(err: &ParseError) -> (usize, usize) {
    (err.line(), err.column())
}

//! Tests for parser error cases.

mod common;
use common::*;

use oxide_idl_core::parser::MAX_TYPE_DEPTH;

#[test]
fn error_missing_type_token() {
    let err = parse_err("model Foo { name: }");
    assert_eq!(err.expected, "type");
    assert_eq!(err.found, "`}`");
    assert_eq!(position(&err), (1, 19));
}

#[test]
fn error_position_of_invalid_character() {
    let source = "model Foo {\n  id: Long;\n    %name: String;\n}";
    let err = parse_err(source);
    assert!(err.lex.is_some());
    assert_eq!(position(&err), (3, 5));
}

#[test]
fn error_position_of_unterminated_literal() {
    let source = "model Foo as\n\n    \"never closed {\n}";
    let err = parse_err(source);
    assert_eq!(position(&err), (3, 5));
    assert_eq!(err.found, "unterminated string literal");
}

#[test]
fn error_position_of_unexpected_token() {
    let source = "model Foo {\n  id: Long;\n    : String\n}";
    let err = parse_err(source);
    assert_eq!(err.found, "`:`");
    assert_eq!(position(&err), (3, 5));
}

#[test]
fn error_missing_declaration_name() {
    let err = parse_err("model { id: Long }");
    assert_eq!(err.expected, "declaration name");
    assert_eq!(position(&err), (1, 7));
}

#[test]
fn error_missing_body() {
    let err = parse_err("model Foo");
    assert_eq!(err.expected, "`{`");
    assert_eq!(err.found, "end of input");
}

#[test]
fn error_missing_colon() {
    let err = parse_err("model Foo { id Long }");
    assert_eq!(err.expected, "`:`");
    assert_eq!(position(&err), (1, 16));
}

#[test]
fn error_name_clause_requires_string() {
    let err = parse_err("model Foo as Bar {}");
    assert_eq!(err.expected, "logical name string");
}

#[test]
fn error_unclosed_generic() {
    let err = parse_err("model Foo { tags: List<String }");
    assert_eq!(err.expected, "`>` or `,`");
}

#[test]
fn error_unclosed_annotation_args() {
    let err = parse_err("model Foo { id: Long @default(1 }");
    assert_eq!(err.expected, "`)` or `,`");
}

#[test]
fn error_keyword_is_not_an_identifier() {
    let err = parse_err("model model {}");
    assert_eq!(err.found, "keyword `model`");
}

#[test]
fn error_trailing_garbage_after_last_declaration() {
    let err = parse_err("model A { id: Long }\n\n  junk");
    assert_eq!(err.expected, "declaration");
    assert_eq!(err.found, "identifier `junk`");
    assert_eq!(position(&err), (3, 3));
}

#[test]
fn error_message_is_displayable() {
    let err = parse_err("model Foo { name: }");
    assert_eq!(err.to_string(), "expected type, found `}` at 1:19");
}

fn nested_list_field(levels: usize) -> String {
    format!(
        "model A {{ x: {}T{} }}",
        "L<".repeat(levels),
        ">".repeat(levels)
    )
}

#[test]
fn nesting_up_to_the_limit_is_accepted() {
    let declaration = single(&nested_list_field(MAX_TYPE_DEPTH));
    let mut ty = &field(&declaration, "x").ty;
    let mut depth = 0;
    while let Some(inner) = ty.args.first() {
        ty = inner;
        depth += 1;
    }
    assert_eq!(depth, MAX_TYPE_DEPTH);
    assert_eq!(ty.name, "T");
}

#[test]
fn error_type_nesting_too_deep() {
    let err = parse_err(&nested_list_field(MAX_TYPE_DEPTH + 1));
    assert_eq!(err.found, "`<`");
    assert!(err.message.contains("nesting"));
    // `model A { x: ` is 13 columns; each level adds `L<`.
    assert_eq!(position(&err), (1, 13 + 2 * (MAX_TYPE_DEPTH + 1)));
}

#[test]
fn error_pathological_nesting_does_not_overflow() {
    for levels in [2_000, 10_000] {
        let err = parse_err(&nested_list_field(levels));
        assert_eq!(position(&err), (1, 13 + 2 * (MAX_TYPE_DEPTH + 1)));
    }
}

//! IDL Parser implementation.

use super::error::ParseError;
use crate::ast::{
    Annotation, CompilationUnit, Declaration, FieldDeclaration, Literal, ModelDeclaration, TypeRef,
};
use crate::lexer::{Keyword, Lexer, Span, Token, TokenKind};

/// Deepest generic nesting accepted in a type reference.
pub const MAX_TYPE_DEPTH: usize = 64;

/// Recursive-descent parser for model definitions.
///
/// A parser is single-use: [`Parser::parse`] consumes it and either returns
/// the complete compilation unit or the first error. There is no recovery,
/// so a failed parse never yields a partial tree.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            current: Token::new(TokenKind::Eof, Span::new(0, 0, 1, 1)),
        }
    }

    /// Parses the whole input into a compilation unit.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` for the first lexical or grammar violation.
    pub fn parse(mut self) -> Result<CompilationUnit, ParseError> {
        self.advance()?;

        let mut declarations = Vec::new();
        while !self.current.is_eof() {
            declarations.push(self.parse_declaration()?);
        }

        Ok(CompilationUnit::new(declarations))
    }

    /// Parses one top-level declaration.
    fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let annotated = self.check(&TokenKind::At);
        let annotations = self.parse_annotations()?;

        let kind = match &self.current.kind {
            TokenKind::Keyword(kw) if kw.is_declaration_kind() => *kw,
            other => {
                let expected = if annotated {
                    "`model` or `embeddable`"
                } else {
                    "declaration"
                };
                return Err(ParseError::unexpected(expected, other, self.current.span));
            }
        };
        let span = self.current.span;
        self.advance()?;

        let name = self.expect_identifier("declaration name")?;
        let logical_name = self.parse_name_clause()?.unwrap_or_else(|| name.clone());

        self.expect(&TokenKind::LeftBrace, "`{`")?;
        let mut fields = Vec::new();
        while !self.check(&TokenKind::RightBrace) {
            if self.current.is_eof() {
                return Err(ParseError::unexpected(
                    "field or `}`",
                    &self.current.kind,
                    self.current.span,
                ));
            }
            fields.push(self.parse_field()?);
        }
        self.advance()?; // }

        let body = ModelDeclaration {
            name,
            logical_name,
            annotations,
            fields,
            span,
        };

        Ok(match kind {
            Keyword::Embeddable => Declaration::Embeddable(body),
            _ => Declaration::Model(body),
        })
    }

    /// Parses the optional `as "logical_name"` clause.
    fn parse_name_clause(&mut self) -> Result<Option<String>, ParseError> {
        if !self.current.is_keyword(Keyword::As) {
            return Ok(None);
        }
        self.advance()?;

        let span = self.current.span;
        let TokenKind::String(logical) = &self.current.kind else {
            return Err(ParseError::unexpected(
                "logical name string",
                &self.current.kind,
                span,
            ));
        };
        if logical.is_empty() {
            return Err(ParseError::invalid(
                "logical name must not be empty",
                "non-empty logical name",
                "empty string",
                span,
            ));
        }
        let logical = logical.clone();
        self.advance()?;
        Ok(Some(logical))
    }

    /// Parses `{annotation} name ':' type {annotation} [';' | ',']`.
    fn parse_field(&mut self) -> Result<FieldDeclaration, ParseError> {
        let mut annotations = self.parse_annotations()?;

        let span = self.current.span;
        let name = self.expect_identifier("field name or `}`")?;
        self.expect(&TokenKind::Colon, "`:`")?;
        let ty = self.parse_type(0)?;
        annotations.extend(self.parse_annotations()?);

        if self.check(&TokenKind::Semicolon) || self.check(&TokenKind::Comma) {
            self.advance()?;
        }

        Ok(FieldDeclaration {
            name,
            ty,
            annotations,
            span,
        })
    }

    /// Parses a type reference: `Name [<T, ...>] [[]] [?]`.
    ///
    /// `depth` counts the enclosing `<`; nesting beyond [`MAX_TYPE_DEPTH`]
    /// is an error at the offending `<`.
    fn parse_type(&mut self, depth: usize) -> Result<TypeRef, ParseError> {
        let span = self.current.span;
        let name = self.expect_identifier("type")?;
        let mut ty = TypeRef::named(name, span);

        if self.check(&TokenKind::LeftAngle) {
            if depth >= MAX_TYPE_DEPTH {
                return Err(ParseError::invalid(
                    format!("type nesting exceeds {MAX_TYPE_DEPTH} levels"),
                    "shallower type nesting",
                    self.current.kind.describe(),
                    self.current.span,
                ));
            }
            self.advance()?;
            loop {
                ty.args.push(self.parse_type(depth + 1)?);
                if !self.check(&TokenKind::Comma) {
                    break;
                }
                self.advance()?;
            }
            self.expect(&TokenKind::RightAngle, "`>` or `,`")?;
        }

        if self.check(&TokenKind::LeftBracket) {
            self.advance()?;
            self.expect(&TokenKind::RightBracket, "`]`")?;
            ty.array = true;
        }

        if self.check(&TokenKind::Question) {
            self.advance()?;
            ty.optional = true;
        }

        Ok(ty)
    }

    /// Parses zero or more annotations.
    fn parse_annotations(&mut self) -> Result<Vec<Annotation>, ParseError> {
        let mut annotations = Vec::new();
        while self.check(&TokenKind::At) {
            annotations.push(self.parse_annotation()?);
        }
        Ok(annotations)
    }

    /// Parses `@name [( [literal {, literal}] )]`.
    fn parse_annotation(&mut self) -> Result<Annotation, ParseError> {
        let span = self.current.span;
        self.expect(&TokenKind::At, "`@`")?;
        let name = self.expect_identifier("annotation name")?;

        let mut args = Vec::new();
        if self.check(&TokenKind::LeftParen) {
            self.advance()?;
            if !self.check(&TokenKind::RightParen) {
                loop {
                    args.push(self.parse_literal()?);
                    if !self.check(&TokenKind::Comma) {
                        break;
                    }
                    self.advance()?;
                }
            }
            self.expect(&TokenKind::RightParen, "`)` or `,`")?;
        }

        Ok(Annotation { name, args, span })
    }

    /// Parses an annotation argument.
    fn parse_literal(&mut self) -> Result<Literal, ParseError> {
        let literal = match &self.current.kind {
            TokenKind::Integer(i) => Literal::Integer(*i),
            TokenKind::Float(f) => Literal::Float(*f),
            TokenKind::String(s) => Literal::String(s.clone()),
            TokenKind::Identifier(name) => Literal::Identifier(name.clone()),
            TokenKind::Keyword(Keyword::True) => Literal::Boolean(true),
            TokenKind::Keyword(Keyword::False) => Literal::Boolean(false),
            TokenKind::Keyword(Keyword::Null) => Literal::Null,
            other => {
                return Err(ParseError::unexpected(
                    "literal",
                    other,
                    self.current.span,
                ));
            }
        };
        self.advance()?;
        Ok(literal)
    }

    // --- Helper methods ---

    /// Advances to the next token.
    fn advance(&mut self) -> Result<(), ParseError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Checks if the current token matches the given kind.
    fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current.kind) == core::mem::discriminant(kind)
    }

    /// Expects the current token to be the given kind.
    fn expect(&mut self, kind: &TokenKind, what: &str) -> Result<(), ParseError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(ParseError::unexpected(
                what,
                &self.current.kind,
                self.current.span,
            ))
        }
    }

    /// Expects and returns an identifier.
    fn expect_identifier(&mut self, what: &str) -> Result<String, ParseError> {
        match &self.current.kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance()?;
                Ok(name)
            }
            other => Err(ParseError::unexpected(what, other, self.current.span)),
        }
    }
}

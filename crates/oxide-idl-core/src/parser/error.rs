//! Parser error types.

use crate::lexer::{LexError, Span, TokenKind};

/// A parse error.
///
/// Lexer failures are folded into this type, so callers of
/// [`Parser::parse`](super::Parser::parse) only ever see one error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at {span}")]
pub struct ParseError {
    /// The error message.
    pub message: String,
    /// The location of the error.
    pub span: Span,
    /// What the parser expected at this position.
    pub expected: String,
    /// What was actually found.
    pub found: String,
    /// The lexer error this parse error was raised from, if any.
    pub lex: Option<LexError>,
}

impl ParseError {
    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: &TokenKind, span: Span) -> Self {
        let expected: String = expected.into();
        let found = found.describe();
        Self {
            message: format!("expected {expected}, found {found}"),
            span,
            expected,
            found,
            lex: None,
        }
    }

    /// Creates an error with a custom message.
    #[must_use]
    pub fn invalid(
        message: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            expected: expected.into(),
            found: found.into(),
            lex: None,
        }
    }

    /// Returns the 1-based line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.span.line
    }

    /// Returns the 1-based column of the error.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.span.column
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        Self {
            message: err.description(),
            span: err.span,
            expected: String::from("a valid token"),
            found: err.description(),
            lex: Some(err),
        }
    }
}

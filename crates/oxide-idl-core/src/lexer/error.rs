//! Lexer error types.

use super::Span;

/// What went wrong while scanning a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A string literal reached a newline or end of input before its closing quote.
    UnterminatedLiteral,
    /// A character that cannot start any token.
    InvalidCharacter(char),
    /// A backslash escape the language does not define.
    InvalidEscape(char),
    /// A `/* ... */` comment without its closing `*/`.
    UnterminatedComment,
    /// A numeric literal that does not fit its type.
    InvalidNumber,
}

/// A fatal error raised while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} at {span}", describe(.kind))]
pub struct LexError {
    /// The error kind.
    pub kind: LexErrorKind,
    /// Location of the offending character or token start.
    pub span: Span,
}

impl LexError {
    /// Creates a new lexer error.
    #[must_use]
    pub const fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Human-readable description of the error kind.
    #[must_use]
    pub fn description(&self) -> String {
        describe(&self.kind)
    }
}

fn describe(kind: &LexErrorKind) -> String {
    match kind {
        LexErrorKind::UnterminatedLiteral => String::from("unterminated string literal"),
        LexErrorKind::InvalidCharacter(c) => format!("invalid character `{}`", c.escape_debug()),
        LexErrorKind::InvalidEscape(c) => format!("invalid escape `\\{}`", c.escape_debug()),
        LexErrorKind::UnterminatedComment => String::from("unterminated block comment"),
        LexErrorKind::InvalidNumber => String::from("invalid numeric literal"),
    }
}

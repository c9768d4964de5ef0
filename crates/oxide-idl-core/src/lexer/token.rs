//! Token types for the IDL lexer.

use core::fmt;

use super::Span;

/// Reserved words of the model definition language.
///
/// Keywords are matched case-sensitively so that tokenization never depends
/// on locale rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Model,
    Embeddable,
    As,
    True,
    False,
    Null,
}

impl Keyword {
    /// Attempts to parse a keyword from a string.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "model" => Some(Self::Model),
            "embeddable" => Some(Self::Embeddable),
            "as" => Some(Self::As),
            "true" => Some(Self::True),
            "false" => Some(Self::False),
            "null" => Some(Self::Null),
            _ => None,
        }
    }

    /// Returns the keyword as it is written in source.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Embeddable => "embeddable",
            Self::As => "as",
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
        }
    }

    /// Returns true if the keyword starts a top-level declaration.
    #[must_use]
    pub const fn is_declaration_kind(&self) -> bool {
        matches!(self, Self::Model | Self::Embeddable)
    }
}

/// Token kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Integer literal.
    Integer(i64),
    /// Floating-point literal.
    Float(f64),
    /// String literal (escapes already resolved).
    String(String),

    // Identifiers and keywords
    /// Identifier.
    Identifier(String),
    /// Reserved keyword.
    Keyword(Keyword),

    // Punctuation
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `<`
    LeftAngle,
    /// `>`
    RightAngle,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `@`
    At,
    /// `?`
    Question,

    /// End of input.
    Eof,
}

/// Coarse classification of a token, independent of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Identifier,
    Keyword,
    Literal,
    Punctuation,
    EndOfInput,
}

impl TokenKind {
    /// Returns the coarse class of this token kind.
    #[must_use]
    pub const fn class(&self) -> TokenClass {
        match self {
            Self::Integer(_) | Self::Float(_) | Self::String(_) => TokenClass::Literal,
            Self::Identifier(_) => TokenClass::Identifier,
            Self::Keyword(_) => TokenClass::Keyword,
            Self::Eof => TokenClass::EndOfInput,
            _ => TokenClass::Punctuation,
        }
    }

    /// Returns a short description suitable for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Integer(i) => format!("integer `{i}`"),
            Self::Float(f) => format!("number `{f}`"),
            Self::String(s) => format!("string \"{s}\""),
            Self::Identifier(name) => format!("identifier `{name}`"),
            Self::Keyword(kw) => format!("keyword `{}`", kw.as_str()),
            Self::Eof => String::from("end of input"),
            other => format!("`{}`", other.punctuation_str()),
        }
    }

    fn punctuation_str(&self) -> &'static str {
        match self {
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftAngle => "<",
            Self::RightAngle => ">",
            Self::Colon => ":",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::At => "@",
            Self::Question => "?",
            _ => "",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns true if this token is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(&self.kind, TokenKind::Keyword(kw) if *kw == keyword)
    }

    /// Returns the raw source text of this token.
    #[must_use]
    pub fn lexeme<'a>(&self, source: &'a str) -> &'a str {
        self.span.slice(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup_is_case_sensitive() {
        assert_eq!(Keyword::from_str("model"), Some(Keyword::Model));
        assert_eq!(Keyword::from_str("Model"), None);
        assert_eq!(Keyword::from_str("MODEL"), None);
        assert_eq!(Keyword::from_str("embeddable"), Some(Keyword::Embeddable));
    }

    #[test]
    fn test_keyword_round_trip() {
        for kw in [
            Keyword::Model,
            Keyword::Embeddable,
            Keyword::As,
            Keyword::True,
            Keyword::False,
            Keyword::Null,
        ] {
            assert_eq!(Keyword::from_str(kw.as_str()), Some(kw));
        }
    }

    #[test]
    fn test_token_classes() {
        assert_eq!(TokenKind::Integer(1).class(), TokenClass::Literal);
        assert_eq!(
            TokenKind::Identifier(String::from("x")).class(),
            TokenClass::Identifier
        );
        assert_eq!(
            TokenKind::Keyword(Keyword::Model).class(),
            TokenClass::Keyword
        );
        assert_eq!(TokenKind::Colon.class(), TokenClass::Punctuation);
        assert_eq!(TokenKind::Eof.class(), TokenClass::EndOfInput);
    }

    #[test]
    fn test_describe() {
        assert_eq!(TokenKind::RightBrace.describe(), "`}`");
        assert_eq!(TokenKind::Eof.describe(), "end of input");
        assert_eq!(
            TokenKind::Identifier(String::from("Foo")).to_string(),
            "identifier `Foo`"
        );
    }
}

//! IDL tokenizer implementation.

use super::{Keyword, LexError, LexErrorKind, Span, Token, TokenKind};

/// A lexer that tokenizes model definition source.
///
/// Tokens are produced lazily by [`Lexer::next_token`]. Once the end of input
/// has been reached every further call returns another `Eof` token.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// Line of the current position (1-based).
    line: usize,
    /// Column of the current position (1-based, in characters).
    column: usize,
    /// The byte position of the start of the current token.
    start: usize,
    start_line: usize,
    start_column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
            start: 0,
            start_line: 1,
            start_column: 1,
        }
    }

    /// Returns the source this lexer reads from.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.input
    }

    /// Rewinds the lexer to the beginning of its source.
    pub fn reset(&mut self) {
        *self = Self::new(self.input);
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Marks the current position as the start of a token.
    fn mark_start(&mut self) {
        self.start = self.pos;
        self.start_line = self.line;
        self.start_column = self.column;
    }

    /// Skips whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            // Line comments (// ...)
            if self.peek() == Some('/') && self.peek_next() == Some('/') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            // Block comments (/* ... */), not nested
            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                self.mark_start();
                self.advance(); // /
                self.advance(); // *
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        Some(_) => {}
                        None => return Err(self.error(LexErrorKind::UnterminatedComment)),
                    }
                }
                continue;
            }

            return Ok(());
        }
    }

    /// Creates a span from the token start to the current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos, self.start_line, self.start_column)
    }

    /// Creates a token with the current span.
    const fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.make_span())
    }

    /// Creates an error located at the start of the current token.
    const fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.make_span())
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];
        match Keyword::from_str(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier(String::from(text))),
        }
    }

    /// Scans a number (integer or float), with an optional leading minus.
    fn scan_number(&mut self) -> Result<Token, LexError> {
        let mut is_float = false;

        if self.peek() == Some('-') {
            self.advance();
        }

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.advance(); // consume .
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let text = &self.input[self.start..self.pos];
        let kind = if is_float {
            text.parse::<f64>().map(TokenKind::Float).ok()
        } else {
            text.parse::<i64>().map(TokenKind::Integer).ok()
        };
        kind.map(|kind| self.make_token(kind))
            .ok_or_else(|| self.error(LexErrorKind::InvalidNumber))
    }

    /// Scans a double-quoted string literal.
    fn scan_string(&mut self) -> Result<Token, LexError> {
        self.advance(); // consume opening quote
        let mut value = String::new();

        loop {
            match self.peek() {
                Some('"') => break,
                Some('\\') => {
                    self.advance();
                    let escaped = match self.advance() {
                        Some('"') => '"',
                        Some('\\') => '\\',
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some('r') => '\r',
                        Some(other) => return Err(self.error(LexErrorKind::InvalidEscape(other))),
                        None => return Err(self.error(LexErrorKind::UnterminatedLiteral)),
                    };
                    value.push(escaped);
                }
                Some('\n') | None => return Err(self.error(LexErrorKind::UnterminatedLiteral)),
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }

        self.advance(); // consume closing quote
        Ok(self.make_token(TokenKind::String(value)))
    }

    /// Scans the next token.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] for unterminated literals or comments, invalid
    /// escapes, and characters that cannot start a token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments()?;
        self.mark_start();

        let Some(c) = self.peek() else {
            return Ok(self.make_token(TokenKind::Eof));
        };

        let punctuation = match c {
            '{' => Some(TokenKind::LeftBrace),
            '}' => Some(TokenKind::RightBrace),
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            '[' => Some(TokenKind::LeftBracket),
            ']' => Some(TokenKind::RightBracket),
            '<' => Some(TokenKind::LeftAngle),
            '>' => Some(TokenKind::RightAngle),
            ':' => Some(TokenKind::Colon),
            ';' => Some(TokenKind::Semicolon),
            ',' => Some(TokenKind::Comma),
            '@' => Some(TokenKind::At),
            '?' => Some(TokenKind::Question),
            _ => None,
        };
        if let Some(kind) = punctuation {
            self.advance();
            return Ok(self.make_token(kind));
        }

        match c {
            '"' => self.scan_string(),
            c if c.is_ascii_digit() => self.scan_number(),
            '-' if self.peek_next().is_some_and(|n| n.is_ascii_digit()) => self.scan_number(),
            c if c.is_alphabetic() || c == '_' => Ok(self.scan_identifier()),
            other => {
                self.advance();
                Err(self.error(LexErrorKind::InvalidCharacter(other)))
            }
        }
    }

    /// Tokenizes the entire input and returns all tokens, ending with `Eof`.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexError`] encountered.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to, but not including, `Eof`.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            other => Some(other),
        }
    }
}

//! IDL Lexer/Tokenizer
//!
//! This module provides a hand-written lexer for model definition source that
//! produces a stream of tokens.

mod error;
mod span;
mod token;
mod tokenizer;

pub use error::{LexError, LexErrorKind};
pub use span::Span;
pub use token::{Keyword, Token, TokenClass, TokenKind};
pub use tokenizer::Lexer;

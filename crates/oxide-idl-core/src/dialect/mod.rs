//! SQL Dialect support.
//!
//! Backends disagree on identifier quoting, identifier length and whether
//! sequences exist at all. This module provides a trait for that
//! dialect-specific behavior and the dialects that need no driver code.

mod gbase;
mod generic;
mod sqlserver;

pub use gbase::GBaseDialect;
pub use generic::GenericDialect;
pub use sqlserver::SqlServerDialect;

/// Trait for SQL dialect-specific behavior.
pub trait Dialect: Send + Sync {
    /// Returns the dialect identifier (e.g. `"sqlite"`).
    fn name(&self) -> &'static str;

    /// Returns the opening and closing identifier quote characters.
    fn identifier_quotes(&self) -> (char, char) {
        ('"', '"')
    }

    /// Returns whether the backend has native sequences.
    fn supports_sequences(&self) -> bool {
        true
    }

    /// Returns the maximum identifier length in characters, if bounded.
    fn max_identifier_length(&self) -> Option<usize> {
        None
    }

    /// Quotes an identifier, doubling any embedded closing quote.
    fn quote_identifier(&self, name: &str) -> String {
        let (open, close) = self.identifier_quotes();
        let mut quoted = String::with_capacity(name.len() + 2);
        quoted.push(open);
        for c in name.chars() {
            if c == close {
                quoted.push(close);
            }
            quoted.push(c);
        }
        quoted.push(close);
        quoted
    }

    /// Returns SQL yielding the next value of a physical sequence.
    fn next_sequence_value_sql(&self, sequence: &str) -> String {
        format!("NEXT VALUE FOR {}", self.quote_identifier(sequence))
    }

    /// Returns true if `name` fits the dialect's identifier length limit.
    fn is_valid_identifier_length(&self, name: &str) -> bool {
        self.max_identifier_length()
            .is_none_or(|max| name.chars().count() <= max)
    }
}

//! Generic SQL dialect.

use super::Dialect;

/// A generic SQL dialect using ANSI SQL conventions.
///
/// Registered under the `default` identifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "default"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_dialect() {
        let dialect = GenericDialect::new();
        assert_eq!(dialect.name(), "default");
        assert_eq!(dialect.identifier_quotes(), ('"', '"'));
        assert!(dialect.supports_sequences());
        assert_eq!(
            dialect.next_sequence_value_sql("order_seq"),
            "NEXT VALUE FOR \"order_seq\""
        );
    }
}

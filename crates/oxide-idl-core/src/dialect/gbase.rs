//! GBase dialect.

use super::Dialect;

/// GBase 8s (Informix lineage): `seq.NEXTVAL` sequence access.
#[derive(Debug, Default, Clone, Copy)]
pub struct GBaseDialect;

impl GBaseDialect {
    /// Creates a new GBase dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GBaseDialect {
    fn name(&self) -> &'static str {
        "gbase"
    }

    fn max_identifier_length(&self) -> Option<usize> {
        Some(128)
    }

    fn next_sequence_value_sql(&self, sequence: &str) -> String {
        format!("{}.NEXTVAL", self.quote_identifier(sequence))
    }
}

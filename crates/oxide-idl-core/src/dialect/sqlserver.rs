//! SQL Server dialect.

use super::Dialect;

/// Microsoft SQL Server: bracket quoting, 128-character identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlServerDialect;

impl SqlServerDialect {
    /// Creates a new SQL Server dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqlServerDialect {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    fn identifier_quotes(&self) -> (char, char) {
        ('[', ']')
    }

    fn max_identifier_length(&self) -> Option<usize> {
        Some(128)
    }
}

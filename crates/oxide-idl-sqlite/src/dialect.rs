//! SQLite dialect implementation.

use oxide_idl_core::dialect::Dialect;

/// Table emulating sequences on SQLite.
pub const SEQUENCE_TABLE: &str = "oxide_sequences";

/// SQLite dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns DDL creating the sequence emulation table.
    #[must_use]
    pub fn create_sequence_table_sql(&self) -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (name TEXT PRIMARY KEY NOT NULL, next_val INTEGER NOT NULL)",
            self.quote_identifier(SEQUENCE_TABLE)
        )
    }

    /// Returns SQL registering a sequence, starting at zero, if it is missing.
    #[must_use]
    pub fn register_sequence_sql(&self, sequence: &str) -> String {
        format!(
            "INSERT OR IGNORE INTO {} (name, next_val) VALUES ({}, 0)",
            self.quote_identifier(SEQUENCE_TABLE),
            quote_string(sequence)
        )
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn identifier_quotes(&self) -> (char, char) {
        ('"', '"') // SQLite also accepts backticks, but double quotes are standard
    }

    fn supports_sequences(&self) -> bool {
        false
    }

    fn next_sequence_value_sql(&self, sequence: &str) -> String {
        format!(
            "UPDATE {} SET next_val = next_val + 1 WHERE name = {} RETURNING next_val",
            self.quote_identifier(SEQUENCE_TABLE),
            quote_string(sequence)
        )
    }
}

/// Quotes a string literal, doubling embedded single quotes.
fn quote_string(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_dialect() {
        let dialect = SqliteDialect::new();
        assert_eq!(dialect.name(), "sqlite");
        assert_eq!(dialect.quote_identifier("order"), "\"order\"");
        assert!(!dialect.supports_sequences());
        assert_eq!(dialect.max_identifier_length(), None);
    }

    #[test]
    fn test_sequence_emulation_sql() {
        let dialect = SqliteDialect::new();
        assert_eq!(
            dialect.next_sequence_value_sql("order_seq"),
            "UPDATE \"oxide_sequences\" SET next_val = next_val + 1 \
             WHERE name = 'order_seq' RETURNING next_val"
        );
        assert_eq!(
            dialect.register_sequence_sql("it's"),
            "INSERT OR IGNORE INTO \"oxide_sequences\" (name, next_val) VALUES ('it''s', 0)"
        );
        assert!(dialect
            .create_sequence_table_sql()
            .starts_with("CREATE TABLE IF NOT EXISTS \"oxide_sequences\""));
    }
}

//! Dialect sessions.

use std::fmt;
use std::sync::Arc;

use oxide_idl_core::ast::Declaration;
use oxide_idl_core::dialect::Dialect;
use oxide_idl_core::naming::{physical_sequence_name, NamingStrategy, PhysicalNames};

use crate::error::{Result, SessionError};
use crate::source::ConnectionSource;

/// A handle binding one dialect to one connection source.
///
/// Consumers use it without knowing which dialect was selected: quoting,
/// sequence access and physical naming all go through the session.
pub struct DialectSession {
    dialect_id: String,
    dialect: Arc<dyn Dialect>,
    source: Arc<dyn ConnectionSource>,
    naming: Arc<dyn NamingStrategy>,
}

impl DialectSession {
    /// Creates a session.
    #[must_use]
    pub fn new(
        dialect_id: impl Into<String>,
        dialect: Arc<dyn Dialect>,
        source: Arc<dyn ConnectionSource>,
        naming: Arc<dyn NamingStrategy>,
    ) -> Self {
        Self {
            dialect_id: dialect_id.into(),
            dialect,
            source,
            naming,
        }
    }

    /// Returns the identifier this session was registered under.
    #[must_use]
    pub fn dialect_id(&self) -> &str {
        &self.dialect_id
    }

    /// Returns the dialect.
    #[must_use]
    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    /// Returns the connection source.
    #[must_use]
    pub fn source(&self) -> &Arc<dyn ConnectionSource> {
        &self.source
    }

    /// Returns the connection source as its concrete type, if it is a `T`.
    #[must_use]
    pub fn source_as<T: ConnectionSource>(&self) -> Option<&T> {
        self.source.as_any().downcast_ref::<T>()
    }

    /// Returns the naming strategy.
    #[must_use]
    pub fn naming(&self) -> &dyn NamingStrategy {
        self.naming.as_ref()
    }

    /// Quotes an identifier for this dialect.
    #[must_use]
    pub fn quote_identifier(&self, name: &str) -> String {
        self.dialect.quote_identifier(name)
    }

    /// Returns the physical table name for a logical table name.
    #[must_use]
    pub fn physical_table_name(&self, logical: &str) -> String {
        self.naming.physical_table_name(logical)
    }

    /// Returns the physical sequence name for a logical sequence name.
    #[must_use]
    pub fn physical_sequence_name(&self, logical: &str) -> String {
        self.naming.physical_sequence_name(logical)
    }

    /// Returns SQL fetching the next value of a declaration's sequence, `None`
    /// for kinds without a table. Honors `@sequence` overrides, so the result
    /// matches [`ResolvedNames::next_value_sql`].
    ///
    /// # Errors
    ///
    /// Same identifier checks as [`resolve`](Self::resolve).
    pub fn next_sequence_value_sql(&self, declaration: &Declaration) -> Result<Option<String>> {
        physical_sequence_name(declaration, self.naming.as_ref())
            .map(|sequence| -> Result<String> {
                self.check_identifier(declaration, &sequence)?;
                Ok(self.dialect.next_sequence_value_sql(&sequence))
            })
            .transpose()
    }

    /// Resolves and quotes the physical names of a declaration.
    ///
    /// # Errors
    ///
    /// - [`SessionError::EmptyIdentifier`] if an override such as
    ///   `@table("")` leaves a physical name empty
    /// - [`SessionError::IdentifierTooLong`] if a physical name does not fit
    ///   the dialect's identifier limit
    pub fn resolve(&self, declaration: &Declaration) -> Result<ResolvedNames> {
        let names = PhysicalNames::resolve(declaration, self.naming.as_ref());

        let identifiers = names
            .table
            .iter()
            .chain(names.sequence.iter())
            .chain(names.columns.iter().map(|(_, column)| column));
        for identifier in identifiers {
            self.check_identifier(declaration, identifier)?;
        }

        Ok(ResolvedNames {
            table: names.table.as_deref().map(|t| self.quote_identifier(t)),
            next_value_sql: names
                .sequence
                .as_deref()
                .map(|s| self.dialect.next_sequence_value_sql(s)),
            columns: names
                .columns
                .iter()
                .map(|(field, column)| (field.clone(), self.quote_identifier(column)))
                .collect(),
            physical: names,
        })
    }

    fn check_identifier(&self, declaration: &Declaration, identifier: &str) -> Result<()> {
        if identifier.is_empty() {
            return Err(SessionError::EmptyIdentifier {
                dialect_id: self.dialect_id.clone(),
                declaration: declaration.name().to_string(),
            });
        }
        match self.dialect.max_identifier_length() {
            Some(max) if !self.dialect.is_valid_identifier_length(identifier) => {
                Err(SessionError::IdentifierTooLong {
                    dialect_id: self.dialect_id.clone(),
                    identifier: identifier.to_string(),
                    max,
                })
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Debug for DialectSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialectSession")
            .field("dialect_id", &self.dialect_id)
            .field("dialect", &self.dialect.name())
            .field("source", &self.source.source_id())
            .finish_non_exhaustive()
    }
}

/// Physical names of a declaration, quoted for one dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNames {
    /// Unquoted physical names.
    pub physical: PhysicalNames,
    /// Quoted table, `None` for kinds without a table.
    pub table: Option<String>,
    /// SQL returning the next sequence value, `None` for kinds without a table.
    pub next_value_sql: Option<String>,
    /// `(field name, quoted column)` pairs in source order.
    pub columns: Vec<(String, String)>,
}

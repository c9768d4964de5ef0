//! Physical naming.
//!
//! A [`NamingStrategy`] maps logical table and sequence names to the
//! identifiers used by the storage layer. Strategies see plain strings only;
//! [`PhysicalNames::resolve`] is the single place where declarations and
//! strategies meet.

mod case;
mod strategy;

pub use case::{to_snake_case, to_upper_snake_case};
pub use strategy::{
    IdentityNaming, NamingStrategy, NamingStrategyKind, PrefixedNaming, SnakeCaseNaming,
    UnknownNamingStrategy, UpperSnakeCaseNaming,
};

use crate::ast::{Declaration, FieldDeclaration};

/// Suffix appended to a logical name to form its logical sequence name.
pub const SEQUENCE_SUFFIX: &str = "_seq";

/// Physical identifiers of one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalNames {
    /// The declaration's logical name.
    pub logical_name: String,
    /// Physical table, `None` for kinds without their own table.
    pub table: Option<String>,
    /// Physical sequence, `None` for kinds without their own table.
    pub sequence: Option<String>,
    /// `(field name, physical column)` pairs in source order.
    pub columns: Vec<(String, String)>,
}

impl PhysicalNames {
    /// Resolves the physical names of a declaration.
    ///
    /// `@table` / `@sequence` / `@column` overrides are used verbatim. Without
    /// an override the table name is `strategy(logical_name)` and the
    /// sequence name is `strategy(logical_name + "_seq")`. Column names
    /// follow the table rules of the strategy.
    #[must_use]
    pub fn resolve(declaration: &Declaration, strategy: &dyn NamingStrategy) -> Self {
        let logical = declaration.logical_name();
        let (table, sequence) = if declaration.kind().has_table() {
            let table = declaration.table_override().map_or_else(
                || strategy.physical_table_name(logical),
                String::from,
            );
            (Some(table), physical_sequence_name(declaration, strategy))
        } else {
            (None, None)
        };

        let columns = declaration
            .fields()
            .iter()
            .map(|field| (field.name.clone(), physical_column_name(field, strategy)))
            .collect();

        Self {
            logical_name: String::from(logical),
            table,
            sequence,
            columns,
        }
    }
}

/// Returns the logical sequence name for a logical table name.
#[must_use]
pub fn logical_sequence_name(logical: &str) -> String {
    format!("{logical}{SEQUENCE_SUFFIX}")
}

/// Returns the physical sequence name of a declaration, `None` for kinds
/// without a table. A `@sequence` override is used verbatim.
#[must_use]
pub fn physical_sequence_name(
    declaration: &Declaration,
    strategy: &dyn NamingStrategy,
) -> Option<String> {
    if !declaration.kind().has_table() {
        return None;
    }
    Some(declaration.sequence_override().map_or_else(
        || strategy.physical_sequence_name(&logical_sequence_name(declaration.logical_name())),
        String::from,
    ))
}

/// Returns the physical column name of a field.
#[must_use]
pub fn physical_column_name(field: &FieldDeclaration, strategy: &dyn NamingStrategy) -> String {
    field
        .column_override()
        .map_or_else(|| strategy.physical_column_name(&field.name), String::from)
}

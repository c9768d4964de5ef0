//! Printable summaries of compiled declarations.

use std::fmt;

use oxide_idl_core::ast::Declaration;
use oxide_idl_session::ResolvedNames;
use serde::Serialize;

/// One resolved column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnReport {
    pub field: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub column: String,
}

/// Physical names of one declaration under one dialect session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclarationReport {
    pub kind: &'static str,
    pub name: String,
    pub logical_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_value_sql: Option<String>,
    pub columns: Vec<ColumnReport>,
}

impl DeclarationReport {
    /// Pairs a declaration with its resolved names.
    pub fn new(declaration: &Declaration, resolved: ResolvedNames) -> Self {
        let columns = declaration
            .fields()
            .iter()
            .zip(resolved.columns)
            .map(|(field, (_, column))| ColumnReport {
                field: field.name.clone(),
                ty: field.ty.to_string(),
                column,
            })
            .collect();

        Self {
            kind: declaration.kind().as_str(),
            name: declaration.name().to_string(),
            logical_name: declaration.logical_name().to_string(),
            table: resolved.table,
            next_value_sql: resolved.next_value_sql,
            columns,
        }
    }
}

impl fmt::Display for DeclarationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.name)?;
        if self.logical_name != self.name {
            write!(f, " as \"{}\"", self.logical_name)?;
        }
        writeln!(f)?;
        if let Some(table) = &self.table {
            writeln!(f, "  table:    {table}")?;
        }
        if let Some(sql) = &self.next_value_sql {
            writeln!(f, "  sequence: {sql}")?;
        }
        for column in &self.columns {
            writeln!(f, "  {:<20} {:<24} {}", column.field, column.ty, column.column)?;
        }
        Ok(())
    }
}

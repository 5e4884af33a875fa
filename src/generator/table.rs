//! Table-level generation: one table in, one type declaration out.

use serde::Serialize;
use std::fmt;

use super::field::render_field;
use super::mapper::FallbackPolicy;
use super::{capitalize_first, GenerateError, Language};
use crate::db::Catalog;
use crate::types::{ColumnDescriptor, TableRef};

/// One rendered type declaration for one table.
///
/// Never mutated after creation; schema runs only concatenate these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedType {
    pub table: String,
    pub type_name: String,
    pub source: String,
}

impl fmt::Display for GeneratedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Generates type declarations from a catalog.
///
/// The catalog is injected so generation can run against a live database
/// or a snapshot with no code changes.
#[derive(Clone, Copy)]
pub struct TypeGenerator<'a> {
    catalog: &'a dyn Catalog,
    fallback: FallbackPolicy,
}

impl<'a> TypeGenerator<'a> {
    pub fn new(catalog: &'a dyn Catalog) -> Self {
        Self {
            catalog,
            fallback: FallbackPolicy::default(),
        }
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn catalog(&self) -> &'a dyn Catalog {
        self.catalog
    }

    /// Read a table's columns, in ordinal order, with their foreign keys.
    ///
    /// A table with no columns is fine; a table that does not exist is
    /// `GenerateError::EmptyTable`.
    pub fn describe_columns(&self, table: &TableRef) -> Result<Vec<ColumnDescriptor>, GenerateError> {
        let columns = self.catalog.list_columns(table)?;

        if columns.is_empty() && !self.catalog.table_exists(table)? {
            return Err(GenerateError::EmptyTable {
                table: table.to_string(),
            });
        }

        columns
            .into_iter()
            .map(|info| {
                let foreign_keys = self.catalog.list_foreign_keys(table, &info.name)?;
                Ok(ColumnDescriptor::from_info(table, info, foreign_keys))
            })
            .collect()
    }

    /// Generate the declaration for `table` in `language`.
    pub fn generate(&self, table: &TableRef, language: Language) -> Result<GeneratedType, GenerateError> {
        let profile = language.profile();
        let columns = self.describe_columns(table)?;

        tracing::debug!(
            table = %table,
            language = %language,
            columns = columns.len(),
            "generating type"
        );

        let fields = columns
            .iter()
            .map(|column| render_field(column, profile, self.fallback))
            .collect::<Vec<_>>()
            .join("\n\n");

        let type_name = capitalize_first(&table.name);
        let source = profile.body.render(&type_name, &fields);

        Ok(GeneratedType {
            table: table.name.clone(),
            type_name,
            source,
        })
    }
}

//! Schema-level generation: every table of a schema, in catalog order.

use serde::Serialize;

use super::table::{GeneratedType, TypeGenerator};
use super::{GenerateError, Language};
use crate::types::TableRef;

/// Result of a schema run.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaTypes {
    pub schema: String,
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preamble: Option<&'static str>,
    pub types: Vec<GeneratedType>,
    /// Tables listed by the catalog that vanished before they could be read.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

impl SchemaTypes {
    /// The whole run as one source text: preamble first, then each type,
    /// separated by blank lines.
    pub fn to_source(&self) -> String {
        self.preamble
            .into_iter()
            .map(str::to_string)
            .chain(self.types.iter().map(ToString::to_string))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

pub struct SchemaGenerator<'a> {
    tables: TypeGenerator<'a>,
}

impl<'a> SchemaGenerator<'a> {
    pub fn new(tables: TypeGenerator<'a>) -> Self {
        Self { tables }
    }

    /// Generate every table in `schema`.
    ///
    /// Tables that no longer exist are logged and skipped; any other
    /// failure aborts the run.
    pub fn generate(&self, schema: &str, language: Language) -> Result<SchemaTypes, GenerateError> {
        let table_names = self.tables.catalog().list_tables(schema)?;
        let mut types = Vec::with_capacity(table_names.len());
        let mut skipped = Vec::new();

        for name in table_names {
            let table = TableRef::new(schema, &name);
            match self.tables.generate(&table, language) {
                Ok(generated) => types.push(generated),
                Err(e @ GenerateError::EmptyTable { .. }) => {
                    tracing::warn!(table = %table, error = %e, "skipping table");
                    skipped.push(name);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(SchemaTypes {
            schema: schema.to_string(),
            language,
            preamble: language.profile().preamble,
            types,
            skipped,
        })
    }
}

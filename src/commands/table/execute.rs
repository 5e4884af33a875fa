use std::error::Error;

use serde::Serialize;

use super::TableCmd;
use crate::commands::{Execute, Session};
use crate::generator::{Language, TypeGenerator};
use crate::types::TableRef;

/// Result of the table command execution
#[derive(Debug, Clone, Serialize)]
pub struct TableResult {
    pub language: Language,
    pub schema: String,
    pub table: String,
    pub type_name: String,
    pub source: String,
}

impl Execute for TableCmd {
    type Output = TableResult;

    fn execute(self, session: &Session) -> Result<Self::Output, Box<dyn Error>> {
        let language = self.generate.language()?;
        let table = TableRef::parse(&self.table, session.default_schema());

        let generated = TypeGenerator::new(session.catalog()?)
            .with_fallback(self.generate.fallback())
            .generate(&table, language)?;

        Ok(TableResult {
            language,
            schema: table.schema,
            table: generated.table,
            type_name: generated.type_name,
            source: generated.source,
        })
    }
}

use std::error::Error;

use serde::Serialize;

use super::SchemaCmd;
use crate::commands::{Execute, Session};
use crate::generator::{SchemaGenerator, SchemaTypes, TypeGenerator};

/// Result of the schema command execution
#[derive(Debug, Clone, Serialize)]
pub struct SchemaResult {
    #[serde(flatten)]
    pub types: SchemaTypes,
}

impl Execute for SchemaCmd {
    type Output = SchemaResult;

    fn execute(self, session: &Session) -> Result<Self::Output, Box<dyn Error>> {
        let language = self.generate.language()?;
        let schema = self
            .schema
            .unwrap_or_else(|| session.default_schema().to_string());

        let tables = TypeGenerator::new(session.catalog()?).with_fallback(self.generate.fallback());
        let types = SchemaGenerator::new(tables).generate(&schema, language)?;

        Ok(SchemaResult { types })
    }
}

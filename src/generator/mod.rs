//! Type generation engine.
//!
//! Turns catalog column metadata into type declarations for a target
//! language:
//! - `language`: registry of per-language profiles
//! - `mapper`: declared catalog type to language type spelling
//! - `field`: one column to one rendered field block
//! - `table`: one table to one type declaration
//! - `schema`: every table of a schema, with the language preamble

pub mod field;
pub mod language;
pub mod mapper;
pub mod schema;
pub mod table;

pub use language::{Language, LanguageProfile};
pub use mapper::FallbackPolicy;
pub use schema::{SchemaGenerator, SchemaTypes};
pub use table::{GeneratedType, TypeGenerator};

use thiserror::Error;

use crate::db::{Catalog, DbError};
use crate::types::TableRef;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Unknown language '{name}' (see the languages command)")]
    UnknownLanguage { name: String },

    #[error("Table '{table}' does not exist in the catalog")]
    EmptyTable { table: String },

    #[error(transparent)]
    Catalog(#[from] DbError),
}

/// Upper-case the first character, leaving the rest untouched.
///
/// `line_items` becomes `Line_items`; no word-boundary handling.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Generate the type declaration for a single table.
pub fn generate_table_type(
    catalog: &dyn Catalog,
    table: &TableRef,
    language: Language,
) -> Result<String, GenerateError> {
    TypeGenerator::new(catalog)
        .generate(table, language)
        .map(|generated| generated.source)
}

/// Generate the type declarations for every table in a schema.
pub fn generate_schema_types(
    catalog: &dyn Catalog,
    schema: &str,
    language: Language,
) -> Result<String, GenerateError> {
    SchemaGenerator::new(TypeGenerator::new(catalog))
        .generate(schema, language)
        .map(|types| types.to_source())
}

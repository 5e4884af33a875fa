mod execute;
mod execute_tests;
mod output;

pub use execute::TableResult;

use clap::Args;

use super::GenerateArgs;

/// Generate the type declaration for one table
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  schema_types table users -l typescript          # users in the default schema
  schema_types table billing.invoices -l go       # schema-qualified table
  schema_types table orders -l python --native-fallback")]
pub struct TableCmd {
    /// Table name, optionally schema-qualified (schema.table)
    pub table: String,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

mod execute;
mod output;

pub use execute::SchemaResult;

use clap::Args;

use super::GenerateArgs;

/// Generate type declarations for every table in a schema
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  schema_types schema -l typescript > types.ts   # every table in the default schema
  schema_types schema billing -l dart            # a specific schema")]
pub struct SchemaCmd {
    /// Schema to generate (defaults to --schema, the config file, then "public")
    pub schema: Option<String>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

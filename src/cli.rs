//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and shared types.
//! Individual command definitions are in the `commands` module.

use clap::Parser;

use crate::commands::Command;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Catalog to read: postgres://... URL, snapshot:// URL, or a .json snapshot file
    /// (defaults to .schema_types.json, then DATABASE_URL)
    #[arg(short, long, global = true)]
    pub db: Option<String>,

    /// Schema for unqualified table names (defaults to the config file's, then "public")
    #[arg(short, long, global = true)]
    pub schema: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Increase diagnostic output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Log filter directive for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_global_args_after_subcommand() {
        let args = Args::try_parse_from([
            "schema_types",
            "languages",
            "--format",
            "json",
            "--db",
            "catalog.json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.db.as_deref(), Some("catalog.json"));
        assert_eq!(args.log_filter(), "trace");
    }

    #[rstest]
    fn test_defaults() {
        let args = Args::try_parse_from(["schema_types", "languages"]).unwrap();
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.db, None);
        assert_eq!(args.schema, None);
        assert_eq!(args.log_filter(), "warn");
    }

    #[rstest]
    fn test_unknown_format_rejected() {
        assert!(Args::try_parse_from(["schema_types", "languages", "--format", "xml"]).is_err());
    }
}

//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - An `Execute` implementation producing an `Outputable` result

mod languages;
mod schema;
mod snapshot;
mod table;

pub use languages::LanguagesCmd;
pub use schema::SchemaCmd;
pub use snapshot::SnapshotCmd;
pub use table::TableCmd;

use clap::{Args, Subcommand};
use std::cell::OnceCell;
use std::error::Error;

use crate::config::ConfigFile;
use crate::db::{Catalog, DatabaseConfig};
use crate::generator::{FallbackPolicy, Language};
use crate::output::{OutputFormat, Outputable};
use crate::types::DEFAULT_SCHEMA;

/// Per-invocation state shared by commands.
///
/// The catalog is opened on first use, so commands that never touch it
/// (like `languages`) work without any configuration.
pub struct Session {
    db_url: Option<String>,
    default_schema: String,
    catalog: OnceCell<Box<dyn Catalog>>,
}

impl Session {
    /// Fails if `.schema_types.json` exists but cannot be read or parsed.
    pub fn new(db_url: Option<String>, schema: Option<String>) -> Result<Self, Box<dyn Error>> {
        let default_schema = match schema {
            Some(schema) => schema,
            None => ConfigFile::load_optional()?
                .and_then(|c| c.default_schema)
                .unwrap_or_else(|| DEFAULT_SCHEMA.to_string()),
        };

        Ok(Self {
            db_url,
            default_schema,
            catalog: OnceCell::new(),
        })
    }

    /// Session over an already-open catalog.
    pub fn with_catalog(catalog: Box<dyn Catalog>, default_schema: &str) -> Self {
        let cell = OnceCell::new();
        let _ = cell.set(catalog);
        Self {
            db_url: None,
            default_schema: default_schema.to_string(),
            catalog: cell,
        }
    }

    pub fn default_schema(&self) -> &str {
        &self.default_schema
    }

    pub fn catalog(&self) -> Result<&dyn Catalog, Box<dyn Error>> {
        if let Some(catalog) = self.catalog.get() {
            return Ok(catalog.as_ref());
        }

        let catalog = DatabaseConfig::resolve(self.db_url.as_deref())?.connect()?;
        Ok(self.catalog.get_or_init(|| catalog).as_ref())
    }
}

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, session: &Session) -> Result<Self::Output, Box<dyn Error>>;
}

/// Arguments shared by the generating commands.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Target language (python, go, swift, dart, typescript)
    #[arg(short, long)]
    pub lang: String,

    /// Use the language's own fallback type for unmapped catalog types
    /// instead of `str # <type>`
    #[arg(long, default_value_t = false)]
    pub native_fallback: bool,
}

impl GenerateArgs {
    pub fn language(&self) -> Result<Language, Box<dyn Error>> {
        Ok(self.lang.parse::<Language>()?)
    }

    pub fn fallback(&self) -> FallbackPolicy {
        if self.native_fallback {
            FallbackPolicy::Native
        } else {
            FallbackPolicy::Reference
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the type declaration for one table
    Table(TableCmd),

    /// Generate type declarations for every table in a schema
    Schema(SchemaCmd),

    /// List supported target languages and their type spellings
    Languages(LanguagesCmd),

    /// Dump a schema's catalog metadata to a JSON snapshot
    Snapshot(SnapshotCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, session: &Session, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Table(cmd) => {
                let result = cmd.execute(session)?;
                Ok(result.format(format))
            }
            Command::Schema(cmd) => {
                let result = cmd.execute(session)?;
                Ok(result.format(format))
            }
            Command::Languages(cmd) => {
                let result = cmd.execute(session)?;
                Ok(result.format(format))
            }
            Command::Snapshot(cmd) => {
                let result = cmd.execute(session)?;
                Ok(result.format(format))
            }
        }
    }
}

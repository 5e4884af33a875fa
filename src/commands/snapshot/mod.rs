mod execute;
mod output;

pub use execute::SnapshotResult;

use clap::Args;
use std::path::PathBuf;

/// Dump a schema's catalog metadata to a JSON snapshot
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  schema_types snapshot --db postgres://localhost/shop -o shop.json
  schema_types table users -l go --db shop.json     # generate offline from the snapshot")]
pub struct SnapshotCmd {
    /// Schema to capture (defaults to --schema, the config file, then "public")
    pub schema: Option<String>,

    /// File to write; prints the snapshot when omitted
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Execute, Session};
    use crate::db::{Catalog, SnapshotCatalog};
    use crate::output::{OutputFormat, Outputable};
    use crate::test_utils::fixture_catalog;
    use crate::types::TableRef;
    use rstest::{fixture, rstest};

    #[fixture]
    fn session() -> Session {
        Session::with_catalog(Box::new(fixture_catalog()), "public")
    }

    #[rstest]
    fn test_snapshot_to_file_round_trips(session: Session) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.json");

        let result = SnapshotCmd {
            schema: Some("billing".to_string()),
            out: Some(path.clone()),
        }
        .execute(&session)
        .unwrap();
        assert_eq!(result.tables, 1);
        assert_eq!(result.columns, 2);

        let reloaded = SnapshotCatalog::load(&path).unwrap();
        let edges = reloaded
            .list_foreign_keys(&TableRef::new("billing", "invoices"), "order_id")
            .unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].target_table, "orders");
        assert!(result.to_text().contains("Wrote 1 tables (2 columns) from schema 'billing'"));
    }

    #[rstest]
    fn test_snapshot_without_out_prints_document(session: Session) {
        let result = SnapshotCmd {
            schema: None,
            out: None,
        }
        .execute(&session)
        .unwrap();
        assert_eq!(result.schema, "public");
        assert_eq!(result.tables, 5);

        let printed = result.format(OutputFormat::Text);
        let parsed = SnapshotCatalog::from_json_str(&printed).unwrap();
        assert_eq!(parsed.list_tables("public").unwrap().len(), 5);
    }
}

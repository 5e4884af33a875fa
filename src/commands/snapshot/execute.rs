use std::error::Error;
use std::fs;

use serde::Serialize;

use super::SnapshotCmd;
use crate::commands::{Execute, Session};
use crate::db::Snapshot;

/// Result of the snapshot command execution
#[derive(Debug, Serialize)]
pub struct SnapshotResult {
    pub schema: String,
    pub tables: usize,
    pub columns: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub snapshot: Snapshot,
}

impl Execute for SnapshotCmd {
    type Output = SnapshotResult;

    fn execute(self, session: &Session) -> Result<Self::Output, Box<dyn Error>> {
        let schema = self
            .schema
            .unwrap_or_else(|| session.default_schema().to_string());
        let snapshot = Snapshot::capture(session.catalog()?, &schema)?;

        let table_list = snapshot.schemas.iter().flat_map(|s| s.tables.iter());
        let tables = table_list.clone().count();
        let columns = table_list.map(|t| t.columns.len()).sum::<usize>();

        let path = match &self.out {
            Some(out) => {
                let json = serde_json::to_string_pretty(&snapshot)?;
                fs::write(out, json)
                    .map_err(|e| format!("Failed to write snapshot to {}: {}", out.display(), e))?;
                tracing::info!(path = %out.display(), tables, "snapshot written");
                Some(out.display().to_string())
            }
            None => None,
        };

        Ok(SnapshotResult {
            schema,
            tables,
            columns,
            path,
            snapshot,
        })
    }
}

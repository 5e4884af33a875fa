//! Output formatting for snapshot command results.

use super::execute::SnapshotResult;
use crate::output::Outputable;

impl Outputable for SnapshotResult {
    /// A summary when the snapshot went to a file, the document itself otherwise.
    fn to_text(&self) -> String {
        match &self.path {
            Some(path) => format!(
                "Wrote {} tables ({} columns) from schema '{}' to {}",
                self.tables, self.columns, self.schema, path
            ),
            None => serde_json::to_string_pretty(&self.snapshot).unwrap_or_default(),
        }
    }
}

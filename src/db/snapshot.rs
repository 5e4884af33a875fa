//! JSON snapshot catalog.
//!
//! A snapshot is a plain JSON dump of the catalog for one or more schemas.
//! It backs offline generation from the CLI and doubles as the synthetic
//! catalog used throughout the tests. Array order in the document is the
//! catalog order.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::{Catalog, DbError};
use crate::types::{ColumnInfo, ForeignKeyEdge, TableRef};

/// Top-level snapshot document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub schemas: Vec<SchemaSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    pub name: String,
    #[serde(default)]
    pub tables: Vec<TableSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<ColumnSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSnapshot {
    #[serde(flatten)]
    pub info: ColumnInfo,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<ColumnReference>,
}

/// The referenced side of one foreign-key edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnReference {
    pub constraint: String,
    pub table: String,
    pub column: String,
}

impl Snapshot {
    /// Read one schema out of any catalog.
    pub fn capture(catalog: &dyn Catalog, schema: &str) -> Result<Self, DbError> {
        let mut tables = Vec::new();

        for name in catalog.list_tables(schema)? {
            let table = TableRef::new(schema, &name);
            let mut columns = Vec::new();

            for info in catalog.list_columns(&table)? {
                let references = catalog
                    .list_foreign_keys(&table, &info.name)?
                    .into_iter()
                    .map(|edge| ColumnReference {
                        constraint: edge.constraint_name,
                        table: edge.target_table,
                        column: edge.target_column,
                    })
                    .collect();
                columns.push(ColumnSnapshot { info, references });
            }

            tables.push(TableSnapshot { name, columns });
        }

        Ok(Self {
            schemas: vec![SchemaSnapshot {
                name: schema.to_string(),
                tables,
            }],
        })
    }
}

/// Catalog backed by an in-memory [`Snapshot`].
#[derive(Debug, Clone, Default)]
pub struct SnapshotCatalog {
    snapshot: Snapshot,
}

impl SnapshotCatalog {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DbError> {
        serde_json::from_str(json)
            .map(Self::new)
            .map_err(|e| DbError::SnapshotRead {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })
    }

    /// Load a snapshot file.
    pub fn load(path: &Path) -> Result<Self, DbError> {
        let content = fs::read_to_string(path).map_err(|e| DbError::SnapshotRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content)
            .map(Self::new)
            .map_err(|e| DbError::SnapshotRead {
                path: path.display().to_string(),
                message: format!("Invalid JSON: {}", e),
            })
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    fn find_table(&self, table: &TableRef) -> Option<&TableSnapshot> {
        self.snapshot
            .schemas
            .iter()
            .filter(|s| s.name == table.schema)
            .flat_map(|s| s.tables.iter())
            .find(|t| t.name == table.name)
    }
}

impl Catalog for SnapshotCatalog {
    fn backend_name(&self) -> &'static str {
        "Snapshot"
    }

    fn list_tables(&self, schema: &str) -> Result<Vec<String>, DbError> {
        Ok(self
            .snapshot
            .schemas
            .iter()
            .filter(|s| s.name == schema)
            .flat_map(|s| s.tables.iter().map(|t| t.name.clone()))
            .collect())
    }

    fn table_exists(&self, table: &TableRef) -> Result<bool, DbError> {
        Ok(self.find_table(table).is_some())
    }

    fn list_columns(&self, table: &TableRef) -> Result<Vec<ColumnInfo>, DbError> {
        Ok(self
            .find_table(table)
            .map(|t| t.columns.iter().map(|c| c.info.clone()).collect())
            .unwrap_or_default())
    }

    fn list_foreign_keys(&self, table: &TableRef, column: &str) -> Result<Vec<ForeignKeyEdge>, DbError> {
        let Some(found) = self.find_table(table) else {
            return Ok(vec![]);
        };

        Ok(found
            .columns
            .iter()
            .filter(|c| c.info.name == column)
            .flat_map(|c| c.references.iter())
            .map(|r| ForeignKeyEdge {
                constraint_name: r.constraint.clone(),
                source_table: table.name.clone(),
                source_column: column.to_string(),
                target_table: r.table.clone(),
                target_column: r.column.clone(),
            })
            .collect())
    }
}

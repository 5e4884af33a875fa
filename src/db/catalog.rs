//! Catalog trait for abstracting where table metadata comes from.

use crate::types::{ColumnInfo, ForeignKeyEdge, TableRef};

use super::DbError;

/// Read-only access to a relational catalog.
///
/// Implementations are trusted: results are taken as correct and complete,
/// and nothing here checks referential integrity.
pub trait Catalog: Send + Sync {
    /// Get the backend name for logging/debugging.
    fn backend_name(&self) -> &'static str;

    /// Names of all tables in `schema`, in catalog enumeration order.
    ///
    /// An unknown schema has no tables.
    fn list_tables(&self, schema: &str) -> Result<Vec<String>, DbError>;

    /// Check if a table exists.
    fn table_exists(&self, table: &TableRef) -> Result<bool, DbError>;

    /// Columns of `table` ordered by ordinal position.
    ///
    /// Returns an empty list both for a table without columns and for a
    /// table that does not exist; use `table_exists` to tell them apart.
    fn list_columns(&self, table: &TableRef) -> Result<Vec<ColumnInfo>, DbError>;

    /// Foreign-key edges leaving `table.column`, one per constraint,
    /// ordered by the column's position in each key.
    fn list_foreign_keys(&self, table: &TableRef, column: &str) -> Result<Vec<ForeignKeyEdge>, DbError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        // Compile-time check: generators take `&dyn Catalog`
        fn accepts_catalog(_catalog: &dyn Catalog) {}
        let _ = accepts_catalog;
    }
}

//! Catalog data types shared by the catalog readers and the generators.
//!
//! These mirror what the relational catalog reports about a table: its
//! columns in ordinal order and the foreign-key edges hanging off each column.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Schema used when a table name is given without a `schema.` qualifier.
pub const DEFAULT_SCHEMA: &str = "public";

/// A schema-qualified table name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableRef {
    pub schema: String,
    pub name: String,
}

impl TableRef {
    pub fn new(schema: &str, name: &str) -> Self {
        Self {
            schema: schema.to_string(),
            name: name.to_string(),
        }
    }

    /// Parse `schema.table` or a bare `table`, resolving bare names against
    /// `default_schema`.
    ///
    /// Only the first `.` separates the schema, so `a.b.c` is table `b.c`
    /// in schema `a`.
    pub fn parse(input: &str, default_schema: &str) -> Self {
        match input.split_once('.') {
            Some((schema, name)) if !schema.is_empty() && !name.is_empty() => {
                Self::new(schema, name)
            }
            _ => Self::new(default_schema, input),
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.schema, self.name)
    }
}

/// One column as reported by `Catalog::list_columns`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub declared_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// One column-to-column reference implied by a foreign-key constraint.
///
/// Composite keys produce one edge per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyEdge {
    pub constraint_name: String,
    pub source_table: String,
    pub source_column: String,
    pub target_table: String,
    pub target_column: String,
}

/// A column together with its foreign-key edges, ready for rendering.
///
/// Built fresh for every generation request; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub table_name: String,
    pub column_name: String,
    pub declared_type: String,
    pub default_expression: Option<String>,
    pub foreign_keys: Vec<ForeignKeyEdge>,
}

impl ColumnDescriptor {
    pub fn from_info(table: &TableRef, info: ColumnInfo, foreign_keys: Vec<ForeignKeyEdge>) -> Self {
        Self {
            table_name: table.name.clone(),
            column_name: info.name,
            declared_type: info.declared_type,
            default_expression: info.default,
            foreign_keys,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("users", "public", "users")]
    #[case("billing.invoices", "billing", "invoices")]
    #[case("a.b.c", "a", "b.c")]
    #[case(".users", "public", ".users")]
    #[case("users.", "public", "users.")]
    fn test_table_ref_parse(#[case] input: &str, #[case] schema: &str, #[case] name: &str) {
        let table = TableRef::parse(input, DEFAULT_SCHEMA);
        assert_eq!(table.schema, schema);
        assert_eq!(table.name, name);
    }

    #[rstest]
    fn test_table_ref_display() {
        assert_eq!(TableRef::new("public", "users").to_string(), "public.users");
    }

    #[rstest]
    fn test_column_info_deserializes_without_default() {
        let info: ColumnInfo = serde_json::from_str(r#"{"name": "id", "type": "int4"}"#).unwrap();
        assert_eq!(info.declared_type, "int4");
        assert_eq!(info.default, None);
    }

    #[rstest]
    fn test_descriptor_takes_table_name_only() {
        let table = TableRef::new("billing", "invoices");
        let info = ColumnInfo {
            name: "total".to_string(),
            declared_type: "numeric".to_string(),
            default: Some("0".to_string()),
        };
        let column = ColumnDescriptor::from_info(&table, info, vec![]);
        assert_eq!(column.table_name, "invoices");
        assert_eq!(column.default_expression.as_deref(), Some("0"));
    }
}

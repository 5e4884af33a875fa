//! Catalog access.
//!
//! This module provides the read-only catalog layer the generators consume:
//! - The `Catalog` trait (tables, columns, foreign keys)
//! - A PostgreSQL reader over `information_schema`
//! - A JSON snapshot reader, used offline and as the test catalog
//! - Configuration resolving which of the two to open

mod catalog;
mod config;
mod postgres;
mod snapshot;

pub use catalog::Catalog;
pub use config::{DatabaseConfig, PostgresConfig};
pub use self::postgres::PostgresCatalog;
pub use snapshot::{ColumnReference, ColumnSnapshot, SchemaSnapshot, Snapshot, SnapshotCatalog, TableSnapshot};

use thiserror::Error;

/// Catalog error types
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to connect to '{target}': {message}")]
    ConnectFailed { target: String, message: String },

    #[error("Catalog query failed: {message}")]
    QueryFailed { message: String },

    #[error("Failed to read snapshot '{path}': {message}")]
    SnapshotRead { path: String, message: String },

    #[error("Invalid catalog configuration: {message}")]
    InvalidConfig { message: String },
}
